/*!
 * Process Table
 * Allocated segments kept sorted by starting address
 */

use super::types::Segment;
use crate::core::types::{Address, Owner, Size};

/// Ordered collection of allocated segments
///
/// Segments are pairwise disjoint and sorted ascending by `begin`. One owner
/// may hold several segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    segments: Vec<Segment>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `[begin, begin + size - 1]` for `owner`, keeping address order
    ///
    /// The range must not overlap an existing segment.
    pub fn insert(&mut self, owner: Owner, begin: Address, size: Size) -> Segment {
        let segment = Segment::new(owner, begin, size);
        let index = self.segments.partition_point(|s| s.begin < segment.begin);

        debug_assert!(
            index == 0 || !self.segments[index - 1].overlaps(&segment),
            "{segment} overlaps its predecessor"
        );
        debug_assert!(
            index == self.segments.len() || !self.segments[index].overlaps(&segment),
            "{segment} overlaps its successor"
        );

        self.segments.insert(index, segment);
        segment
    }

    /// Remove every segment of `owner`, preserving the order of the rest
    ///
    /// Returns the removed segments; empty when the owner held nothing.
    pub fn remove_all(&mut self, owner: Owner) -> Vec<Segment> {
        let (removed, kept) = std::mem::take(&mut self.segments)
            .into_iter()
            .partition(|segment| segment.owner == owner);
        self.segments = kept;
        removed
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable view for relocation; callers must keep address order
    pub(super) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Segments owned by `owner`, in address order
    pub fn owned_by(&self, owner: Owner) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.owner == owner)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total units held by all segments
    pub fn used(&self) -> Size {
        self.segments.iter().map(Segment::size).sum()
    }
}
