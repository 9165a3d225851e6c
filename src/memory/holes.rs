/*!
 * Hole Tracker
 * Free list derived from the process table
 *
 * The hole list is rebuilt from scratch after every mutation by walking the
 * sorted segments. Adjacent free units therefore always land in one hole and
 * no merge step is needed. Every scan is linear in the segment count.
 */

use super::process_table::ProcessTable;
use super::types::Hole;
use crate::core::types::{Address, Size};

/// Address-ordered list of maximal holes plus the largest hole size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleTracker {
    holes: Vec<Hole>,
    max_hole: Size,
}

impl HoleTracker {
    /// Tracker for an empty address space: one hole spanning everything
    pub fn new(capacity: Size) -> Self {
        let mut tracker = Self {
            holes: Vec::new(),
            max_hole: 0,
        };
        tracker.rebuild(&ProcessTable::new(), capacity);
        tracker
    }

    /// Recompute every hole and `max_hole` from the sorted segments
    pub fn rebuild(&mut self, table: &ProcessTable, capacity: Size) {
        self.holes.clear();
        self.max_hole = 0;

        let mut prev: Address = 0;
        for segment in table.iter() {
            if segment.begin > prev {
                self.push(Hole::new(prev, segment.begin - 1));
            }
            prev = segment.next_address();
        }
        if prev < capacity {
            self.push(Hole::new(prev, capacity - 1));
        }
    }

    fn push(&mut self, hole: Hole) {
        self.max_hole = self.max_hole.max(hole.size());
        self.holes.push(hole);
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Largest hole as of the last rebuild, 0 when memory is full
    pub fn max_hole(&self) -> Size {
        self.max_hole
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Total free units
    pub fn total_free(&self) -> Size {
        self.holes.iter().map(Hole::size).sum()
    }
}
