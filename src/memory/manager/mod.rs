/*!
 * Memory Management
 *
 * Contiguous allocator over a fixed-capacity simulated address space.
 *
 * ## State
 *
 * A [`MemoryManager`] owns everything a simulation needs, so independent
 * simulations can run side by side:
 * - **AddressSpace**: one cell per unit, used to render `Show`
 * - **ProcessTable**: allocated segments sorted by address
 * - **HoleTracker**: free list plus the largest hole, rebuilt after every mutation
 *
 * ## Operations
 *
 * - `allocate` / `request`: place a segment with first-fit, best-fit or worst-fit
 * - `release`: free every segment of an owner
 * - `compact`: slide segments to address 0, leaving one trailing hole
 *
 * Each operation either commits completely or, for allocation, is rejected
 * before anything changes.
 */

mod allocator;

use super::address_space::AddressSpace;
use super::holes::HoleTracker;
use super::process_table::ProcessTable;
use super::types::{Hole, MemoryError, MemoryResult, MemoryStats, Segment};
use crate::core::limits::DEFAULT_CAPACITY;
use crate::core::types::{Owner, Size};
use log::info;
use std::collections::BTreeSet;

/// Memory manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryManager {
    capacity: Size,
    space: AddressSpace,
    table: ProcessTable,
    holes: HoleTracker,
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create memory manager with custom capacity
    pub fn with_capacity(capacity: Size) -> Self {
        info!("Memory manager initialized with {} units", capacity);
        Self {
            capacity,
            space: AddressSpace::new(capacity),
            table: ProcessTable::new(),
            holes: HoleTracker::new(capacity),
        }
    }

    pub fn capacity(&self) -> Size {
        self.capacity
    }

    /// Allocated segments in address order
    pub fn segments(&self) -> &[Segment] {
        self.table.segments()
    }

    /// Free holes in address order
    pub fn holes(&self) -> &[Hole] {
        self.holes.holes()
    }

    /// Largest hole as of the last mutation
    pub fn max_hole(&self) -> Size {
        self.holes.max_hole()
    }

    pub fn used(&self) -> Size {
        self.table.used()
    }

    pub fn available(&self) -> Size {
        self.capacity - self.used()
    }

    /// Segments held by `owner`, in address order
    pub fn segments_of(&self, owner: Owner) -> Vec<Segment> {
        self.table.owned_by(owner).copied().collect()
    }

    /// Units held by `owner` across all its segments
    pub fn owner_usage(&self, owner: Owner) -> Size {
        self.table.owned_by(owner).map(Segment::size).sum()
    }

    /// Render the address space: owner symbol per owned cell, `.` per free cell
    pub fn show(&self) -> String {
        self.space.render()
    }

    pub fn stats(&self) -> MemoryStats {
        let used = self.used();
        let available = self.capacity - used;
        let largest_hole = self.max_hole();
        let owners: BTreeSet<Owner> = self.table.iter().map(|s| s.owner).collect();

        MemoryStats {
            capacity: self.capacity,
            used,
            available,
            usage_percentage: if self.capacity == 0 {
                0.0
            } else {
                used as f64 / self.capacity as f64 * 100.0
            },
            segments: self.table.len(),
            owners: owners.len(),
            holes: self.holes.len(),
            largest_hole,
            external_fragmentation: if available == 0 {
                0.0
            } else {
                1.0 - largest_hole as f64 / available as f64
            },
        }
    }

    /// Check every structural invariant of the current state
    ///
    /// Returns [`MemoryError::InvariantViolation`] describing the first
    /// broken invariant.
    pub fn verify(&self) -> MemoryResult<()> {
        let violation = |msg: String| Err(MemoryError::InvariantViolation(msg));

        let segments = self.table.segments();
        for pair in segments.windows(2) {
            if pair[0].end >= pair[1].begin {
                return violation(format!(
                    "segments {} and {} out of order or overlapping",
                    pair[0], pair[1]
                ));
            }
        }
        if let Some(last) = segments.last() {
            if last.end >= self.capacity {
                return violation(format!("segment {last} beyond capacity {}", self.capacity));
            }
        }

        let holes = self.holes.holes();
        for pair in holes.windows(2) {
            if pair[0].end + 1 >= pair[1].begin {
                return violation(format!("holes {} and {} not maximal", pair[0], pair[1]));
            }
        }
        for hole in holes {
            if let Some(segment) = segments
                .iter()
                .find(|s| s.begin <= hole.end && hole.begin <= s.end)
            {
                return violation(format!("hole {hole} overlaps segment {segment}"));
            }
        }

        let accounted = self.table.used() + self.holes.total_free();
        if accounted != self.capacity {
            return violation(format!(
                "{accounted} units accounted for, capacity is {}",
                self.capacity
            ));
        }

        let largest = holes.iter().map(Hole::size).max().unwrap_or(0);
        if largest != self.holes.max_hole() {
            return violation(format!(
                "max hole {} but largest hole is {largest}",
                self.holes.max_hole()
            ));
        }

        let mut expected = AddressSpace::new(self.capacity);
        segments.iter().for_each(|s| expected.mark(s));
        if expected != self.space {
            return violation("address space out of sync with process table".into());
        }

        Ok(())
    }

    fn rebuild_holes(&mut self) {
        self.holes.rebuild(&self.table, self.capacity);
    }
}
