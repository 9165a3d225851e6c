/*!
 * Memory Allocator Implementation
 * Allocation, release and compaction logic
 */

use super::super::compactor::{self, CompactionReport};
use super::super::placement::PlacementStrategy;
use super::super::types::{MemoryError, MemoryResult, Segment};
use super::MemoryManager;
use crate::core::types::{Owner, Size};
use log::{debug, error, info};

impl MemoryManager {
    /// Allocate `size` contiguous units for `owner`
    ///
    /// Fails with [`MemoryError::InsufficientMemory`] without touching any
    /// state when `size` exceeds the largest hole.
    pub fn allocate(
        &mut self,
        owner: Owner,
        size: Size,
        strategy: PlacementStrategy,
    ) -> MemoryResult<Segment> {
        self.check_fits(owner, size)?;
        self.place(owner, size, strategy)
    }

    /// Allocate with the strategy given as its command symbol (`F`, `B`, `W`)
    ///
    /// The size is checked before the symbol, so an oversized request with an
    /// unknown symbol reports insufficient memory.
    pub fn request(&mut self, owner: Owner, size: Size, symbol: char) -> MemoryResult<Segment> {
        self.check_fits(owner, size)?;
        let strategy = PlacementStrategy::from_symbol(symbol).map_err(|err| {
            debug!("Rejected allocation for owner {}: unknown algorithm {:?}", owner, symbol);
            err
        })?;
        self.place(owner, size, strategy)
    }

    fn check_fits(&self, owner: Owner, size: Size) -> MemoryResult<()> {
        if size == 0 {
            return Err(MemoryError::ZeroSizedAllocation);
        }

        let largest_hole = self.max_hole();
        if size > largest_hole {
            debug!(
                "Not enough memory: owner {} requested {} units, largest hole is {} ({} / {} used)",
                owner,
                size,
                largest_hole,
                self.used(),
                self.capacity
            );
            return Err(MemoryError::InsufficientMemory {
                requested: size,
                largest_hole,
            });
        }
        Ok(())
    }

    fn place(
        &mut self,
        owner: Owner,
        size: Size,
        strategy: PlacementStrategy,
    ) -> MemoryResult<Segment> {
        let hole = strategy.select(&self.holes, size).ok_or_else(|| {
            error!(
                "{} found no hole for {} units although max hole is {}",
                strategy,
                size,
                self.max_hole()
            );
            MemoryError::InvariantViolation(format!(
                "{strategy} found no hole for {size} units with max hole {}",
                self.max_hole()
            ))
        })?;

        let segment = self.table.insert(owner, hole.begin, size);
        self.space.mark(&segment);
        self.rebuild_holes();
        debug_assert_eq!(self.verify(), Ok(()));

        info!(
            "Allocated {} units at {} for owner {} ({} in hole {}, {} holes left, max hole {})",
            size,
            segment.begin,
            owner,
            strategy,
            hole,
            self.holes.len(),
            self.max_hole()
        );
        Ok(segment)
    }

    /// Free every segment owned by `owner`, returning the units freed
    ///
    /// Releasing an owner that holds nothing changes nothing.
    pub fn release(&mut self, owner: Owner) -> Size {
        let removed = self.table.remove_all(owner);
        if removed.is_empty() {
            debug!("Release of owner {} ignored: it holds no memory", owner);
            return 0;
        }

        for segment in &removed {
            self.space.clear(segment);
        }
        self.rebuild_holes();
        debug_assert_eq!(self.verify(), Ok(()));

        let freed: Size = removed.iter().map(Segment::size).sum();
        info!(
            "Released {} units ({} segments) from owner {}, {} units now available in {} holes",
            freed,
            removed.len(),
            owner,
            self.available(),
            self.holes.len()
        );
        freed
    }

    /// Slide all segments to address 0 in their current order
    ///
    /// Leaves a single hole at the top of the address space, or none when
    /// memory is full.
    pub fn compact(&mut self) -> CompactionReport {
        if self.table.is_empty() {
            debug!("Compaction skipped: no segments allocated");
            return CompactionReport::default();
        }

        let holes_before = self.holes.len();
        let report = compactor::compact(&mut self.table);

        self.space.reset();
        for segment in self.table.iter() {
            self.space.mark(segment);
        }
        self.rebuild_holes();
        debug_assert_eq!(self.verify(), Ok(()));

        info!(
            "Compacted memory: relocated {} segments, merged {} holes into {}",
            report.relocated,
            holes_before,
            self.holes.len()
        );
        report
    }
}
