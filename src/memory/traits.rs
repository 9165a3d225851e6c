/*!
 * Memory Traits
 * Memory management abstractions
 */

use super::compactor::CompactionReport;
use super::manager::MemoryManager;
use super::placement::PlacementStrategy;
use super::types::*;
use crate::core::types::{Owner, Size};

/// Contiguous allocator interface
pub trait Allocator {
    /// Place a segment of `size` units for `owner`
    fn allocate(
        &mut self,
        owner: Owner,
        size: Size,
        strategy: PlacementStrategy,
    ) -> MemoryResult<Segment>;

    /// Free every segment of `owner`, returning the units freed
    fn release(&mut self, owner: Owner) -> Size;

    /// Remove external fragmentation
    fn compact(&mut self) -> CompactionReport;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size);

    /// Get units held by a specific owner
    fn owner_usage(&self, owner: Owner) -> Size;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}

impl Allocator for MemoryManager {
    fn allocate(
        &mut self,
        owner: Owner,
        size: Size,
        strategy: PlacementStrategy,
    ) -> MemoryResult<Segment> {
        MemoryManager::allocate(self, owner, size, strategy)
    }

    fn release(&mut self, owner: Owner) -> Size {
        MemoryManager::release(self, owner)
    }

    fn compact(&mut self) -> CompactionReport {
        MemoryManager::compact(self)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        (self.capacity(), self.used(), self.available())
    }

    fn owner_usage(&self, owner: Owner) -> Size {
        MemoryManager::owner_usage(self, owner)
    }
}
