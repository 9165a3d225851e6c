/*!
 * Memory Module
 * Contiguous allocation engine: placement, release and compaction
 */

pub mod address_space;
pub mod compactor;
pub mod holes;
pub mod manager;
pub mod placement;
pub mod process_table;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use address_space::AddressSpace;
pub use compactor::CompactionReport;
pub use holes::HoleTracker;
pub use manager::MemoryManager;
pub use placement::PlacementStrategy;
pub use process_table::ProcessTable;
pub use traits::*;
pub use types::*;
