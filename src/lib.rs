/*!
 * Contiguous Memory Allocation Simulator
 * Placement, release and compaction over a fixed address space, with a command shell
 */

pub mod config;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod shell;

// Re-exports
pub use config::SimConfig;
pub use crate::core::errors::{ConfigError, ShellError};
pub use crate::core::types::{Address, Owner, Size};
pub use memory::{
    Allocator, CompactionReport, Hole, MemoryError, MemoryInfo, MemoryManager, MemoryPressure,
    MemoryResult, MemoryStats, PlacementStrategy, Segment,
};
pub use monitoring::init_tracing;
pub use shell::{Command, Flow, Shell};
