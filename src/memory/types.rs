/*!
 * Memory Types
 * Segments, holes, errors and statistics shared by the allocation engine
 */

use crate::core::limits::{PRESSURE_CRITICAL, PRESSURE_HIGH, PRESSURE_MEDIUM};
use crate::core::types::{Address, Owner, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Not enough memory: requested {requested} units, largest hole is {largest_hole} units")]
    #[diagnostic(
        code(memory::insufficient_memory),
        help("Free an owner or run Compact to merge the free space into one hole.")
    )]
    InsufficientMemory { requested: Size, largest_hole: Size },

    #[error("Unknown algorithm: {0}")]
    #[diagnostic(
        code(memory::unknown_algorithm),
        help("Use F (first-fit), B (best-fit) or W (worst-fit).")
    )]
    UnknownAlgorithm(char),

    #[error("Cannot allocate a zero-sized segment")]
    #[diagnostic(code(memory::zero_size))]
    ZeroSizedAllocation,

    #[error("Allocator invariant violated: {0}")]
    #[diagnostic(
        code(memory::invariant_violation),
        help("This is a bug in the allocation engine, not a user error.")
    )]
    InvariantViolation(String),
}

impl MemoryError {
    /// Engine fault rather than a rejected request
    pub fn is_fault(&self) -> bool {
        matches!(self, MemoryError::InvariantViolation(_))
    }
}

/// Contiguous range owned by one process symbol, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub owner: Owner,
    pub begin: Address,
    pub end: Address,
}

impl Segment {
    /// Segment of `size` units starting at `begin`; `size` must be positive
    pub fn new(owner: Owner, begin: Address, size: Size) -> Self {
        debug_assert!(size > 0, "segments cannot be empty");
        Self {
            owner,
            begin,
            end: begin + size - 1,
        }
    }

    pub fn size(&self) -> Size {
        self.end - self.begin + 1
    }

    /// First address after the segment
    pub fn next_address(&self) -> Address {
        self.end + 1
    }

    pub fn overlaps(&self, other: &Segment) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[{},{}]", self.owner, self.begin, self.end)
    }
}

/// Maximal free range, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hole {
    pub begin: Address,
    pub end: Address,
}

impl Hole {
    pub fn new(begin: Address, end: Address) -> Self {
        debug_assert!(begin <= end, "holes cannot be empty");
        Self { begin, end }
    }

    pub fn size(&self) -> Size {
        self.end - self.begin + 1
    }

    /// Whether a request of `size` units fits in this hole
    pub fn fits(&self, size: Size) -> bool {
        self.size() >= size
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.begin, self.end)
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub capacity: Size,
    pub used: Size,
    pub available: Size,
    pub usage_percentage: f64,
    pub segments: usize,
    pub owners: usize,
    pub holes: usize,
    pub largest_hole: Size,
    /// `1 - largest_hole / available`, 0 when nothing is free
    pub external_fragmentation: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_ratio(self.usage_percentage / 100.0)
    }

    /// Free space exists but is split over several holes
    pub fn is_fragmented(&self) -> bool {
        self.holes > 1
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= PRESSURE_CRITICAL {
            MemoryPressure::Critical
        } else if ratio >= PRESSURE_HIGH {
            MemoryPressure::High
        } else if ratio >= PRESSURE_MEDIUM {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
