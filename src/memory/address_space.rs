/*!
 * Address Space
 * Cell-per-unit occupancy view used for display
 */

use super::types::Segment;
use crate::core::limits::FREE_CELL;
use crate::core::types::{Address, Owner, Size};
use std::fmt;

/// Fixed-capacity range of cells, each free or owned by one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSpace {
    cells: Vec<Option<Owner>>,
}

impl AddressSpace {
    /// All-free address space of `capacity` units
    pub fn new(capacity: Size) -> Self {
        Self {
            cells: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> Size {
        self.cells.len()
    }

    /// Owner of the cell at `address`, `None` when free or out of range
    pub fn owner_at(&self, address: Address) -> Option<Owner> {
        self.cells.get(address).copied().flatten()
    }

    /// Mark every cell of `segment` as owned by its owner
    pub fn mark(&mut self, segment: &Segment) {
        self.fill(segment, Some(segment.owner));
    }

    /// Mark every cell of `segment` as free
    pub fn clear(&mut self, segment: &Segment) {
        self.fill(segment, None);
    }

    /// Free every cell
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Number of owned cells
    pub fn occupied(&self) -> Size {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// One character per cell: the owner symbol, or [`FREE_CELL`]
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.unwrap_or(FREE_CELL))
            .collect()
    }

    fn fill(&mut self, segment: &Segment, value: Option<Owner>) {
        debug_assert!(segment.end < self.cells.len(), "segment {segment} out of range");
        self.cells[segment.begin..=segment.end].fill(value);
    }
}

impl fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
