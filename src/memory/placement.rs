/*!
 * Placement Strategies
 * First-fit, best-fit and worst-fit hole selection
 */

use super::holes::HoleTracker;
use super::types::{Hole, MemoryError, MemoryResult};
use crate::core::types::Size;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hole selection policy for a new segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStrategy {
    /// Lowest-addressed hole large enough
    FirstFit,
    /// Smallest hole large enough, lowest address on ties
    BestFit,
    /// Hole matching the tracked largest size, lowest address on ties
    WorstFit,
}

impl PlacementStrategy {
    pub const ALL: [PlacementStrategy; 3] = [
        PlacementStrategy::FirstFit,
        PlacementStrategy::BestFit,
        PlacementStrategy::WorstFit,
    ];

    /// Parse a command symbol: `F`, `B` or `W`
    ///
    /// Symbols are matched exactly; input is uppercased before it gets here.
    pub fn from_symbol(symbol: char) -> MemoryResult<Self> {
        match symbol {
            'F' => Ok(PlacementStrategy::FirstFit),
            'B' => Ok(PlacementStrategy::BestFit),
            'W' => Ok(PlacementStrategy::WorstFit),
            other => Err(MemoryError::UnknownAlgorithm(other)),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PlacementStrategy::FirstFit => 'F',
            PlacementStrategy::BestFit => 'B',
            PlacementStrategy::WorstFit => 'W',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlacementStrategy::FirstFit => "first-fit",
            PlacementStrategy::BestFit => "best-fit",
            PlacementStrategy::WorstFit => "worst-fit",
        }
    }

    /// Choose a hole for `size` units, `None` if nothing qualifies
    pub fn select(self, tracker: &HoleTracker, size: Size) -> Option<Hole> {
        let holes = tracker.holes();
        match self {
            PlacementStrategy::FirstFit => first_fit(holes, size),
            PlacementStrategy::BestFit => best_fit(holes, size),
            PlacementStrategy::WorstFit => worst_fit(holes, size, tracker.max_hole()),
        }
    }
}

impl TryFrom<char> for PlacementStrategy {
    type Error = MemoryError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn first_fit(holes: &[Hole], size: Size) -> Option<Hole> {
    holes.iter().find(|h| h.fits(size)).copied()
}

fn best_fit(holes: &[Hole], size: Size) -> Option<Hole> {
    // min_by_key keeps the first of equal minimums, i.e. the lowest address
    holes
        .iter()
        .filter(|h| h.fits(size))
        .min_by_key(|h| h.size())
        .copied()
}

// Compares against the max recorded at the last rebuild, not a fresh maximum.
// The two agree as long as every mutation ends with a rebuild.
fn worst_fit(holes: &[Hole], size: Size, tracked_max: Size) -> Option<Hole> {
    holes
        .iter()
        .find(|h| h.fits(size) && h.size() == tracked_max)
        .copied()
}
