//! Ladder structure: rows of rungs between adjacent verticals.
//!
//! A ladder is generated once per game and never mutated afterwards.
//! - `generator` builds rows left to right under the no-adjacent-rungs rule
//! - `traversal` follows a vertical from top to bottom

pub mod generator;
pub mod traversal;

pub use generator::{generate_ladder, generate_row, RandomRungs, RungSource, ScriptedRungs};
pub use traversal::resolve;

use serde::Serialize;

use crate::domain::ValidationError;

/// One horizontal row. `rungs[i]` connects vertical `i` to vertical `i + 1`.
///
/// Invariant: no two adjacent positions are both set, so every vertical
/// touches at most one rung per row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RungRow {
    rungs: Vec<bool>,
}

impl RungRow {
    pub fn new(rungs: Vec<bool>) -> Result<Self, ValidationError> {
        if let Some(position) = rungs.windows(2).position(|pair| pair[0] && pair[1]) {
            return Err(ValidationError::AdjacentRungs { position });
        }
        Ok(Self { rungs })
    }

    /// Construction path for the generator, which upholds the invariant itself.
    pub(crate) fn from_generated(rungs: Vec<bool>) -> Self {
        debug_assert!(!rungs.windows(2).any(|pair| pair[0] && pair[1]));
        Self { rungs }
    }

    /// Row with no rungs at all.
    pub fn empty(width: usize) -> Self {
        Self {
            rungs: vec![false; width],
        }
    }

    pub fn width(&self) -> usize {
        self.rungs.len()
    }

    /// Whether a rung joins verticals `position` and `position + 1`.
    /// Out-of-range positions have no rung.
    pub fn has_rung(&self, position: usize) -> bool {
        self.rungs.get(position).copied().unwrap_or(false)
    }

    pub fn rungs(&self) -> &[bool] {
        &self.rungs
    }
}

/// Ordered rows, top to bottom. Height is the row count; all rows share one width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ladder {
    width: usize,
    rows: Vec<RungRow>,
}

impl Ladder {
    /// Assemble a ladder from pre-built rows.
    pub fn from_rows(rows: Vec<RungRow>) -> Result<Self, ValidationError> {
        let Some(first) = rows.first() else {
            return Err(ValidationError::HeightNotPositive { value: 0 });
        };
        let width = first.width();
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.width() != width) {
            return Err(ValidationError::RowWidthMismatch {
                row,
                expected: width,
                actual: bad.width(),
            });
        }
        Ok(Self { width, rows })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of verticals (one per participant).
    pub fn verticals(&self) -> usize {
        self.width + 1
    }

    pub fn rows(&self) -> &[RungRow] {
        &self.rows
    }

    /// Final vertical for a participant starting on `start`.
    pub fn resolve(&self, start: usize) -> Result<usize, ValidationError> {
        traversal::resolve(self, start)
    }

    /// Final vertical for every start, indexed by start.
    ///
    /// Each row swaps disjoint neighbour pairs, so the result is always a
    /// permutation of `0..=width`.
    pub fn destinations(&self) -> Vec<usize> {
        (0..self.verticals())
            .map(|start| traversal::descend(self, start))
            .collect()
    }
}
