//! The expandable board used by infinite tic-tac-toe.
//!
//! Only occupied cells are stored, keyed by [`Position::packed`]. The
//! visible rectangle starts at 5x5 and widens by two cells whenever a
//! mark lands within one cell of an edge, so every occupied cell always
//! has free space around it.

use super::action::MoveError;
use super::{Mark, Position};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Cells added past an edge each time it is widened.
pub const EXPANSION_STEP: i32 = 2;

/// Largest row or column magnitude a mark may be placed at.
///
/// Leaves room for the widened bounds and for neighbour lookups one cell
/// past them without leaving `i32`.
pub const MAX_COORDINATE: i32 = i32::MAX - (EXPANSION_STEP + 1);

/// Initial bounds: rows and cols `0..=4`.
pub const SEED_BOUNDS: Bounds = Bounds {
    min_row: 0,
    max_row: 4,
    min_col: 0,
    max_col: 4,
};

/// Inclusive visible rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Topmost visible row.
    pub min_row: i32,
    /// Bottommost visible row.
    pub max_row: i32,
    /// Leftmost visible column.
    pub min_col: i32,
    /// Rightmost visible column.
    pub max_col: i32,
}

impl Bounds {
    /// True if `pos` lies inside the rectangle.
    pub fn contains(&self, pos: Position) -> bool {
        (self.min_row..=self.max_row).contains(&pos.row)
            && (self.min_col..=self.max_col).contains(&pos.col)
    }

    /// Number of rows.
    pub fn height(&self) -> i64 {
        i64::from(self.max_row) - i64::from(self.min_row) + 1
    }

    /// Number of columns.
    pub fn width(&self) -> i64 {
        i64::from(self.max_col) - i64::from(self.min_col) + 1
    }

    /// Every position inside the rectangle, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.min_row..=self.max_row)
            .flat_map(move |row| (self.min_col..=self.max_col).map(move |col| Position::new(row, col)))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        SEED_BOUNDS
    }
}

/// Sparse, auto-expanding board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseBoard {
    cells: HashMap<u64, Mark>,
    bounds: Bounds,
}

impl SparseBoard {
    /// Creates an empty board with the seed bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at `pos`; unset cells are `Empty`.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells.get(&pos.packed()).copied().unwrap_or_default()
    }

    /// True if nothing is stored at `pos`.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Current visible rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        self.cells
            .iter()
            .map(|(&key, &mark)| (Position::unpack(key), mark))
    }

    /// True if a mark may be placed at `pos`; both coordinates must lie
    /// within [`MAX_COORDINATE`] of the origin.
    pub fn in_range(pos: Position) -> bool {
        let range = -MAX_COORDINATE..=MAX_COORDINATE;
        range.contains(&pos.row) && range.contains(&pos.col)
    }

    /// Places `mark` at `pos` and widens the bounds if needed.
    pub fn apply_move(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !Self::in_range(pos) {
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.is_empty_at(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        if mark.is_empty() {
            return Err(MoveError::EmptyMark);
        }
        self.cells.insert(pos.packed(), mark);
        self.expand(pos);
        Ok(())
    }

    /// Widens every bound that lies within one cell of `pos`.
    ///
    /// A bound moves out by [`EXPANSION_STEP`], or far enough to keep
    /// that margin around `pos` when `pos` was placed beyond it. Bounds
    /// saturate at the `i32` limits.
    pub fn expand(&mut self, pos: Position) {
        let before = self.bounds;
        let b = &mut self.bounds;
        if pos.row <= b.min_row.saturating_add(1) {
            b.min_row = b.min_row.min(pos.row).saturating_sub(EXPANSION_STEP);
        }
        if pos.row >= b.max_row.saturating_sub(1) {
            b.max_row = b.max_row.max(pos.row).saturating_add(EXPANSION_STEP);
        }
        if pos.col <= b.min_col.saturating_add(1) {
            b.min_col = b.min_col.min(pos.col).saturating_sub(EXPANSION_STEP);
        }
        if pos.col >= b.max_col.saturating_sub(1) {
            b.max_col = b.max_col.max(pos.col).saturating_add(EXPANSION_STEP);
        }
        if before != self.bounds {
            debug!(%pos, bounds = ?self.bounds, "Board expanded");
        }
    }

    /// Every empty position inside the bounds, row-major.
    pub fn available_moves(&self) -> Vec<Position> {
        self.bounds
            .positions()
            .filter(|pos| self.is_empty_at(*pos))
            .collect()
    }

    /// Empty positions adjacent (Chebyshev distance 1) to any occupied
    /// cell, deduplicated and row-major.
    pub fn relevant_moves(&self) -> Vec<Position> {
        let mut relevant = BTreeSet::new();
        for (pos, _) in self.occupied() {
            for d_row in -1..=1 {
                for d_col in -1..=1 {
                    let adjacent = pos.offset(d_row, d_col);
                    if self.is_empty_at(adjacent) {
                        relevant.insert(adjacent);
                    }
                }
            }
        }
        relevant.into_iter().collect()
    }

    /// Number of occupied cells among the eight neighbours of `pos`.
    pub fn occupied_neighbours(&self, pos: Position) -> usize {
        (-1..=1)
            .flat_map(|d_row| (-1..=1).map(move |d_col| (d_row, d_col)))
            .filter(|&(d_row, d_col)| (d_row, d_col) != (0, 0))
            .filter(|&(d_row, d_col)| !self.is_empty_at(pos.offset(d_row, d_col)))
            .count()
    }

    /// Removes the mark at `pos` and rewinds the bounds to `bounds`.
    ///
    /// Only for undoing a move made on a scratch board during search;
    /// `bounds` must be the value read just before that move.
    pub(crate) fn take_back(&mut self, pos: Position, bounds: Bounds) {
        self.cells.remove(&pos.packed());
        self.bounds = bounds;
    }

    /// Clears every cell and restores the seed bounds.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.bounds = SEED_BOUNDS;
    }

    /// Formats the visible rectangle as a human-readable string.
    pub fn display(&self) -> String {
        let b = self.bounds;
        let mut result = String::from("     ");
        for col in b.min_col..=b.max_col {
            result.push_str(&format!("{col:>3}"));
        }
        result.push('\n');
        for row in b.min_row..=b.max_row {
            result.push_str(&format!("{row:>4} "));
            for col in b.min_col..=b.max_col {
                result.push_str(&format!("{:>3}", self.get(Position::new(row, col)).to_string()));
            }
            result.push('\n');
        }
        result
    }
}
