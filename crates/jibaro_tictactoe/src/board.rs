//! The classic 3x3 board.

use super::action::MoveError;
use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Side length of the classic board.
pub const SIZE: i32 = 3;

/// 3x3 tic-tac-toe board.
///
/// A plain value type: `Copy` gives the search engine independent
/// boards to explore without touching the live game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedBoard {
    /// Cells in row-major order (0-8).
    cells: [Mark; 9],
}

impl FixedBoard {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major marks.
    pub fn from_marks(cells: [Mark; 9]) -> Self {
        Self { cells }
    }

    /// Returns the mark at `pos`, or `Empty` when `pos` is off the grid.
    pub fn get(&self, pos: Position) -> Mark {
        pos.to_index().map_or(Mark::Empty, |i| self.cells[i])
    }

    /// Places `mark` at `pos`.
    ///
    /// Fails without touching the board if `pos` is off the grid, the
    /// cell is taken, or `mark` is empty.
    pub fn apply_move(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        let index = pos.to_index().ok_or(MoveError::OutOfBounds(pos))?;
        if !self.cells[index].is_empty() {
            return Err(MoveError::CellOccupied(pos));
        }
        if mark.is_empty() {
            return Err(MoveError::EmptyMark);
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|m| **m == mark).count()
    }

    /// All empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_empty())
            .filter_map(|(i, _)| Position::from_index(i))
            .collect()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::from("  0 1 2\n");
        for row in 0..SIZE {
            result.push_str(&row.to_string());
            for col in 0..SIZE {
                result.push(' ');
                result.push_str(&self.get(Position::new(row, col)).to_string());
            }
            result.push('\n');
        }
        result
    }
}
