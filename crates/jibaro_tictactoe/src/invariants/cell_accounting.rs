//! Cell accounting: every fixed-board cell is either free or taken.

use super::super::FixedBoard;
use super::Invariant;

/// Invariant: available moves plus occupied cells always total nine.
pub struct CellAccounting;

impl Invariant<FixedBoard> for CellAccounting {
    fn holds(board: &FixedBoard) -> bool {
        board.available_moves().len() + board.occupied_count() == 9
    }

    fn description() -> &'static str {
        "Available and occupied cells account for the whole 3x3 grid"
    }
}
