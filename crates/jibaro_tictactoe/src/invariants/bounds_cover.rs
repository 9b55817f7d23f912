//! Bounds cover: the visible rectangle keeps a margin around every mark.

use super::super::sparse::EXPANSION_STEP;
use super::super::SparseBoard;
use super::Invariant;

/// Invariant: every occupied cell lies at least two cells inside the bounds.
pub struct BoundsCoverOccupied;

impl Invariant<SparseBoard> for BoundsCoverOccupied {
    fn holds(board: &SparseBoard) -> bool {
        let bounds = board.bounds();
        board.occupied().all(|(pos, _)| {
            pos.row - EXPANSION_STEP >= bounds.min_row
                && pos.row + EXPANSION_STEP <= bounds.max_row
                && pos.col - EXPANSION_STEP >= bounds.min_col
                && pos.col + EXPANSION_STEP <= bounds.max_col
        })
    }

    fn description() -> &'static str {
        "Bounds keep a two-cell margin around every occupied cell"
    }
}
