//! Five-in-a-row detection for the infinite board.
//!
//! A full scan is unbounded, so only the lines through the last move are
//! inspected. Only the cell just played can complete a new run.

use super::super::{GameOutcome, Mark, Position, SparseBoard};

/// Run length needed to win on the infinite board.
pub const WIN_LENGTH: usize = 5;

/// Axes checked through the last move: horizontal, vertical,
/// diagonal down-right, diagonal up-right.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Evaluates the board after `last_move`.
///
/// Returns `Win` with the full contiguous run (negative end first) when
/// it reaches [`WIN_LENGTH`]. The infinite board never draws.
pub fn check_sparse(board: &SparseBoard, last_move: Position) -> GameOutcome {
    let mark = board.get(last_move);
    if mark == Mark::Empty {
        return GameOutcome::InProgress;
    }

    for (d_row, d_col) in DIRECTIONS {
        let behind = run_length(board, last_move, mark, -d_row, -d_col);
        let ahead = run_length(board, last_move, mark, d_row, d_col);
        if behind + ahead + 1 >= WIN_LENGTH as i32 {
            let start = last_move.offset(-d_row * behind, -d_col * behind);
            let line = (0..=behind + ahead)
                .map(|i| start.offset(d_row * i, d_col * i))
                .collect();
            return GameOutcome::Win { mark, line };
        }
    }

    GameOutcome::InProgress
}

/// Longest run of `mark` that a stone at `pos` would sit on, counting
/// `pos` itself. The cell at `pos` is not read.
pub fn run_through(board: &SparseBoard, pos: Position, mark: Mark) -> usize {
    if mark == Mark::Empty {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&(d_row, d_col)| {
            run_length(board, pos, mark, -d_row, -d_col) + run_length(board, pos, mark, d_row, d_col) + 1
        })
        .max()
        .unwrap_or(1) as usize
}

/// Counts consecutive `mark` cells from `from` (exclusive) along a direction.
fn run_length(board: &SparseBoard, from: Position, mark: Mark, d_row: i32, d_col: i32) -> i32 {
    let mut count = 0;
    let mut current = from.offset(d_row, d_col);
    while board.get(current) == mark {
        count += 1;
        current = current.offset(d_row, d_col);
    }
    count
}
