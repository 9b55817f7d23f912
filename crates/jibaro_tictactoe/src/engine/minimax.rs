//! Exhaustive minimax for the 3x3 board.
//!
//! The full game tree is at most nine plies deep, so the search runs to
//! terminal positions every time. Faster wins score higher
//! (`10 - depth`), slower losses score higher (`depth - 10`), so the
//! engine finishes games quickly and never gives one away.

use super::super::rules::check_fixed;
use super::super::{FixedBoard, GameOutcome, Mark, Position};
use tracing::{debug, instrument};

/// Score of a win reached right after the root move.
const WIN_SCORE: i32 = 10;

/// Unbeatable 3x3 opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxEngine;

impl MinimaxEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }

    /// Picks the best move for `ai` against `human`.
    ///
    /// Ties go to the first maximal move in row-major order, so the same
    /// board always yields the same move. Returns `None` only when the
    /// board has no empty cell.
    #[instrument(skip(self, board))]
    pub fn best_move(&self, board: &FixedBoard, ai: Mark, human: Mark) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;

        for pos in board.available_moves() {
            let mut next = *board;
            if next.apply_move(pos, ai).is_err() {
                continue;
            }
            let score = self.minimax(&next, 0, false, ai, human);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        if let Some((pos, score)) = best {
            debug!(%pos, score, "Minimax selected move");
        }
        best.map(|(pos, _)| pos)
    }

    fn minimax(&self, board: &FixedBoard, depth: i32, maximizing: bool, ai: Mark, human: Mark) -> i32 {
        match check_fixed(board) {
            GameOutcome::Win { mark, .. } if mark == ai => return WIN_SCORE - depth,
            GameOutcome::Win { .. } => return depth - WIN_SCORE,
            GameOutcome::Draw => return 0,
            GameOutcome::InProgress => {}
        }

        let (mover, mut best) = if maximizing {
            (ai, i32::MIN)
        } else {
            (human, i32::MAX)
        };

        for pos in board.available_moves() {
            let mut next = *board;
            if next.apply_move(pos, mover).is_err() {
                continue;
            }
            let score = self.minimax(&next, depth + 1, !maximizing, ai, human);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Mark = Mark::First;
    const O: Mark = Mark::Second;
    const E: Mark = Mark::Empty;

    #[test]
    fn test_takes_immediate_win() {
        // O to move can win on the right column or block X's top row.
        let board = FixedBoard::from_marks([X, X, O, E, X, O, E, E, E]);
        let engine = MinimaxEngine::new();
        assert_eq!(engine.best_move(&board, O, X), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_blocks_threat() {
        let board = FixedBoard::from_marks([X, X, E, E, O, E, E, E, E]);
        let engine = MinimaxEngine::new();
        assert_eq!(engine.best_move(&board, O, X), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = FixedBoard::from_marks([X, O, X, O, X, O, O, X, O]);
        assert_eq!(MinimaxEngine::new().best_move(&board, O, X), None);
    }

    #[test]
    fn test_deterministic() {
        let board = FixedBoard::from_marks([X, E, E, E, E, E, E, E, E]);
        let engine = MinimaxEngine::new();
        let first = engine.best_move(&board, O, X);
        assert_eq!(first, engine.best_move(&board, O, X));
        // Only the centre holds the draw against a corner opening.
        assert_eq!(first, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_does_not_mutate_board() {
        let board = FixedBoard::from_marks([X, E, E, E, O, E, E, E, X]);
        let before = board;
        let _ = MinimaxEngine::new().best_move(&board, O, X);
        assert_eq!(board, before);
    }
}
