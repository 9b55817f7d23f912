//! Depth-limited alpha-beta search for the infinite board.
//!
//! Full enumeration stops being feasible once the board grows, so each
//! ply only considers empty cells next to existing marks, capped to a
//! short prefix. Candidates are ordered by the longest run they extend
//! for either side, so wins and forced blocks survive the cap. Positions
//! at the depth limit are scored by a static evaluator that returns 0:
//! playing strength comes from the depth tier, not from evaluation.

use super::super::action::SearchError;
use super::super::rules::{check_sparse, run_through};
use super::super::{Mark, Position, SparseBoard};
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;
use tracing::{debug, instrument, warn};

/// Candidates examined at the root.
pub const ROOT_CANDIDATES: usize = 20;

/// Candidates examined at every ply below the root.
pub const PLY_CANDIDATES: usize = 10;

/// Score of a win on the root move.
///
/// Plies after the root move count from 0, and a win on ply `n` scores
/// `WIN_SCORE - n` for the AI or `n - WIN_SCORE` for the human.
pub const WIN_SCORE: i32 = 1000;

/// Alpha-beta engine driving the adaptive AI.
#[derive(Debug, Clone, Copy)]
pub struct BoundedMinimaxEngine {
    root_candidates: usize,
    ply_candidates: usize,
}

impl Default for BoundedMinimaxEngine {
    fn default() -> Self {
        Self::new(ROOT_CANDIDATES, PLY_CANDIDATES)
    }
}

impl BoundedMinimaxEngine {
    /// Creates an engine with custom branching caps.
    pub fn new(root_candidates: usize, ply_candidates: usize) -> Self {
        Self {
            root_candidates: root_candidates.max(1),
            ply_candidates: ply_candidates.max(1),
        }
    }

    /// Picks a move for `ai`, looking `max_depth` plies past each root move.
    ///
    /// An immediate win is always taken. If no candidate scores above
    /// the `i32::MIN` sentinel, one is drawn uniformly from `rng`.
    #[instrument(skip(self, board, rng), fields(occupied = board.occupied_count()))]
    pub fn best_move<R: Rng + ?Sized>(
        &self,
        board: &SparseBoard,
        ai: Mark,
        human: Mark,
        max_depth: u32,
        rng: &mut R,
    ) -> Result<Position, SearchError> {
        let candidates = self.candidates(board, self.root_candidates, ai, human);
        if candidates.is_empty() {
            warn!("No candidate moves on the board");
            return Err(SearchError::Exhausted);
        }

        let mut scratch = board.clone();
        let mut best: Option<(Position, i32)> = None;
        let mut alpha = i32::MIN;

        for &pos in &candidates {
            let bounds = scratch.bounds();
            if scratch.apply_move(pos, ai).is_err() {
                continue;
            }
            let score = if check_sparse(&scratch, pos).winner() == Some(ai) {
                WIN_SCORE
            } else {
                self.search(&mut scratch, 0, alpha, i32::MAX, false, ai, human, max_depth)
            };
            scratch.take_back(pos, bounds);

            if score > best.map_or(i32::MIN, |(_, s)| s) {
                best = Some((pos, score));
                alpha = alpha.max(score);
            }
            if score == WIN_SCORE {
                break;
            }
        }

        match best {
            Some((pos, score)) => {
                debug!(%pos, score, max_depth, "Bounded search selected move");
                Ok(pos)
            }
            // Only when the board rejected every candidate. Candidates are
            // empty cells next to a placed mark, so at least one is in range.
            None => {
                let pos = *candidates.choose(rng).ok_or(SearchError::Exhausted)?;
                debug!(%pos, "All candidates tied at the sentinel; picked at random");
                Ok(pos)
            }
        }
    }

    /// Static evaluation at the depth limit.
    fn evaluate(&self, _board: &SparseBoard) -> i32 {
        0
    }

    /// Relevant moves (or every visible move on an empty frontier),
    /// capped to `limit`.
    ///
    /// Ordered by the longest run the cell would extend for either side,
    /// then by occupied neighbours. The sort is stable, so ties keep
    /// row-major order.
    fn candidates(&self, board: &SparseBoard, limit: usize, ai: Mark, human: Mark) -> Vec<Position> {
        let mut moves = board.relevant_moves();
        if moves.is_empty() {
            moves = board.available_moves();
        }
        moves.sort_by_cached_key(|&pos| {
            let threat = run_through(board, pos, ai).max(run_through(board, pos, human));
            Reverse((threat, board.occupied_neighbours(pos)))
        });
        moves.truncate(limit);
        moves
    }

    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        board: &mut SparseBoard,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai: Mark,
        human: Mark,
        max_depth: u32,
    ) -> i32 {
        if ply >= max_depth {
            return self.evaluate(board);
        }

        let depth = ply as i32;
        let mover = if maximizing { ai } else { human };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in self.candidates(board, self.ply_candidates, ai, human) {
            let bounds = board.bounds();
            if board.apply_move(pos, mover).is_err() {
                continue;
            }

            if let Some(winner) = check_sparse(board, pos).winner() {
                board.take_back(pos, bounds);
                return if winner == ai {
                    WIN_SCORE - depth
                } else {
                    -WIN_SCORE + depth
                };
            }

            let score = self.search(board, ply + 1, alpha, beta, !maximizing, ai, human, max_depth);
            board.take_back(pos, bounds);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn place(board: &mut SparseBoard, cells: &[(i32, i32)], mark: Mark) {
        for &(row, col) in cells {
            board.apply_move(Position::new(row, col), mark).unwrap();
        }
    }

    #[test]
    fn test_opening_move_on_empty_board() {
        let board = SparseBoard::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pos = BoundedMinimaxEngine::default()
            .best_move(&board, Mark::Second, Mark::First, 2, &mut rng)
            .unwrap();
        assert!(board.bounds().contains(pos));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = SparseBoard::new();
        place(&mut board, &[(2, 0), (2, 1), (2, 2), (2, 3)], Mark::Second);
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (4, 4)], Mark::First);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pos = BoundedMinimaxEngine::default()
            .best_move(&board, Mark::Second, Mark::First, 2, &mut rng)
            .unwrap();
        assert!(pos == Position::new(2, -1) || pos == Position::new(2, 4));
    }

    #[test]
    fn test_blocks_four() {
        let mut board = SparseBoard::new();
        place(&mut board, &[(1, 0), (1, 1), (1, 2), (1, 3)], Mark::First);
        place(&mut board, &[(1, -1), (3, 2), (4, 4)], Mark::Second);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let pos = BoundedMinimaxEngine::default()
            .best_move(&board, Mark::Second, Mark::First, 2, &mut rng)
            .unwrap();
        assert_eq!(pos, Position::new(1, 4));
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut board = SparseBoard::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Mark::First);
        place(&mut board, &[(3, 0), (3, 1), (3, 2), (3, 3), (0, -1)], Mark::Second);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let pos = BoundedMinimaxEngine::default()
            .best_move(&board, Mark::Second, Mark::First, 4, &mut rng)
            .unwrap();
        assert!(pos == Position::new(3, -1) || pos == Position::new(3, 4));
    }

    #[test]
    fn test_sees_own_follow_up_win() {
        // Second has just made an open four on row 2.
        let mut board = SparseBoard::new();
        place(&mut board, &[(2, 0), (2, 1), (2, 2), (2, 3)], Mark::Second);
        place(&mut board, &[(0, 0), (0, 2), (4, 4)], Mark::First);
        let engine = BoundedMinimaxEngine::default();
        let score = engine.search(&mut board, 0, i32::MIN, i32::MAX, false, Mark::Second, Mark::First, 2);
        assert_eq!(score, WIN_SCORE - 1);
    }

    #[test]
    fn test_first_reply_loss_scores_lowest() {
        // First holds an open four and moves next.
        let mut board = SparseBoard::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Mark::First);
        place(&mut board, &[(3, 0), (3, 2), (4, 4)], Mark::Second);
        let engine = BoundedMinimaxEngine::default();
        let score = engine.search(&mut board, 0, i32::MIN, i32::MAX, false, Mark::Second, Mark::First, 2);
        assert_eq!(score, -WIN_SCORE);
    }

    #[test]
    fn test_easy_tier_plays_into_open_four() {
        let mut board = SparseBoard::new();
        place(&mut board, &[(2, 1), (2, 2), (2, 3)], Mark::Second);
        place(&mut board, &[(0, 0), (0, 2), (4, 4), (-2, 6)], Mark::First);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let pos = BoundedMinimaxEngine::default()
            .best_move(&board, Mark::Second, Mark::First, 2, &mut rng)
            .unwrap();
        assert!(pos == Position::new(2, 0) || pos == Position::new(2, 4), "{pos}");
    }

    #[test]
    fn test_depth_cutoff_scores_zero() {
        let mut board = SparseBoard::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Mark::First);
        let engine = BoundedMinimaxEngine::default();
        let score = engine.search(&mut board, 0, i32::MIN, i32::MAX, false, Mark::Second, Mark::First, 0);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_does_not_mutate_board() {
        let mut board = SparseBoard::new();
        place(&mut board, &[(2, 2)], Mark::First);
        let before = board.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let _ = BoundedMinimaxEngine::default().best_move(&board, Mark::Second, Mark::First, 4, &mut rng);
        assert_eq!(board, before);
    }

    #[test]
    fn test_same_seed_same_move() {
        let mut board = SparseBoard::new();
        place(&mut board, &[(2, 2), (3, 3)], Mark::First);
        place(&mut board, &[(2, 3)], Mark::Second);
        let engine = BoundedMinimaxEngine::default();
        let a = engine.best_move(&board, Mark::Second, Mark::First, 4, &mut ChaCha8Rng::seed_from_u64(5));
        let b = engine.best_move(&board, Mark::Second, Mark::First, 4, &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_candidates_prefer_contested_cells() {
        let mut board = SparseBoard::new();
        place(&mut board, &[(2, 1), (2, 3)], Mark::First);
        let engine = BoundedMinimaxEngine::new(1, 1);
        assert_eq!(
            engine.candidates(&board, 1, Mark::Second, Mark::First),
            vec![Position::new(2, 2)]
        );
    }
}
