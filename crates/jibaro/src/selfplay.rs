//! AI-vs-AI games on the infinite board.

use anyhow::{Context, Result};
use derive_getters::Getters;
use jibaro_tictactoe::{BoundedMinimaxEngine, DifficultyTier, GameMode, GameSession, ScoreBoard};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Plies after which a game is abandoned as unfinished.
pub const MAX_PLIES: usize = 120;

/// Aggregate results of a self-play run.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct SelfPlaySummary {
    /// Games played.
    games: u32,
    /// Games won by the opening side.
    first_wins: u32,
    /// Games won by the replying side.
    second_wins: u32,
    /// Games that hit [`MAX_PLIES`] or stalled.
    unfinished: u32,
    /// Tier both sides searched at.
    tier: DifficultyTier,
    /// Mean number of plies per game.
    average_plies: f64,
}

/// Plays `games` games of the bounded engine against itself.
#[instrument]
pub fn run(games: u32, tier: DifficultyTier, seed: Option<u64>) -> Result<SelfPlaySummary> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let engine = BoundedMinimaxEngine::default();
    let mut session = GameSession::new(GameMode::InfiniteVsHuman, ScoreBoard::new());
    let mut total_plies = 0;

    for game in 0..games {
        session.restart();
        while !session.outcome().is_terminal() && session.history().len() < MAX_PLIES {
            let board = session
                .board()
                .as_sparse()
                .context("self-play runs on the infinite board")?;
            let mover = session.current_turn();
            match engine.best_move(board, mover, mover.opponent(), tier.search_depth(), &mut rng) {
                Ok(pos) => {
                    session.apply_move(pos)?;
                }
                Err(e) => {
                    warn!(game, error = %e, "Search failed; abandoning game");
                    break;
                }
            }
        }
        total_plies += session.history().len();
        info!(game, plies = session.history().len(), outcome = %session.outcome(), "Self-play game finished");
    }

    let scores = session.recorder().scores();
    Ok(SelfPlaySummary {
        games,
        first_wins: *scores.first_wins(),
        second_wins: *scores.second_wins(),
        unfinished: games - scores.total(),
        tier,
        average_plies: if games == 0 {
            0.0
        } else {
            total_plies as f64 / f64::from(games)
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_is_accounted_for() {
        let summary = run(2, DifficultyTier::Easy, Some(5)).unwrap();
        assert_eq!(
            summary.first_wins() + summary.second_wins() + summary.unfinished(),
            2
        );
        assert!(*summary.average_plies() > 0.0);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = run(1, DifficultyTier::Easy, Some(8)).unwrap();
        let b = run(1, DifficultyTier::Easy, Some(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_games() {
        let summary = run(0, DifficultyTier::Easy, None).unwrap();
        assert_eq!(*summary.games(), 0);
        assert_eq!(*summary.average_plies(), 0.0);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = run(0, DifficultyTier::Hard, Some(1)).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["tier"], "hard");
        assert_eq!(json["games"], 0);
    }
}
