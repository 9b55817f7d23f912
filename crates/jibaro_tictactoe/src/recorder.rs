//! Outcome recording: the seam to whatever keeps score.
//!
//! The session reports every finished game through [`OutcomeRecorder`].
//! [`ScoreBoard`] keeps running totals in memory; `()` discards them.

use super::Mark;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Receives the result of each finished game.
pub trait OutcomeRecorder {
    /// Called once per finished game. `winner` is `Mark::Empty` for a draw.
    fn record_outcome(&mut self, winner: Mark);
}

impl OutcomeRecorder for () {
    fn record_outcome(&mut self, _winner: Mark) {}
}

impl<T: OutcomeRecorder + ?Sized> OutcomeRecorder for &mut T {
    fn record_outcome(&mut self, winner: Mark) {
        (**self).record_outcome(winner);
    }
}

/// Cumulative results per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Scores {
    /// Games won by `First`.
    first_wins: u32,
    /// Games won by `Second`.
    second_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scores {
    /// Counts one finished game. `Mark::Empty` counts as a draw.
    pub fn record(&mut self, winner: Mark) {
        match winner {
            Mark::First => self.first_wins += 1,
            Mark::Second => self.second_wins += 1,
            Mark::Empty => self.draws += 1,
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Games counted so far.
    pub fn total(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

/// In-memory [`OutcomeRecorder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ScoreBoard {
    /// Running totals.
    scores: Scores,
}

impl ScoreBoard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes the totals.
    pub fn reset(&mut self) {
        self.scores.reset();
    }
}

impl OutcomeRecorder for ScoreBoard {
    fn record_outcome(&mut self, winner: Mark) {
        self.scores.record(winner);
        debug!(%winner, scores = ?self.scores, "Outcome recorded");
    }
}

/// Display name and emoji for one side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct PlayerProfile {
    /// Name shown to players.
    name: String,
    /// Emoji shown beside the name.
    emoji: String,
}

impl PlayerProfile {
    /// Default profile for the side playing `First`.
    pub fn default_first() -> Self {
        Self::new("Luna".to_string(), "🌙".to_string())
    }

    /// Default profile for the side playing `Second`.
    pub fn default_second() -> Self {
        Self::new("Papá".to_string(), "⭐".to_string())
    }

    /// `"emoji name"`, as shown in turn banners.
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}
