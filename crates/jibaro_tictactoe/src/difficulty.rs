//! Adaptive difficulty for the infinite board.
//!
//! The controller watches finished games and moves the search-depth tier:
//! two human wins in a row make the AI stronger, three AI wins in a row
//! make it weaker. Draws reset both streaks.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::{debug, info, instrument};

/// Consecutive human wins that promote the tier.
pub const HUMAN_STREAK_TO_ADVANCE: u32 = 2;

/// Consecutive AI wins that demote the tier.
pub const AI_STREAK_TO_RETREAT: u32 = 3;

/// Search-depth tier of the adaptive AI, weakest first.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DifficultyTier {
    /// Depth 2.
    Easy,
    /// Depth 4.
    #[default]
    Medium,
    /// Depth 6.
    Hard,
    /// Depth 8.
    Expert,
}

impl DifficultyTier {
    /// Plies the bounded search looks ahead at this tier.
    pub fn search_depth(self) -> u32 {
        match self {
            Self::Easy => 2,
            Self::Medium => 4,
            Self::Hard => 6,
            Self::Expert => 8,
        }
    }

    /// The next stronger tier, if any.
    pub fn harder(self) -> Option<Self> {
        match self {
            Self::Easy => Some(Self::Medium),
            Self::Medium => Some(Self::Hard),
            Self::Hard => Some(Self::Expert),
            Self::Expert => None,
        }
    }

    /// The next weaker tier, if any.
    pub fn easier(self) -> Option<Self> {
        match self {
            Self::Easy => None,
            Self::Medium => Some(Self::Easy),
            Self::Hard => Some(Self::Medium),
            Self::Expert => Some(Self::Hard),
        }
    }
}

/// Result of a finished game from the controller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The human side won.
    HumanWin,
    /// The AI side won.
    AiWin,
    /// Nobody won.
    Draw,
}

/// Streak-driven tier state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct DifficultyController {
    /// Current tier.
    tier: DifficultyTier,
    /// Consecutive human wins since the last reset.
    human_streak: u32,
    /// Consecutive AI wins since the last reset.
    ai_streak: u32,
}

impl DifficultyController {
    /// Creates a controller at [`DifficultyTier::Medium`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller starting at `tier`.
    pub fn with_tier(tier: DifficultyTier) -> Self {
        Self {
            tier,
            ..Self::default()
        }
    }

    /// Search depth of the current tier.
    pub fn search_depth(&self) -> u32 {
        self.tier.search_depth()
    }

    /// Feeds a finished game into the controller and returns the tier
    /// that applies to the next game.
    #[instrument(skip(self), fields(tier = %self.tier))]
    pub fn observe(&mut self, verdict: Verdict) -> DifficultyTier {
        match verdict {
            Verdict::HumanWin => {
                self.human_streak += 1;
                self.ai_streak = 0;
                if self.human_streak >= HUMAN_STREAK_TO_ADVANCE
                    && let Some(next) = self.tier.harder()
                {
                    info!(from = %self.tier, to = %next, "AI difficulty raised");
                    self.tier = next;
                    self.human_streak = 0;
                }
            }
            Verdict::AiWin => {
                self.ai_streak += 1;
                self.human_streak = 0;
                if self.ai_streak >= AI_STREAK_TO_RETREAT
                    && let Some(next) = self.tier.easier()
                {
                    info!(from = %self.tier, to = %next, "AI difficulty lowered");
                    self.tier = next;
                    self.ai_streak = 0;
                }
            }
            Verdict::Draw => {
                self.human_streak = 0;
                self.ai_streak = 0;
            }
        }
        debug!(
            human_streak = self.human_streak,
            ai_streak = self.ai_streak,
            "Difficulty streaks updated"
        );
        self.tier
    }
}
