//! Game modes and opening-side selection.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Board kind and opponent kind of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two people share the 3x3 board.
    #[default]
    #[display("classic-vs-human")]
    ClassicVsHuman,
    /// 3x3 against the unbeatable minimax AI.
    #[display("classic-vs-ai")]
    ClassicVsAi,
    /// Two people on the expandable board.
    #[display("infinite-vs-human")]
    InfiniteVsHuman,
    /// Expandable board against the adaptive AI.
    #[display("infinite-vs-ai")]
    InfiniteVsAi,
}

impl GameMode {
    /// True for the expandable-board modes.
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::InfiniteVsHuman | Self::InfiniteVsAi)
    }

    /// True when one side is played by the AI.
    pub fn is_vs_ai(self) -> bool {
        matches!(self, Self::ClassicVsAi | Self::InfiniteVsAi)
    }
}

/// Which side opens the game (and therefore plays `First`) against the AI.
///
/// Defaults to [`FirstPlayer::Human`] so the person moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// The human plays `First`.
    #[default]
    Human,
    /// The AI plays `First` and opens every game.
    Ai,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Ai => "AI",
        }
    }

    /// Toggles between `Human` and `Ai`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Ai,
            Self::Ai => Self::Human,
        }
    }
}
