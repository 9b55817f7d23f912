//! Game outcome reported after every move.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// State of a game after the latest move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No terminal condition yet.
    #[default]
    InProgress,
    /// `mark` completed `line`, listed in board order.
    Win {
        /// The winning mark.
        mark: Mark,
        /// Cells that formed the winning run.
        line: Vec<Position>,
    },
    /// Board is full with no winner.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Returns the winning line for highlighting, if any.
    pub fn winning_line(&self) -> Option<&[Position]> {
        match self {
            GameOutcome::Win { line, .. } => Some(line),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win { mark, line } => {
                let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
                write!(f, "{mark} wins along {}", cells.join(" "))
            }
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
