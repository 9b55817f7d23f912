//! Jibaro tic-tac-toe core.
//!
//! Game state and adversarial search for the family tic-tac-toe game,
//! shared by every front-end.
//!
//! # Architecture
//!
//! - **Boards**: [`FixedBoard`] (classic 3x3) and [`SparseBoard`]
//!   (expandable, five in a row)
//! - **Rules**: pure win and draw detection in [`rules`]
//! - **Engines**: exhaustive [`MinimaxEngine`] for 3x3 and depth-limited
//!   [`BoundedMinimaxEngine`] for the infinite board
//! - **Difficulty**: [`DifficultyController`] adapts search depth to the
//!   player's results
//! - **Session**: [`GameSession`] orchestrates turns and is the API
//!   front-ends consume
//!
//! # Example
//!
//! ```
//! use jibaro_tictactoe::{GameMode, GameSession, Position, ScoreBoard};
//!
//! let mut session = GameSession::new(GameMode::ClassicVsAi, ScoreBoard::new());
//! let outcome = session.apply_move(Position::new(0, 0)).unwrap();
//! assert!(!outcome.is_terminal());
//! assert_eq!(session.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod difficulty;
mod engine;
mod mode;
mod outcome;
mod recorder;
mod session;
mod sparse;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Core types
pub use outcome::GameOutcome;
pub use types::{Mark, Position};

// Crate-level exports - Boards
pub use board::{FixedBoard, SIZE};
pub use sparse::{Bounds, EXPANSION_STEP, MAX_COORDINATE, SEED_BOUNDS, SparseBoard};

// Crate-level exports - Errors
pub use action::{MoveError, SearchError, UndoError};

// Crate-level exports - Engines
pub use engine::{BoundedMinimaxEngine, MinimaxEngine, PLY_CANDIDATES, ROOT_CANDIDATES, WIN_SCORE};

// Crate-level exports - Difficulty
pub use difficulty::{
    AI_STREAK_TO_RETREAT, DifficultyController, DifficultyTier, HUMAN_STREAK_TO_ADVANCE, Verdict,
};

// Crate-level exports - Session
pub use mode::{FirstPlayer, GameMode};
pub use recorder::{OutcomeRecorder, PlayerProfile, ScoreBoard, Scores};
pub use session::{Board, GameSession};
