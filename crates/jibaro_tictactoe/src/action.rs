//! Move and search errors.
//!
//! Every error here is recoverable: the call that produced it is rejected
//! and the board, turn and outcome are left exactly as they were.

use super::Position;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell at the position already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// The position lies outside the 3x3 grid, or past the coordinate
    /// range of the infinite board.
    #[display("Cell {_0} is outside the board")]
    OutOfBounds(#[error(not(source))] Position),

    /// Attempted to place [`Mark::Empty`](super::Mark::Empty).
    #[display("Cannot place an empty mark")]
    EmptyMark,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The AI moves next; human input is not accepted.
    #[display("Waiting for the AI to move")]
    AwaitingAi,
}

/// Error raised by the bounded search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// No candidate move exists at all. Unreachable on a board whose
    /// bounds keep growing, so seeing it means an invariant broke.
    #[display("Search found no candidate moves")]
    Exhausted,
}

/// Error returned by [`GameSession::undo`](crate::GameSession::undo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum UndoError {
    /// Undo is only offered on the classic board.
    #[display("Undo is not available on the infinite board")]
    Unsupported,

    /// No move has been played yet.
    #[display("There is no move to undo")]
    NothingToUndo,
}
