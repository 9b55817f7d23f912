//! Move-selection engines.

pub mod bounded;
pub mod minimax;

pub use bounded::{BoundedMinimaxEngine, PLY_CANDIDATES, ROOT_CANDIDATES, WIN_SCORE};
pub use minimax::MinimaxEngine;
