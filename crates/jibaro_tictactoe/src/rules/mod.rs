//! Game rules for both board kinds.
//!
//! Pure functions that evaluate a board according to the rules. They are
//! kept apart from board storage so the session and both search engines
//! share one definition of "terminal".

pub mod infinite;
pub mod win;

pub use infinite::{check_sparse, run_through, WIN_LENGTH};
pub use win::{check_fixed, LINES};
