//! Core domain types shared by both board kinds.

use serde::{Deserialize, Serialize};

/// Contents of a cell, and the symbol a side plays with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    #[display("·")]
    Empty,
    /// The side that opens every game.
    #[display("X")]
    First,
    /// The side that replies.
    #[display("O")]
    Second,
}

impl Mark {
    /// Returns the opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// A cell coordinate.
///
/// The fixed board accepts `row, col` in `0..3`; the infinite board
/// accepts any pair. Ordering is row-major, which is the enumeration
/// order used everywhere moves are listed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row, growing downwards.
    pub row: i32,
    /// Column, growing rightwards.
    pub col: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Packs the pair into a single map key: row in the high 32 bits,
    /// col in the low 32 bits.
    pub const fn packed(self) -> u64 {
        ((self.row as u32 as u64) << 32) | (self.col as u32 as u64)
    }

    /// Inverse of [`Position::packed`].
    pub const fn unpack(key: u64) -> Self {
        Self::new((key >> 32) as u32 as i32, key as u32 as i32)
    }

    /// Row-major index on a 3x3 grid, if the position lies on it.
    pub fn to_index(self) -> Option<usize> {
        if (0..3).contains(&self.row) && (0..3).contains(&self.col) {
            Some((self.row * 3 + self.col) as usize)
        } else {
            None
        }
    }

    /// Position for a row-major 3x3 index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new((index / 3) as i32, (index % 3) as i32))
    }

    /// Parses `"row col"` or `"row,col"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(row, col))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::First.opponent(), Mark::Second);
        assert_eq!(Mark::Second.opponent(), Mark::First);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    }

    #[test]
    fn test_packed_key_handles_negative_coordinates() {
        for pos in [
            Position::new(0, 0),
            Position::new(-3, 7),
            Position::new(12, -40),
            Position::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(Position::unpack(pos.packed()), pos);
        }
        assert_ne!(Position::new(1, 0).packed(), Position::new(0, 1).packed());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, -1),
            Position::new(0, 2),
            Position::new(-1, 5),
            Position::new(0, -3),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(-1, 5),
                Position::new(0, -3),
                Position::new(0, 2),
                Position::new(1, -1),
            ]
        );
    }

    #[test]
    fn test_index_conversion() {
        assert_eq!(Position::new(1, 2).to_index(), Some(5));
        assert_eq!(Position::new(3, 0).to_index(), None);
        assert_eq!(Position::new(0, -1).to_index(), None);
        assert_eq!(Position::from_index(7), Some(Position::new(2, 1)));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Position::parse("1 2"), Some(Position::new(1, 2)));
        assert_eq!(Position::parse(" -4,7 "), Some(Position::new(-4, 7)));
        assert_eq!(Position::parse("1"), None);
        assert_eq!(Position::parse("1 2 3"), None);
        assert_eq!(Position::parse("a b"), None);
    }
}
