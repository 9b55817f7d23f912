//! Balanced marks: sides alternate, and First always opens.

use super::super::{FixedBoard, Mark, SparseBoard};
use super::Invariant;

/// Invariant: First holds as many marks as Second, or exactly one more.
pub struct BalancedMarks;

fn balanced(first: usize, second: usize) -> bool {
    first == second || first == second + 1
}

impl Invariant<FixedBoard> for BalancedMarks {
    fn holds(board: &FixedBoard) -> bool {
        balanced(board.count(Mark::First), board.count(Mark::Second))
    }

    fn description() -> &'static str {
        "First and Second alternate with First opening"
    }
}

impl Invariant<SparseBoard> for BalancedMarks {
    fn holds(board: &SparseBoard) -> bool {
        let (first, second) = board.occupied().fold((0, 0), |(f, s), (_, mark)| match mark {
            Mark::First => (f + 1, s),
            Mark::Second => (f, s + 1),
            Mark::Empty => (f, s),
        });
        balanced(first, second)
    }

    fn description() -> &'static str {
        <Self as Invariant<FixedBoard>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_fixed_alternating_holds() {
        let mut board = FixedBoard::new();
        board.apply_move(Position::new(1, 1), Mark::First).unwrap();
        assert!(<BalancedMarks as Invariant<FixedBoard>>::holds(&board));
        board.apply_move(Position::new(0, 0), Mark::Second).unwrap();
        assert!(<BalancedMarks as Invariant<FixedBoard>>::holds(&board));
    }

    #[test]
    fn test_second_ahead_violates() {
        let mut board = SparseBoard::new();
        board.apply_move(Position::new(2, 2), Mark::Second).unwrap();
        assert!(!<BalancedMarks as Invariant<SparseBoard>>::holds(&board));
    }

    #[test]
    fn test_first_two_ahead_violates() {
        let mut board = FixedBoard::new();
        board.apply_move(Position::new(0, 0), Mark::First).unwrap();
        board.apply_move(Position::new(0, 1), Mark::First).unwrap();
        assert!(!<BalancedMarks as Invariant<FixedBoard>>::holds(&board));
    }
}
