//! Win and draw detection for the 3x3 board.

use super::super::{FixedBoard, GameOutcome, Mark, Position};

const fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// The eight lines in scan order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    // Columns
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    // Diagonals
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

/// Evaluates the board.
///
/// The first line (in [`LINES`] order) whose three cells share a mark
/// wins. Without a winner, a full board is a draw.
pub fn check_fixed(board: &FixedBoard) -> GameOutcome {
    for line in LINES {
        let [a, b, c] = line;
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            return GameOutcome::Win {
                mark,
                line: line.to_vec(),
            };
        }
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Mark = Mark::First;
    const O: Mark = Mark::Second;
    const E: Mark = Mark::Empty;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_fixed(&FixedBoard::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board = FixedBoard::from_marks([X, X, X, E, O, O, E, E, O]);
        assert_eq!(
            check_fixed(&board),
            GameOutcome::Win {
                mark: X,
                line: vec![p(0, 0), p(0, 1), p(0, 2)],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = FixedBoard::from_marks([X, X, O, E, O, X, O, E, E]);
        assert_eq!(
            check_fixed(&board),
            GameOutcome::Win {
                mark: O,
                line: vec![p(0, 2), p(1, 1), p(2, 0)],
            }
        );
    }

    #[test]
    fn test_column_win() {
        let board = FixedBoard::from_marks([O, X, E, O, X, E, E, X, E]);
        assert_eq!(check_fixed(&board).winner(), Some(X));
        assert_eq!(
            check_fixed(&board).winning_line(),
            Some(&[p(0, 1), p(1, 1), p(2, 1)][..])
        );
    }

    #[test]
    fn test_first_match_wins_in_scan_order() {
        // Not reachable in a legal game; rows are scanned before columns.
        let board = FixedBoard::from_marks([O, O, O, X, X, X, E, E, E]);
        assert_eq!(check_fixed(&board).winner(), Some(O));

        let board = FixedBoard::from_marks([X, O, E, X, O, E, X, O, E]);
        assert_eq!(check_fixed(&board).winner(), Some(X));
    }

    #[test]
    fn test_draw_detection() {
        let board = FixedBoard::from_marks([X, O, X, O, X, O, O, X, O]);
        assert_eq!(check_fixed(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board = FixedBoard::from_marks([X, O, X, O, X, O, O, X, X]);
        assert_eq!(check_fixed(&board).winner(), Some(X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = FixedBoard::from_marks([X, X, E, E, O, E, E, E, E]);
        assert_eq!(check_fixed(&board), GameOutcome::InProgress);
    }
}
