//! Exhaustive check that the 3x3 engine never loses.
//!
//! Every line of human play is explored against the engine's replies,
//! both with the engine opening and with it replying.

use jibaro_tictactoe::rules::check_fixed;
use jibaro_tictactoe::{FixedBoard, GameOutcome, Mark, MinimaxEngine, Position};

/// Walks every human line from `board`, where it is `to_move`'s turn.
/// Returns the number of finished games visited.
fn explore(engine: &MinimaxEngine, board: FixedBoard, to_move: Mark, ai: Mark) -> usize {
    match check_fixed(&board) {
        GameOutcome::Win { mark, .. } => {
            assert_eq!(mark, ai, "engine lost:\n{}", board.display());
            return 1;
        }
        GameOutcome::Draw => return 1,
        GameOutcome::InProgress => {}
    }

    let human = ai.opponent();
    if to_move == ai {
        let pos = engine
            .best_move(&board, ai, human)
            .expect("non-terminal board has a move");
        let mut next = board;
        next.apply_move(pos, ai).unwrap();
        explore(engine, next, human, ai)
    } else {
        board
            .available_moves()
            .into_iter()
            .map(|pos| {
                let mut next = board;
                next.apply_move(pos, human).unwrap();
                explore(engine, next, ai, ai)
            })
            .sum()
    }
}

#[test]
fn test_never_loses_when_replying() {
    let engine = MinimaxEngine::new();
    let games = explore(&engine, FixedBoard::new(), Mark::First, Mark::Second);
    assert!(games > 0);
}

#[test]
fn test_never_loses_when_opening() {
    let engine = MinimaxEngine::new();
    let games = explore(&engine, FixedBoard::new(), Mark::First, Mark::First);
    assert!(games > 0);
}

#[test]
fn test_wins_when_human_blunders() {
    // Engine opens in the corner; the adjacent edge reply loses by force.
    let engine = MinimaxEngine::new();
    let mut board = FixedBoard::new();
    let mut to_move = Mark::First;
    let human_moves = [(0, 1), (1, 0), (2, 1), (1, 2)];
    let mut human = human_moves.iter();

    while !check_fixed(&board).is_terminal() {
        let pos = if to_move == Mark::First {
            engine.best_move(&board, Mark::First, Mark::Second).unwrap()
        } else {
            human
                .by_ref()
                .map(|&(row, col)| Position::new(row, col))
                .find(|&pos| board.get(pos).is_empty())
                .or_else(|| board.available_moves().first().copied())
                .unwrap()
        };
        board.apply_move(pos, to_move).unwrap();
        to_move = to_move.opponent();
    }

    assert_eq!(check_fixed(&board).winner(), Some(Mark::First));
}
