//! Interactive text game over any line-based input.

use super::config::JibaroConfig;
use anyhow::Result;
use jibaro_tictactoe::{GameMode, GameOutcome, GameSession, Mark, Position, ScoreBoard};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "Enter a move as `row col`, or `undo`, `new`, `swap`, `quit`.";

/// Runs a game loop reading commands from `input` and writing the board to
/// `out` until `quit` or end of input. Returns the final scores.
#[instrument(skip(config, input, out))]
pub fn run<I: BufRead, O: Write>(
    mode: GameMode,
    seed: Option<u64>,
    config: &JibaroConfig,
    input: I,
    mut out: O,
) -> Result<ScoreBoard> {
    let mut session = GameSession::with_options(
        mode,
        *config.first_player(),
        *config.starting_tier(),
        seed.or(*config.seed()),
        ScoreBoard::new(),
    );

    writeln!(out, "{HELP}")?;
    render(&session, config, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        debug!(command, "Input received");

        match command {
            "" => continue,
            "quit" | "q" => break,
            "new" => session.restart(),
            "swap" => {
                session.swap_first_player();
                writeln!(out, "{} opens from now on", session.first_player().label())?;
            }
            "undo" => {
                if let Err(e) = session.undo() {
                    writeln!(out, "{e}")?;
                }
            }
            _ => match Position::parse(command) {
                Some(pos) => match session.apply_move(pos) {
                    Ok(outcome) if outcome.is_terminal() => {
                        render(&session, config, &mut out)?;
                        report(&session, config, &mut out)?;
                        continue;
                    }
                    Ok(_) => {}
                    Err(e) => writeln!(out, "{e}")?,
                },
                None => writeln!(out, "{HELP}")?,
            },
        }

        if session.request_ai_move().is_some() {
            debug!("AI move retried");
        }
        render(&session, config, &mut out)?;
    }

    Ok(session.recorder().clone())
}

fn render<O: Write>(session: &GameSession<ScoreBoard>, config: &JibaroConfig, out: &mut O) -> Result<()> {
    write!(out, "\n{}", session.board().display())?;
    if let Some(board) = session.board().as_sparse() {
        let bounds = board.bounds();
        writeln!(out, "Board {}x{}", bounds.height(), bounds.width())?;
    }
    if !session.outcome().is_terminal() {
        let turn = session.current_turn();
        writeln!(out, "{} ({turn}) to move", config.profile(turn).label())?;
    }
    Ok(())
}

fn report<O: Write>(session: &GameSession<ScoreBoard>, config: &JibaroConfig, out: &mut O) -> Result<()> {
    match session.outcome() {
        GameOutcome::Win { mark, line } => {
            let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
            writeln!(out, "{} wins! {}", config.profile(*mark).label(), cells.join(" "))?;
        }
        GameOutcome::Draw => writeln!(out, "Draw!")?,
        GameOutcome::InProgress => return Ok(()),
    }

    let scores = session.recorder().scores();
    writeln!(
        out,
        "Score: {} {} | {} {} | draws {}",
        config.profile(Mark::First).label(),
        scores.first_wins(),
        config.profile(Mark::Second).label(),
        scores.second_wins(),
        scores.draws()
    )?;
    if session.mode() == GameMode::InfiniteVsAi {
        writeln!(out, "AI difficulty: {}", session.difficulty().tier())?;
    }
    writeln!(out, "Type `new` to play again or `quit` to stop.")?;
    Ok(())
}
