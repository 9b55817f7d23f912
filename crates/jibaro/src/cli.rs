//! Command-line interface for jibaro.

use clap::{Parser, Subcommand};
use jibaro_tictactoe::{DifficultyTier, GameMode};
use std::path::PathBuf;

/// Jibaro - family tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "jibaro")]
#[command(about = "Classic and infinite tic-tac-toe against family or the AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file. Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = "jibaro.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// classic-vs-human, classic-vs-ai, infinite-vs-human or infinite-vs-ai
        #[arg(short, long, default_value = "classic-vs-ai")]
        mode: GameMode,

        /// RNG seed for the infinite-board AI (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit the infinite-board AI against itself
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Search tier for both sides (overrides the config)
        #[arg(long)]
        tier: Option<DifficultyTier>,

        /// RNG seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
