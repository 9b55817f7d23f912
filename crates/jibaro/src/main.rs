//! Jibaro - terminal front-end
//!
//! Plays classic and infinite tic-tac-toe on stdin/stdout and runs
//! AI-vs-AI self-play.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;
mod selfplay;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::JibaroConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file so RUST_LOG can live there
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = JibaroConfig::load(&cli.config)?;
    info!(path = %cli.config.display(), "Starting jibaro");

    match cli.command {
        Command::Play { mode, seed } => {
            let stdin = std::io::stdin();
            let scores = play::run(mode, seed, &config, stdin.lock(), std::io::stdout())?;
            info!(scores = ?scores.scores(), "Session ended");
            Ok(())
        }
        Command::Selfplay {
            games,
            tier,
            seed,
            json,
        } => {
            let tier = tier.unwrap_or(*config.starting_tier());
            let summary = selfplay::run(games, tier, seed.or(*config.seed()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} games at {}: First {} | Second {} | unfinished {} | {:.1} plies per game",
                    summary.games(),
                    summary.tier(),
                    summary.first_wins(),
                    summary.second_wins(),
                    summary.unfinished(),
                    summary.average_plies()
                );
            }
            Ok(())
        }
    }
}
