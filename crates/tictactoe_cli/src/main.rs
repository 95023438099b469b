//! Tic-tac-toe - terminal front-end
//!
//! Human-versus-computer play, computer self-play and move suggestions on top
//! of `tictactoe_engine`.

#![warn(missing_docs)]

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match cli.command {
        Command::Play {
            difficulty,
            time_limit_ms,
            computer_mark,
            size,
            name,
            config,
        } => commands::play(
            commands::PlayOptions {
                difficulty,
                time_limit_ms,
                computer_mark,
                size,
                config,
            },
            name,
        ),
        Command::Simulate {
            x,
            o,
            games,
            time_limit_ms,
            size,
            seed,
        } => commands::simulate(&x, &o, games, time_limit_ms, size, seed),
        Command::Suggest {
            difficulty,
            mark,
            time_limit_ms,
            rows,
        } => commands::suggest(&difficulty, mark, time_limit_ms, &rows),
    }
}
