//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Mark;

/// Tic-tac-toe against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with random, heuristic and minimax opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer in the terminal
    Play {
        /// Opponent strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Per-move thinking limit in milliseconds (0 = unlimited)
        #[arg(short, long)]
        time_limit_ms: Option<u64>,

        /// Mark the computer plays (X moves first)
        #[arg(short = 'm', long)]
        computer_mark: Option<Mark>,

        /// Board dimension
        #[arg(short, long)]
        size: Option<usize>,

        /// Your name, used in the results
        #[arg(long, default_value = "Player")]
        name: String,

        /// Path to a TOML engine config (falls back to $TICTACTOE_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Pit two computer players against each other
    Simulate {
        /// Difficulty for X
        #[arg(long, default_value = "hard")]
        x: String,

        /// Difficulty for O
        #[arg(long, default_value = "easy")]
        o: String,

        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Per-move thinking limit in milliseconds (0 = unlimited)
        #[arg(short, long, default_value = "0")]
        time_limit_ms: u64,

        /// Board dimension
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Base seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the move the engine would make on a given board
    Suggest {
        /// Opponent strength: easy, medium or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: String,

        /// Mark to move (defaults to the board's turn)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Per-move thinking limit in milliseconds (0 = unlimited)
        #[arg(short, long, default_value = "0")]
        time_limit_ms: u64,

        /// Board rows, e.g. `XO. .X. ..O`
        #[arg(required = true)]
        rows: Vec<String>,
    },
}
