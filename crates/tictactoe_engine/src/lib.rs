//! Tic-tac-toe engine - board rules and computer opponents
//!
//! This library provides an N×N tic-tac-toe board and three computer
//! opponents of increasing strength.
//!
//! # Architecture
//!
//! - **Board**: grid state, turn tracking, legality and terminal detection
//! - **Rules**: pure win/draw evaluation shared by the board and the search
//! - **AI**: random, one-ply heuristic and time-bounded minimax strategies
//! - **Session**: a human-versus-computer game with outcome events
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Mark, Move, TimeBudget, computer_player};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::from_rows(&["XOX", "OX.", "..O"])?;
//! let mut hard = computer_player("hard", Mark::X, TimeBudget::unlimited())?;
//!
//! let mv = hard.choose_move(&mut board).expect("board has empty cells");
//! assert_eq!(mv, Move::new(2, 0));
//! board.apply(mv)?;
//! assert_eq!(board.check_winner(), Some(Mark::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod config;
mod error;
mod record;
pub mod rules;
mod session;
mod types;

// Crate-level exports - Board and domain types
pub use board::{Board, DEFAULT_SIZE};
pub use types::{GameStatus, Mark, Move, Square};

// Crate-level exports - Errors
pub use error::{BoardError, ConfigError, MoveError};

// Crate-level exports - Computer opponents
pub use ai::{
    ComputerPlayer, DRAW, Difficulty, Engine, HeuristicStrategy, LOSS, MAX_THINKING_DELAY,
    MinimaxStrategy, RandomStrategy, SearchStats, Strategy, TimeBudget, WIN, computer_player,
};

// Crate-level exports - Configuration
pub use config::EngineConfig;

// Crate-level exports - Sessions and results
pub use record::{GameResult, ParticipantResult, PlayerRecord};
pub use session::{GameSession, SessionError};
