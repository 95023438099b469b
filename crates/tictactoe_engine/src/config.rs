//! Engine configuration loaded from TOML.

use crate::ai::{ComputerPlayer, Difficulty, TimeBudget};
use crate::board::DEFAULT_SIZE;
use crate::error::ConfigError;
use crate::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game against the computer.
///
/// ```toml
/// difficulty = "hard"
/// time_limit_ms = 500
/// board_size = 3
/// computer_mark = "O"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Opponent strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Per-move thinking limit in milliseconds; 0 is unlimited.
    #[serde(default)]
    time_limit_ms: u64,

    /// Board dimension.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Mark played by the computer.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Seed for reproducible random play.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn default_computer_mark() -> Mark {
    Mark::O
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            time_limit_ms: 0,
            board_size: default_board_size(),
            computer_mark: default_computer_mark(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values no game can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1"));
        }
        Ok(())
    }

    /// Sets the difficulty.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Sets the per-move time limit in milliseconds.
    pub fn set_time_limit_ms(&mut self, ms: u64) {
        self.time_limit_ms = ms;
    }

    /// Sets the board dimension.
    pub fn set_board_size(&mut self, size: usize) {
        self.board_size = size;
    }

    /// Sets the computer's mark.
    pub fn set_computer_mark(&mut self, mark: Mark) {
        self.computer_mark = mark;
    }

    /// Sets the random seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// The configured time limit as a budget.
    pub fn time_budget(&self) -> TimeBudget {
        TimeBudget::from_millis(self.time_limit_ms)
    }

    /// Creates an empty board of the configured size.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::with_size(self.board_size)?)
    }

    /// Creates the configured computer player.
    pub fn computer_player(&self) -> ComputerPlayer {
        ComputerPlayer::from_config(self)
    }
}
