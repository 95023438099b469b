//! Difficulty labels and the computer player they select.

use super::{HeuristicStrategy, MinimaxStrategy, RandomStrategy, SearchStats, Strategy, TimeBudget};
use crate::error::ConfigError;
use crate::{Board, EngineConfig, Mark, Move};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random moves.
    Easy,
    /// Wins or blocks one move ahead, otherwise random.
    Medium,
    /// Minimax search.
    #[default]
    Hard,
}

impl Difficulty {
    /// Every difficulty, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Parses `easy`, `medium` or `hard`. Anything else is an error.
    #[track_caller]
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => {
                warn!(label = other, "Unknown difficulty label");
                Err(ConfigError::new(format!(
                    "Unknown AI level: {:?} (expected easy, medium or hard)",
                    other
                )))
            }
        }
    }
}

/// The strategy behind a [`ComputerPlayer`].
#[derive(Debug, Clone)]
pub enum Engine {
    /// Easy.
    Random(RandomStrategy),
    /// Medium.
    Heuristic(HeuristicStrategy),
    /// Hard.
    Minimax(MinimaxStrategy),
}

impl Engine {
    /// Builds the strategy for `difficulty`; `seed` fixes any randomness.
    pub fn for_difficulty(difficulty: Difficulty, seed: Option<u64>) -> Self {
        match difficulty {
            Difficulty::Easy => {
                Engine::Random(seed.map_or_else(RandomStrategy::new, RandomStrategy::seeded))
            }
            Difficulty::Medium => Engine::Heuristic(
                seed.map_or_else(HeuristicStrategy::new, HeuristicStrategy::seeded),
            ),
            Difficulty::Hard => Engine::Minimax(MinimaxStrategy::new()),
        }
    }
}

impl Strategy for Engine {
    fn choose_move(&mut self, board: &mut Board, mark: Mark, budget: TimeBudget) -> Option<Move> {
        match self {
            Engine::Random(s) => s.choose_move(board, mark, budget),
            Engine::Heuristic(s) => s.choose_move(board, mark, budget),
            Engine::Minimax(s) => s.choose_move(board, mark, budget),
        }
    }
}

/// A computer participant: a strategy bound to a mark and a time budget.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
    mark: Mark,
    budget: TimeBudget,
    engine: Engine,
}

impl ComputerPlayer {
    /// Creates a computer player.
    #[instrument]
    pub fn new(difficulty: Difficulty, mark: Mark, budget: TimeBudget) -> Self {
        info!(%difficulty, %mark, %budget, "Creating computer player");
        Self {
            difficulty,
            mark,
            budget,
            engine: Engine::for_difficulty(difficulty, None),
        }
    }

    /// Creates the computer player described by `config`, seeded when it names a seed.
    pub fn from_config(config: &EngineConfig) -> Self {
        let player = Self::new(
            *config.difficulty(),
            *config.computer_mark(),
            config.time_budget(),
        );
        match config.seed() {
            Some(seed) => player.with_seed(*seed),
            None => player,
        }
    }

    /// Replaces the strategy's randomness with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.engine = Engine::for_difficulty(self.difficulty, Some(seed));
        self
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the per-move time budget.
    pub fn budget(&self) -> TimeBudget {
        self.budget
    }

    /// Returns the underlying strategy.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Counters from the last minimax search, for hard players only.
    pub fn search_stats(&self) -> Option<SearchStats> {
        match &self.engine {
            Engine::Minimax(s) => Some(s.last_stats()),
            _ => None,
        }
    }

    /// Proposes a move for this player's mark. The board is left unchanged.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        self.engine.choose_move(board, self.mark, self.budget)
    }
}

/// Builds a computer player from a difficulty label.
///
/// # Errors
///
/// Returns [`ConfigError`] for any label other than `easy`, `medium` or `hard`.
#[track_caller]
pub fn computer_player(
    label: &str,
    mark: Mark,
    budget: TimeBudget,
) -> Result<ComputerPlayer, ConfigError> {
    let difficulty = label.parse::<Difficulty>()?;
    Ok(ComputerPlayer::new(difficulty, mark, budget))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_map_to_engines() {
        let easy = computer_player("easy", Mark::X, TimeBudget::unlimited()).unwrap();
        assert!(matches!(easy.engine(), Engine::Random(_)));

        let medium = computer_player("medium", Mark::O, TimeBudget::unlimited()).unwrap();
        assert!(matches!(medium.engine(), Engine::Heuristic(_)));

        let hard = computer_player("hard", Mark::X, TimeBudget::unlimited()).unwrap();
        assert!(matches!(hard.engine(), Engine::Minimax(_)));
    }

    #[test]
    fn test_unknown_label_is_config_error() {
        let err = computer_player("impossible", Mark::X, TimeBudget::unlimited()).unwrap_err();
        assert!(err.message.contains("impossible"));

        assert!("Hard".parse::<Difficulty>().is_err());
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_from_config_uses_configured_values() {
        let mut config = EngineConfig::default();
        config.set_difficulty(Difficulty::Medium);
        config.set_computer_mark(Mark::X);
        config.set_time_limit_ms(250);

        let player = ComputerPlayer::from_config(&config);
        assert_eq!(player.difficulty(), Difficulty::Medium);
        assert_eq!(player.mark(), Mark::X);
        assert_eq!(player.budget(), TimeBudget::from_millis(250));
        assert!(matches!(player.engine(), Engine::Heuristic(_)));
    }

    #[test]
    fn test_display_matches_labels() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>().unwrap(), difficulty);
        }
    }
}
