//! Computer opponents.
//!
//! Three strategies share one contract, [`Strategy::choose_move`]:
//!
//! - [`RandomStrategy`] (easy): any empty cell, uniformly.
//! - [`HeuristicStrategy`] (medium): win now, else block now, else random.
//! - [`MinimaxStrategy`] (hard): full minimax with a wall-clock cutoff.
//!
//! Strategies key off the `mark` argument, not [`Board::turn`], and leave the
//! board exactly as they found it. The caller applies the returned move.
//! [`computer_player`] maps a difficulty label to a ready [`ComputerPlayer`].

mod budget;
mod factory;
mod heuristic;
mod minimax;
mod random;

pub use budget::TimeBudget;
pub use factory::{ComputerPlayer, Difficulty, Engine, computer_player};
pub use heuristic::HeuristicStrategy;
pub use minimax::{DRAW, LOSS, MinimaxStrategy, SearchStats, WIN};
pub use random::{MAX_THINKING_DELAY, RandomStrategy};

use crate::{Board, Mark, Move};

/// Selects a move for `mark` on `board`.
pub trait Strategy {
    /// Returns the chosen cell, or `None` when the board has no empty cell.
    ///
    /// The board may be mutated while thinking but is restored before return.
    fn choose_move(&mut self, board: &mut Board, mark: Mark, budget: TimeBudget) -> Option<Move>;
}
