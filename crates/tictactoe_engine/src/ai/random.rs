//! Easy opponent: uniform choice among empty cells.

use super::{Strategy, TimeBudget};
use crate::{Board, Mark, Move};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Longest artificial "thinking" pause.
pub const MAX_THINKING_DELAY: Duration = Duration::from_millis(200);

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a reproducible strategy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Chooses uniformly among the empty cells of `board`.
    pub(crate) fn pick(&mut self, board: &Board) -> Option<Move> {
        let moves: Vec<Move> = board.empty_cells().collect();
        moves.choose(&mut self.rng).copied()
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board), fields(mark = %mark, budget = %budget))]
    fn choose_move(&mut self, board: &mut Board, mark: Mark, budget: TimeBudget) -> Option<Move> {
        let start = Instant::now();
        let choice = self.pick(board)?;
        pause_for_effect(budget, start);
        debug!(%choice, "Random move");
        Some(choice)
    }
}

/// Sleeps for what is left of the budget, capped at [`MAX_THINKING_DELAY`].
fn pause_for_effect(budget: TimeBudget, start: Instant) {
    if let Some(remaining) = budget.remaining(start)
        && !remaining.is_zero()
    {
        std::thread::sleep(remaining.min(MAX_THINKING_DELAY));
    }
}
