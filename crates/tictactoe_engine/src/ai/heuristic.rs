//! Medium opponent: win now, else block now, else play randomly.

use super::random::RandomStrategy;
use super::{Strategy, TimeBudget};
use crate::{Board, Mark, Move};
use tracing::{debug, instrument};

/// One-ply lookahead for immediate wins and immediate threats.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStrategy {
    fallback: RandomStrategy,
}

impl HeuristicStrategy {
    /// Creates a heuristic strategy with an entropy-seeded fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a heuristic strategy whose random fallback is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            fallback: RandomStrategy::seeded(seed),
        }
    }
}

/// First empty cell (row-major) where `mark` would complete a line.
pub(crate) fn winning_cell(board: &mut Board, mark: Mark) -> Option<Move> {
    let candidates: Vec<Move> = board.empty_cells().collect();
    candidates
        .into_iter()
        .find(|&mv| board.probe(mv, mark, |b| b.check_winner() == Some(mark)))
}

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, board), fields(mark = %mark, budget = %budget))]
    fn choose_move(&mut self, board: &mut Board, mark: Mark, budget: TimeBudget) -> Option<Move> {
        if let Some(mv) = winning_cell(board, mark) {
            debug!(%mv, "Taking immediate win");
            return Some(mv);
        }

        if let Some(mv) = winning_cell(board, mark.opponent()) {
            debug!(%mv, "Blocking opponent threat");
            return Some(mv);
        }

        self.fallback.choose_move(board, mark, budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_threat() {
        let mut board = Board::from_rows(&["OO.", "X..", "..."]).unwrap();
        let mut strategy = HeuristicStrategy::seeded(3);
        let mv = strategy.choose_move(&mut board, Mark::X, TimeBudget::unlimited());
        assert_eq!(mv, Some(Move::new(0, 2)));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // O threatens the middle row, X can finish the top row.
        let mut board = Board::from_rows(&["XX.", "OO.", "..."]).unwrap();
        let mut strategy = HeuristicStrategy::seeded(3);
        let mv = strategy.choose_move(&mut board, Mark::X, TimeBudget::unlimited());
        assert_eq!(mv, Some(Move::new(0, 2)));
    }

    #[test]
    fn test_first_winning_cell_in_scan_order() {
        let mut board = Board::from_rows(&["X.X", "...", "X.."]).unwrap();
        assert_eq!(winning_cell(&mut board, Mark::X), Some(Move::new(0, 1)));
    }

    #[test]
    fn test_board_untouched_after_search() {
        let mut board = Board::from_rows(&["X..", ".O.", "..."]).unwrap();
        let before = board.clone();
        let mut strategy = HeuristicStrategy::seeded(11);
        let mv = strategy.choose_move(&mut board, Mark::X, TimeBudget::unlimited());
        assert!(mv.is_some());
        assert_eq!(board, before);
    }
}
