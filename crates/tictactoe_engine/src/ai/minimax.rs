//! Hard opponent: exhaustive minimax with a wall-clock cutoff.
//!
//! Scores are from the searching mark's point of view: `+1` win, `-1` loss,
//! `0` draw. When the budget runs out, every node entered afterwards scores
//! `0` as if it were a draw. The clock is polled on entry to every node, so a
//! tight budget changes which moves come out; the root always returns some
//! legal move when one exists.

use super::{Strategy, TimeBudget};
use crate::{Board, Mark, Move};
use std::time::Instant;
use tracing::{debug, instrument};

/// Score of a position won by the searching mark.
pub const WIN: i32 = 1;
/// Score of a drawn position, or of any node reached after the budget expired.
pub const DRAW: i32 = 0;
/// Score of a position won by the opponent.
pub const LOSS: i32 = -1;

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered below the root.
    pub nodes: u64,
    /// Nodes cut off because the budget had expired.
    pub cutoffs: u64,
    /// Score of the chosen move, `None` if no move was available.
    pub best_score: Option<i32>,
}

/// Full-depth minimax over the remaining move tree.
#[derive(Debug, Clone, Default)]
pub struct MinimaxStrategy {
    stats: SearchStats,
}

impl MinimaxStrategy {
    /// Creates a minimax strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns counters from the most recent [`Strategy::choose_move`].
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board), fields(mark = %mark, budget = %budget))]
    fn choose_move(&mut self, board: &mut Board, mark: Mark, budget: TimeBudget) -> Option<Move> {
        let mut search = Search {
            mark,
            budget,
            start: Instant::now(),
            nodes: 0,
            cutoffs: 0,
        };

        let mut best: Option<(Move, i32)> = None;
        let candidates: Vec<Move> = board.empty_cells().collect();
        for mv in candidates {
            let score = board.probe(mv, mark, |b| search.evaluate(b, false));
            // Strict comparison keeps the first of equally scored moves.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        self.stats = SearchStats {
            nodes: search.nodes,
            cutoffs: search.cutoffs,
            best_score: best.map(|(_, score)| score),
        };
        debug!(
            nodes = search.nodes,
            cutoffs = search.cutoffs,
            score = ?self.stats.best_score,
            elapsed_ms = search.start.elapsed().as_millis() as u64,
            "Minimax search finished"
        );

        best.map(|(mv, _)| mv)
    }
}

/// State for one root search.
struct Search {
    mark: Mark,
    budget: TimeBudget,
    start: Instant,
    nodes: u64,
    cutoffs: u64,
}

impl Search {
    fn evaluate(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        if self.budget.is_exceeded(self.start) {
            self.cutoffs += 1;
            return DRAW;
        }

        match board.check_winner() {
            Some(winner) if winner == self.mark => return WIN,
            Some(_) => return LOSS,
            None if board.is_full() => return DRAW,
            None => {}
        }

        let (mut best, to_play) = if maximizing {
            (i32::MIN, self.mark)
        } else {
            (i32::MAX, self.mark.opponent())
        };

        let size = board.size();
        for index in 0..size * size {
            if !board.squares()[index].is_empty() {
                continue;
            }
            let mv = Move::new(index / size, index % size);
            let score = board.probe(mv, to_play, |b| self.evaluate(b, !maximizing));
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::from_rows(&["XOX", "OX.", "..O"]).unwrap();
        let mut strategy = MinimaxStrategy::new();
        let mv = strategy.choose_move(&mut board, Mark::X, TimeBudget::unlimited());
        assert_eq!(mv, Some(Move::new(2, 0)));
        assert_eq!(strategy.last_stats().best_score, Some(WIN));
    }

    #[test]
    fn test_blocks_open_column() {
        // O must take the only cell that stops X's column.
        let mut board = Board::from_rows(&["X..", "XO.", "..."]).unwrap();
        let mut strategy = MinimaxStrategy::new();
        let mv = strategy.choose_move(&mut board, Mark::O, TimeBudget::unlimited());
        assert_eq!(mv, Some(Move::new(2, 0)));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        let mut strategy = MinimaxStrategy::new();
        let mv = strategy.choose_move(&mut board, Mark::X, TimeBudget::unlimited());
        // Every opening draws under perfect play, so the first cell wins the tie.
        assert_eq!(mv, Some(Move::new(0, 0)));
        assert_eq!(strategy.last_stats().best_score, Some(DRAW));
        assert_eq!(strategy.last_stats().cutoffs, 0);
    }

    #[test]
    fn test_full_board_gives_none() {
        let mut board = Board::from_rows(&["XOX", "OXO", "OXO"]).unwrap();
        let mut strategy = MinimaxStrategy::new();
        assert_eq!(
            strategy.choose_move(&mut board, Mark::X, TimeBudget::unlimited()),
            None
        );
        assert_eq!(strategy.last_stats().best_score, None);
    }

    #[test]
    fn test_board_untouched_after_search() {
        let mut board = Board::from_rows(&["X..", ".O.", "..X"]).unwrap();
        let before = board.clone();
        MinimaxStrategy::new().choose_move(&mut board, Mark::O, TimeBudget::unlimited());
        assert_eq!(board, before);
    }
}
