//! Exhaustive check that unlimited minimax never loses on 3x3.
//!
//! The minimax side plays its chosen move; the other side tries every legal
//! reply, so every reachable game against every opponent is covered.

use tictactoe_engine::{Board, GameStatus, Mark, MinimaxStrategy, Strategy, TimeBudget};

#[derive(Default)]
struct Tally {
    wins: u64,
    draws: u64,
}

fn explore(board: &Board, hard: &mut MinimaxStrategy, hard_mark: Mark, tally: &mut Tally) {
    match board.status() {
        GameStatus::Won(winner) => {
            assert_eq!(winner, hard_mark, "minimax lost this game:\n{}", board);
            tally.wins += 1;
            return;
        }
        GameStatus::Draw => {
            tally.draws += 1;
            return;
        }
        GameStatus::InProgress => {}
    }

    if board.turn() == hard_mark {
        let mut scratch = board.clone();
        let mv = hard
            .choose_move(&mut scratch, hard_mark, TimeBudget::unlimited())
            .expect("non-terminal board has a move");
        assert_eq!(&scratch, board, "search left the board modified");

        let mut next = board.clone();
        next.apply(mv).unwrap();
        explore(&next, hard, hard_mark, tally);
    } else {
        for mv in board.empty_cells() {
            let mut next = board.clone();
            next.apply(mv).unwrap();
            explore(&next, hard, hard_mark, tally);
        }
    }
}

#[test]
fn test_minimax_as_x_never_loses() {
    let mut hard = MinimaxStrategy::new();
    let mut tally = Tally::default();
    explore(&Board::new(), &mut hard, Mark::X, &mut tally);
    assert!(tally.wins > 0);
    assert!(tally.draws > 0);
}

#[test]
fn test_minimax_as_o_never_loses() {
    let mut hard = MinimaxStrategy::new();
    let mut tally = Tally::default();
    explore(&Board::new(), &mut hard, Mark::O, &mut tally);
    assert!(tally.wins > 0);
    assert!(tally.draws > 0);
}

#[test]
fn test_minimax_self_play_draws() {
    let mut x = MinimaxStrategy::new();
    let mut o = MinimaxStrategy::new();
    let mut board = Board::new();

    while !board.status().is_over() {
        let mark = board.turn();
        let strategy = if mark == Mark::X { &mut x } else { &mut o };
        let mv = strategy
            .choose_move(&mut board, mark, TimeBudget::unlimited())
            .unwrap();
        board.apply(mv).unwrap();
    }

    assert_eq!(board.status(), GameStatus::Draw);
}
