//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Square};

/// Checks if there is a winner on the board.
///
/// Scans every row, then every column, then the main diagonal, then the
/// anti-diagonal. Returns the mark filling the first complete line found,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let n = board.size();

    for row in 0..n {
        if let Some(mark) = uniform_line(board, (0..n).map(|col| (row, col))) {
            return Some(mark);
        }
    }

    for col in 0..n {
        if let Some(mark) = uniform_line(board, (0..n).map(|row| (row, col))) {
            return Some(mark);
        }
    }

    if let Some(mark) = uniform_line(board, (0..n).map(|i| (i, i))) {
        return Some(mark);
    }

    uniform_line(board, (0..n).map(|i| (i, n - 1 - i)))
}

/// Returns the mark shared by every cell of the line, if the line is complete.
fn uniform_line(
    board: &Board,
    mut cells: impl Iterator<Item = (usize, usize)>,
) -> Option<Mark> {
    let (row, col) = cells.next()?;
    let mark = board.get(row, col)?.mark()?;
    cells
        .all(|(r, c)| board.get(r, c) == Some(Square::Occupied(mark)))
        .then_some(mark)
}
