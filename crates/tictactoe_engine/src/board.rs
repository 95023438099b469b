//! N×N tic-tac-toe board with turn tracking.

use crate::error::{BoardError, MoveError};
use crate::rules;
use crate::types::{GameStatus, Mark, Move, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Dimension of the standard board.
pub const DEFAULT_SIZE: usize = 3;

/// Square tic-tac-toe grid plus the mark to move next.
///
/// [`Board::place_mark`] is the only public way to add a mark, and it always
/// advances the turn. Search code simulates hypothetical moves through a crate-private
/// probe that restores the cell before returning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
    turn: Mark,
}

impl Board {
    /// Creates an empty 3×3 board with X to move.
    pub fn new() -> Self {
        Self::empty(DEFAULT_SIZE)
    }

    /// Creates an empty `size`×`size` board with X to move.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::new("Board size must be at least 1"));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
            turn: Mark::X,
        }
    }

    /// Builds a board from text rows.
    ///
    /// `X` and `O` (any case) are marks; `.`, `_`, `-` and space are empty.
    /// The turn is X when both marks appear equally often, O otherwise.
    #[instrument(skip(rows))]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut board = Self::with_size(size)?;

        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.as_ref().chars().collect();
            if cells.len() != size {
                return Err(BoardError::new(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    size
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let square = match ch {
                    'X' | 'x' => Square::Occupied(Mark::X),
                    'O' | 'o' => Square::Occupied(Mark::O),
                    '.' | '_' | '-' | ' ' => Square::Empty,
                    other => {
                        return Err(BoardError::new(format!(
                            "Unexpected character {:?} at ({}, {})",
                            other, row, col
                        )));
                    }
                };
                board.squares[row * size + col] = square;
            }
        }

        let count = |mark| {
            board
                .squares
                .iter()
                .filter(|s| **s == Square::Occupied(mark))
                .count()
        };
        board.turn = if count(Mark::X) == count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };

        debug!(size, turn = %board.turn, "Board parsed from rows");
        Ok(board)
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Gets the square at (row, col), `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.index(row, col).map(|i| self.squares[i])
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Clears every cell and gives the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares.fill(Square::Empty);
        self.turn = Mark::X;
        debug!(size = self.size, "Board reset");
    }

    /// True iff (row, col) is on the board and empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Places the current turn's mark at (row, col) and passes the turn.
    ///
    /// On error the board is unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let index = self.index(row, col).ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        if !self.squares[index].is_empty() {
            debug!(row, col, "Rejected move on occupied cell");
            return Err(MoveError::Occupied { row, col });
        }

        self.squares[index] = Square::Occupied(self.turn);
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Applies a [`Move`] through [`Board::place_mark`].
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        self.place_mark(mv.row, mv.col)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the mark filling a complete row, column or diagonal.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// True iff the board is full and nobody has won.
    pub fn check_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Summarizes the board as in progress, won or drawn.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.check_winner() {
            GameStatus::Won(winner)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Iterates the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let size = self.size;
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(move |(i, _)| Move::new(i / size, i % size))
    }

    // Simulation only. Nothing below touches `turn`.

    /// Writes `mark` into the empty cell `mv`, runs `f`, then clears the cell.
    ///
    /// Callers must only probe cells they have seen empty; probing an occupied
    /// or out-of-range cell is a contract violation and panics in debug builds.
    pub(crate) fn probe<R>(&mut self, mv: Move, mark: Mark, f: impl FnOnce(&mut Board) -> R) -> R {
        let index = mv.row * self.size + mv.col;
        debug_assert!(self.is_valid_move(mv.row, mv.col), "probe on unavailable cell {}", mv);
        self.squares[index] = Square::Occupied(mark);
        let result = f(self);
        self.squares[index] = Square::Empty;
        result
    }
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardData {
    size: usize,
    squares: Vec<Square>,
    turn: Mark,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        if data.size == 0 {
            return Err(BoardError::new("Board size must be at least 1"));
        }
        let expected = data.size.checked_mul(data.size);
        if expected != Some(data.squares.len()) {
            return Err(BoardError::new(format!(
                "Board of size {} needs {} squares, got {}",
                data.size,
                data.size.saturating_mul(data.size),
                data.squares.len()
            )));
        }
        Ok(Self {
            size: data.size,
            squares: data.squares,
            turn: data.turn,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for square in cells {
                write!(f, "{}", square)?;
            }
        }
        Ok(())
    }
}
