//! Human-versus-computer session controller.

use crate::ai::ComputerPlayer;
use crate::config::EngineConfig;
use crate::error::{ConfigError, MoveError};
use crate::record::{GameResult, ParticipantResult};
use crate::{Board, GameStatus, Mark, Move};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// Why a session refused a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The game already has a winner or a full board.
    #[display("Game is already over")]
    GameOver,

    /// A turn was requested out of order.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Mark),

    /// The board rejected the move.
    #[display("Illegal move: {}", _0)]
    Move(MoveError),
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

/// One game between a named human and a computer player.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    computer: ComputerPlayer,
    human_name: String,
    computer_name: String,
}

impl GameSession {
    /// Creates a session on `board`. The human plays the computer's opponent.
    #[instrument(
        skip(board, computer, human_name, computer_name),
        fields(computer_mark = %computer.mark())
    )]
    pub fn new(
        board: Board,
        computer: ComputerPlayer,
        human_name: impl Into<String>,
        computer_name: impl Into<String>,
    ) -> Self {
        let session = Self {
            board,
            computer,
            human_name: human_name.into(),
            computer_name: computer_name.into(),
        };
        info!(
            human = %session.human_name,
            computer = %session.computer_name,
            difficulty = %session.computer.difficulty(),
            "Game session created"
        );
        session
    }

    /// Creates a session from configuration.
    pub fn from_config(
        config: &EngineConfig,
        human_name: impl Into<String>,
        computer_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.board()?,
            config.computer_player(),
            human_name,
            computer_name,
        ))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the computer player.
    pub fn computer(&self) -> &ComputerPlayer {
        &self.computer
    }

    /// Returns the human's mark.
    pub fn human_mark(&self) -> Mark {
        self.computer.mark().opponent()
    }

    /// Returns the human participant's name.
    pub fn human_name(&self) -> &str {
        &self.human_name
    }

    /// Returns the computer participant's name.
    pub fn computer_name(&self) -> &str {
        &self.computer_name
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Checks if the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        !self.status().is_over() && self.board.turn() == self.computer.mark()
    }

    /// Places the human's mark at (row, col).
    #[instrument(skip(self))]
    pub fn human_move(&mut self, row: usize, col: usize) -> Result<GameStatus, SessionError> {
        self.ensure_turn(self.human_mark())?;
        self.board.place_mark(row, col)?;
        let status = self.status();
        debug!(?status, "Human moved");
        Ok(status)
    }

    /// Asks the computer for a move and applies it.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Move, SessionError> {
        self.ensure_turn(self.computer.mark())?;
        let mv = self
            .computer
            .choose_move(&mut self.board)
            .ok_or(SessionError::GameOver)?;
        self.board.apply(mv)?;
        info!(%mv, mark = %self.computer.mark(), "Computer moved");
        Ok(mv)
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), SessionError> {
        if self.status().is_over() {
            warn!("Move requested after game over");
            return Err(SessionError::GameOver);
        }
        if self.board.turn() != mark {
            return Err(SessionError::WrongTurn(mark));
        }
        Ok(())
    }

    /// Clears the board for a new game with the same participants.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Result events for both participants, once the game is over.
    pub fn outcome_events(&self) -> Option<[ParticipantResult; 2]> {
        let (human, computer) = match self.status() {
            GameStatus::InProgress => return None,
            GameStatus::Draw => (GameResult::Draw, GameResult::Draw),
            GameStatus::Won(mark) if mark == self.human_mark() => (GameResult::Win, GameResult::Loss),
            GameStatus::Won(_) => (GameResult::Loss, GameResult::Win),
        };
        Some([
            ParticipantResult {
                name: self.human_name.clone(),
                mark: self.human_mark(),
                result: human,
            },
            ParticipantResult {
                name: self.computer_name.clone(),
                mark: self.computer.mark(),
                result: computer,
            },
        ])
    }
}
