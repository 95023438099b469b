//! Per-participant results and running tallies.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// How a finished game went for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameResult {
    /// The participant completed a line.
    Win,
    /// The opponent completed a line.
    Loss,
    /// The board filled with no line.
    Draw,
}

/// Outcome event for one named participant of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantResult {
    /// Participant name.
    pub name: String,
    /// Mark the participant played.
    pub mark: Mark,
    /// Result for that participant.
    pub result: GameResult,
}

/// In-memory win/loss/draw tally for a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    name: String,
    mark: Mark,
    wins: u32,
    losses: u32,
    draws: u32,
}

impl PlayerRecord {
    /// Creates a record with no games.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Returns the participant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Games won.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Games lost.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total games recorded.
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Counts a win.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Counts a loss.
    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Counts a draw.
    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    /// Counts one result.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.record_win(),
            GameResult::Loss => self.record_loss(),
            GameResult::Draw => self.record_draw(),
        }
    }

    /// Zeroes every tally.
    pub fn reset_stats(&mut self) {
        self.wins = 0;
        self.losses = 0;
        self.draws = 0;
    }
}
