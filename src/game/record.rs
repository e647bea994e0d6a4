//! Persisted field set of a game.
//!
//! `GameRecord` is what a persistence collaborator stores. It is plain data
//! with no invariants of its own; [`Game::from_record`](super::Game::from_record)
//! re-checks everything on the way back in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::GameStatus;
use crate::core::{Color, DomainError, GuessError};
use crate::generator::InvalidReference;
use crate::scoring::Score;

/// Opaque storage identity, assigned by the repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Stored form of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Option<GameId>,
    pub reference: String,
    pub num_slots: usize,
    pub num_colors: usize,
    pub max_guesses: usize,
    pub secret_code: Vec<Color>,
    pub status: GameStatus,
    /// In submission order.
    pub guesses: Vec<GuessRecord>,
}

/// Stored form of a guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub code: Vec<Color>,
    pub exact_matches: usize,
    pub color_matches: usize,
}

impl GuessRecord {
    #[must_use]
    pub fn score(&self) -> Score {
        Score::new(self.exact_matches, self.color_matches)
    }
}

/// A record that does not describe a reachable game state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error(transparent)]
    Reference(#[from] InvalidReference),

    #[error("stored configuration is invalid: {0}")]
    Configuration(#[source] DomainError),

    #[error("guess {index} is malformed: {source}")]
    Guess { index: usize, source: GuessError },

    #[error("guess {index} stored as {stored} but scores {computed}")]
    ScoreMismatch {
        index: usize,
        stored: Score,
        computed: Score,
    },

    #[error("guess {index} follows a finished game ({status})")]
    GuessAfterEnd { index: usize, status: GameStatus },

    #[error("stored status {stored} contradicts history ({derived})")]
    StatusMismatch {
        stored: GameStatus,
        derived: GameStatus,
    },
}
