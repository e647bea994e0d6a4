//! Domain error types.
//!
//! Every failure the engine reports is one of three kinds:
//!
//! - `InvalidConfiguration`: bad puzzle dimensions, rejected before a game exists
//! - `InvalidGuess`: malformed code, game untouched
//! - `GameFinished`: guess against a won or lost game, game untouched
//!
//! None of them are retryable. Use [`DomainError::kind`] to map an error to
//! an external response without matching on the detail payloads.

use thiserror::Error;

use super::color::Color;
use crate::game::GameStatus;

/// Fieldless discriminant of [`DomainError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConfiguration,
    InvalidGuess,
    GameFinished,
}

/// Error raised by game creation and guess submission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessError),

    #[error("game is already finished ({status})")]
    GameFinished { status: GameStatus },
}

impl DomainError {
    /// Which of the three error kinds this is.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            DomainError::InvalidGuess(_) => ErrorKind::InvalidGuess,
            DomainError::GameFinished { .. } => ErrorKind::GameFinished,
        }
    }
}

/// Why a game configuration was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("num_slots must be at least 1, got {0}")]
    SlotCount(usize),

    #[error("num_colors must be between 1 and {palette_size}, got {requested}")]
    ColorCount { requested: usize, palette_size: usize },

    #[error("max_guesses must be at least 1, got {0}")]
    MaxGuesses(usize),

    #[error("secret code does not fit the configuration: {0}")]
    SecretCode(GuessError),
}

/// Why a submitted code was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("expected {expected} pegs, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("{color} at position {position} is not among the first {num_colors} colors")]
    ColorOutsidePalette {
        color: Color,
        position: usize,
        num_colors: usize,
    },

    #[error("unknown color name {0:?}")]
    UnknownColor(String),
}
