//! Persistence collaborator contract and an in-memory implementation.
//!
//! The engine never assigns ids or checks reference uniqueness; a
//! [`GameRepository`] does both, and must hand games back with their guess
//! history in submission order.

pub mod memory;

pub use memory::InMemoryGames;

use thiserror::Error;

use crate::game::{Game, GameId, RestoreError};

/// Storage for games.
pub trait GameRepository {
    /// Insert or update `game`, assigning an id on first save.
    ///
    /// The assigned id is written back into `game` and returned.
    fn save(&mut self, game: &mut Game) -> Result<GameId, RepositoryError>;

    /// Load one game.
    fn get(&self, id: GameId) -> Result<Game, RepositoryError>;

    /// Load every game, ordered by id.
    fn all(&self) -> Result<Vec<Game>, RepositoryError>;
}

/// Repository failure.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(GameId),

    #[error("reference {0} is already taken")]
    DuplicateReference(String),

    #[error("stale write to {id}: stored history has {stored} guesses not matched by the {incoming} being saved")]
    StaleWrite {
        id: GameId,
        stored: usize,
        incoming: usize,
    },

    #[error("{0} belongs to a different game")]
    IdentityConflict(GameId),

    #[error("record encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("stored {id} is corrupt: {source}")]
    Corrupt { id: GameId, source: RestoreError },
}
