//! Game aggregate and its state machine.
//!
//! - `Game`: configuration, secret, append-only guess history
//! - `Guess`: an immutable scored submission
//! - `GameStatus`: `Running`, then `Won` or `Lost`, derived from history
//! - `GameRecord`: the persisted field set, with invariant-checking restore

#[allow(clippy::module_inception)]
pub mod game;
pub mod guess;
pub mod record;
pub mod status;

pub use game::Game;
pub use guess::Guess;
pub use record::{GameId, GameRecord, GuessRecord, RestoreError};
pub use status::GameStatus;
