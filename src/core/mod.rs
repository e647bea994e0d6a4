//! Core engine types: colors, codes, configuration, RNG, errors.
//!
//! These are the plain-data building blocks shared by the generator,
//! the scoring engine and the game aggregate.

pub mod code;
pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use code::Code;
pub use color::{Color, Palette, PALETTE_SIZE};
pub use config::{GameConfig, GameConfigBuilder};
pub use error::{ConfigError, DomainError, ErrorKind, GuessError};
pub use rng::{GameRng, GameRngState};
