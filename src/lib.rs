//! # mastermind-engine
//!
//! Domain engine for the Mastermind code-breaking puzzle: a hidden sequence
//! of colored pegs is guessed within a limited number of attempts, each
//! attempt scored by exact-position and color-only matches.
//!
//! ## Design Principles
//!
//! 1. **Plain data in, plain data out**: No transport, no storage engine.
//!    Persistence and presentation are collaborators at the edges.
//!
//! 2. **Injected randomness**: Secrets and references come from an explicit
//!    seedable `GameRng`, so games are reproducible in tests.
//!
//! 3. **Derived status**: A game's status is a pure function of its
//!    configuration and guess history; it is never assigned.
//!
//! ## Modules
//!
//! - `core`: Colors, palette, codes, configuration, RNG, errors
//! - `generator`: Secret codes and reference tokens
//! - `scoring`: Exact and color-only match counting
//! - `game`: The game aggregate and its state machine
//! - `repository`: Persistence contract and in-memory store
//! - `view`: Client-facing snapshots with secret redaction
//!
//! ## Example
//!
//! ```
//! use mastermind_engine::{Game, GameConfig, GameRng, GameStatus};
//!
//! let config = GameConfig::new(4, 6, 10).unwrap();
//! let mut game = Game::new(config, &mut GameRng::new(42)).unwrap();
//!
//! let secret = game.secret_code().clone();
//! let guess = game.submit(secret).unwrap();
//! assert_eq!(guess.exact_matches(), 4);
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

pub mod core;
pub mod generator;
pub mod scoring;
pub mod game;
pub mod repository;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Code, Color, Palette, PALETTE_SIZE,
    GameConfig, GameConfigBuilder,
    GameRng, GameRngState,
    DomainError, ErrorKind, ConfigError, GuessError,
};

pub use crate::generator::{generate, Reference};

pub use crate::scoring::{score, Score};

pub use crate::game::{Game, GameId, GameRecord, GameStatus, Guess, GuessRecord, RestoreError};

pub use crate::repository::{GameRepository, InMemoryGames, RepositoryError};

pub use crate::view::{GameView, GuessView};
