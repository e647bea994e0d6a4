//! Puzzle configuration.
//!
//! A `GameConfig` fixes the puzzle dimensions at creation time:
//! - `num_slots`: pegs per code
//! - `num_colors`: size of the active palette subset
//! - `max_guesses`: attempts before the game is lost
//!
//! Configs deserialize with defaults for missing fields, so a caller can
//! supply only what it wants to change. Deserialization does not validate;
//! call [`GameConfig::validate`] (game creation always does).

use serde::{Deserialize, Serialize};

use super::color::Palette;
use super::error::{ConfigError, DomainError};

/// Default pegs per code.
pub const DEFAULT_NUM_SLOTS: usize = 4;
/// Default active colors.
pub const DEFAULT_NUM_COLORS: usize = 6;
/// Default attempts.
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Puzzle dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pegs per code.
    pub num_slots: usize,

    /// How many palette colors are in play.
    pub num_colors: usize,

    /// Maximum number of guesses.
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_slots: DEFAULT_NUM_SLOTS,
            num_colors: DEFAULT_NUM_COLORS,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if any dimension is out of range.
    pub fn new(num_slots: usize, num_colors: usize, max_guesses: usize) -> Result<Self, DomainError> {
        let config = Self {
            num_slots,
            num_colors,
            max_guesses,
        };
        config.validate()?;
        Ok(config)
    }

    /// Start a builder from the defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    /// Check every dimension.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the first bad dimension.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.num_slots < 1 {
            return Err(ConfigError::SlotCount(self.num_slots).into());
        }
        Palette::new(self.num_colors)?;
        if self.max_guesses < 1 {
            return Err(ConfigError::MaxGuesses(self.max_guesses).into());
        }
        Ok(())
    }

    /// The active palette subset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `num_colors` is out of range.
    pub fn palette(&self) -> Result<Palette, DomainError> {
        Palette::new(self.num_colors)
    }
}

/// Builder for [`GameConfig`].
///
/// ```
/// use mastermind_engine::core::GameConfig;
///
/// let config = GameConfig::builder()
///     .num_slots(5)
///     .num_colors(8)
///     .max_guesses(12)
///     .build()
///     .unwrap();
/// assert_eq!(config.num_slots, 5);
///
/// assert!(GameConfig::builder().num_colors(9).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_slots(mut self, num_slots: usize) -> Self {
        self.config.num_slots = num_slots;
        self
    }

    pub fn num_colors(mut self, num_colors: usize) -> Self {
        self.config.num_colors = num_colors;
        self
    }

    pub fn max_guesses(mut self, max_guesses: usize) -> Self {
        self.config.max_guesses = max_guesses;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if any dimension is out of range.
    pub fn build(self) -> Result<GameConfig, DomainError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
