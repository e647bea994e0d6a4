//! Peg colors and the active palette subset.
//!
//! ## Palette
//!
//! The palette is fixed and ordered. A puzzle uses only the first
//! `num_colors` entries, in palette order:
//!
//! ```
//! use mastermind_engine::core::{Color, Palette};
//!
//! let palette = Palette::new(3).unwrap();
//! assert_eq!(palette.colors(), &[Color::Red, Color::Blue, Color::Green]);
//! assert!(palette.contains(Color::Green));
//! assert!(!palette.contains(Color::Yellow));
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{ConfigError, DomainError, GuessError};

/// Number of colors in the fixed palette.
pub const PALETTE_SIZE: usize = 8;

/// A peg color.
///
/// Discriminants are palette ordinals and index the fixed-size
/// frequency tables used by scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Blue = 1,
    Green = 2,
    Yellow = 3,
    Orange = 4,
    White = 5,
    Purple = 6,
    Turquoise = 7,
}

impl Color {
    /// All colors in palette order.
    pub const ALL: [Color; PALETTE_SIZE] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::White,
        Color::Purple,
        Color::Turquoise,
    ];

    /// Position of this color in the palette (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used by the transport layer and storage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::White => "white",
            Color::Purple => "purple",
            Color::Turquoise => "turquoise",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| GuessError::UnknownColor(s.to_string()).into())
    }
}

/// The active palette subset: the first `num_colors` palette entries.
///
/// Only constructible with `1 <= num_colors <= PALETTE_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    num_colors: u8,
}

impl Palette {
    /// The full eight-color palette.
    pub const FULL: Palette = Palette {
        num_colors: PALETTE_SIZE as u8,
    };

    /// Create the subset made of the first `num_colors` colors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `num_colors` is outside `1..=PALETTE_SIZE`.
    pub fn new(num_colors: usize) -> Result<Self, DomainError> {
        if !(1..=PALETTE_SIZE).contains(&num_colors) {
            return Err(ConfigError::ColorCount {
                requested: num_colors,
                palette_size: PALETTE_SIZE,
            }
            .into());
        }
        Ok(Self {
            num_colors: num_colors as u8,
        })
    }

    /// Number of active colors.
    #[must_use]
    pub const fn num_colors(self) -> usize {
        self.num_colors as usize
    }

    /// Active colors, in palette order.
    #[must_use]
    pub fn colors(self) -> &'static [Color] {
        &Color::ALL[..self.num_colors()]
    }

    /// Whether `color` belongs to the active subset.
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        color.index() < self.num_colors as usize
    }
}
