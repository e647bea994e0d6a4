//! Codes: ordered peg sequences.
//!
//! A `Code` is used both for the hidden secret and for each guess.
//! Duplicates are allowed and matter for scoring.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{Color, Palette};
use super::error::{DomainError, GuessError};

/// Inline capacity; longer codes spill to the heap.
const INLINE_PEGS: usize = 8;

/// An ordered sequence of colors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(SmallVec<[Color; INLINE_PEGS]>);

impl Code {
    /// Create a code from colors.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self(colors.into_iter().collect())
    }

    /// Parse a code from color names.
    ///
    /// ```
    /// use mastermind_engine::core::{Code, Color};
    ///
    /// let code = Code::parse(["red", "green", "green", "blue"]).unwrap();
    /// assert_eq!(code.pegs(), &[Color::Red, Color::Green, Color::Green, Color::Blue]);
    /// assert!(Code::parse(["red", "black"]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidGuess` on the first unknown name.
    pub fn parse<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Result<Self, DomainError> {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<Color>())
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }

    /// Number of pegs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The pegs, in order.
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.0
    }

    /// Iterate over pegs.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    /// Color names, in order. This is the persisted and transported form.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(Color::name).collect()
    }

    /// Check that this code has `num_slots` pegs drawn from `palette`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: length first, then the lowest
    /// position holding an inactive color.
    pub fn check(&self, num_slots: usize, palette: Palette) -> Result<(), GuessError> {
        if self.len() != num_slots {
            return Err(GuessError::Length {
                expected: num_slots,
                actual: self.len(),
            });
        }
        if let Some((position, &color)) = self.0.iter().enumerate().find(|(_, c)| !palette.contains(**c)) {
            return Err(GuessError::ColorOutsidePalette {
                color,
                position,
                num_colors: palette.num_colors(),
            });
        }
        Ok(())
    }
}

impl FromIterator<Color> for Code {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(SmallVec::from_vec(colors))
    }
}

impl<const N: usize> From<[Color; N]> for Code {
    fn from(colors: [Color; N]) -> Self {
        Self::new(colors)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.names().join(", "))
    }
}
