//! Peg counting.
//!
//! ## Algorithm
//!
//! 1. `exact` = positions where guess and secret agree
//! 2. Count each color's frequency in both codes
//! 3. `overlap` = sum over colors of `min(guess_count, secret_count)`
//! 4. `color_matches = overlap - exact`
//!
//! Subtracting `exact` keeps a peg from counting as both an exact and a
//! color-only match. Frequencies live in a fixed array indexed by palette
//! ordinal; ordinals outside the active subset stay zero for valid codes,
//! so summing the whole array equals summing the active colors.

use serde::{Deserialize, Serialize};

use crate::core::{Code, PALETTE_SIZE};

/// Result of scoring one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Right color, right position (black pegs).
    pub exact_matches: usize,
    /// Right color, wrong position (white pegs).
    pub color_matches: usize,
}

impl Score {
    #[must_use]
    pub const fn new(exact_matches: usize, color_matches: usize) -> Self {
        Self {
            exact_matches,
            color_matches,
        }
    }

    /// Whether this score solves a puzzle with `num_slots` pegs.
    #[must_use]
    pub const fn is_win(self, num_slots: usize) -> bool {
        self.exact_matches == num_slots
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} exact, {} color", self.exact_matches, self.color_matches)
    }
}

fn frequencies(code: &Code) -> [usize; PALETTE_SIZE] {
    let mut counts = [0; PALETTE_SIZE];
    for color in code.iter() {
        counts[color.index()] += 1;
    }
    counts
}

/// Score `guess` against `secret`.
///
/// Both codes must have the same length; the game checks this before
/// calling. Scoring is symmetric in its arguments.
///
/// ```
/// use mastermind_engine::core::{Code, Color::*};
/// use mastermind_engine::scoring::{score, Score};
///
/// let secret = Code::from([Green, Blue, Blue, Red]);
/// let guess = Code::from([Green, Blue, Red, Blue]);
/// assert_eq!(score(&secret, &guess), Score::new(2, 2));
/// ```
#[must_use]
pub fn score(secret: &Code, guess: &Code) -> Score {
    debug_assert_eq!(secret.len(), guess.len(), "codes must have equal length");

    let exact_matches = secret
        .iter()
        .zip(guess.iter())
        .filter(|(s, g)| s == g)
        .count();

    let secret_counts = frequencies(secret);
    let guess_counts = frequencies(guess);
    let overlap: usize = secret_counts
        .iter()
        .zip(guess_counts.iter())
        .map(|(s, g)| (*s).min(*g))
        .sum();

    Score {
        exact_matches,
        color_matches: overlap - exact_matches,
    }
}
