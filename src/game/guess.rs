//! Scored guesses.

use crate::core::Code;
use crate::scoring::Score;

/// A submitted code with its score against the secret.
///
/// Created once by the game at submission time and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Guess {
    code: Code,
    score: Score,
}

impl Guess {
    pub(crate) fn new(code: Code, score: Score) -> Self {
        Self { code, score }
    }

    #[must_use]
    pub fn code(&self) -> &Code {
        &self.code
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Black pegs.
    #[must_use]
    pub fn exact_matches(&self) -> usize {
        self.score.exact_matches
    }

    /// White pegs.
    #[must_use]
    pub fn color_matches(&self) -> usize {
        self.score.color_matches
    }
}
