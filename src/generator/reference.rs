//! Human-facing reference tokens.
//!
//! A reference is a short uppercase token shown to players, distinct from
//! the storage id. Generated tokens are the first [`REFERENCE_LEN`] hex
//! digits of a 128-bit random value. Uniqueness is probabilistic here and
//! enforced by the repository.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameRng;

/// Length of generated references.
pub const REFERENCE_LEN: usize = 10;

/// A reference string was empty, too long, or not uppercase alphanumeric.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid reference {0:?}: expected 1 to 10 uppercase letters or digits")]
pub struct InvalidReference(pub String);

/// Short uppercase game reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference(String);

impl Reference {
    /// Generate a fresh reference.
    ///
    /// ```
    /// use mastermind_engine::core::GameRng;
    /// use mastermind_engine::generator::Reference;
    ///
    /// let reference = Reference::generate(&mut GameRng::new(1));
    /// assert_eq!(reference.as_str().len(), 10);
    /// ```
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut token = format!("{:032X}", rng.gen_u128());
        token.truncate(REFERENCE_LEN);
        Self(token)
    }

    /// Accept an existing reference, e.g. one loaded from storage.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidReference`] unless `s` is 1 to `REFERENCE_LEN`
    /// characters of `A-Z` and `0-9`.
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidReference> {
        let s = s.into();
        let well_formed = (1..=REFERENCE_LEN).contains(&s.len())
            && s.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if well_formed {
            Ok(Self(s))
        } else {
            Err(InvalidReference(s))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Reference {
    type Error = InvalidReference;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.0
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
