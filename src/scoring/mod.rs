//! Scoring engine: exact and color-only match counts.
//!
//! Pure and allocation-free. The game calls [`score`] once per submitted
//! guess and stores the result with the guess.

pub mod engine;

pub use engine::{score, Score};
