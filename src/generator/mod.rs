//! Random generation of secrets and reference tokens.
//!
//! Both generators draw from an injected [`GameRng`](crate::core::GameRng),
//! so a fixed seed reproduces a game exactly.

pub mod code;
pub mod reference;

pub use code::generate;
pub use reference::{InvalidReference, Reference, REFERENCE_LEN};
