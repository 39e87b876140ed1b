//! The token stream: an ordered, immutable sequence of terminal symbols.
//!
//! The stream itself carries no cursor. Positions are plain `usize` values
//! owned by the recognizer's call frames, which is what makes backtracking a
//! matter of restoring a saved integer rather than undoing side effects.

pub mod stream;
pub mod term;

pub use stream::TokenStream;
pub use term::{tokenize, Term};
