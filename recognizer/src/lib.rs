//! A recursive-descent recognizer with explicit backtracking for the fixed
//! grammar:
//!
//! ```text
//! E -> i + E
//! E -> i
//! ```
//!
//! The two productions share the prefix `i` and are distinguished by
//! exhaustive trial in fixed priority order, not by lookahead: production 1 is
//! tried first, and on any failure in its chain the position is restored to
//! the saved checkpoint before production 2 is tried. Rejection is a normal
//! outcome, never an error.

pub mod grammar;
pub mod matcher;
pub mod tree;

pub use grammar::{recognize, recognize_iterative, recognize_with_sink, Verdict};
pub use matcher::{try_match, MatchOutcome};
pub use tree::{ParseTree, Production};
