use thiserror::Error;

/// Errors raised by the token stream.
///
/// `OutOfBounds` is internal bookkeeping: the matcher converts it into a
/// normal non-match, so it never reaches the caller of `recognize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("token index {index} out of bounds for stream of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
