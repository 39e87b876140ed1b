use recognizer_core::StreamError;

/// An ordered, immutable sequence of tokens, fixed at construction.
///
/// Lookups past the end return [`StreamError::OutOfBounds`] (or `None` via
/// [`TokenStream::get`]); they never panic. End-of-input detection is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<Tok>
where
    Tok: Clone + std::fmt::Debug,
{
    tokens: Vec<Tok>,
}

impl<Tok> TokenStream<Tok>
where
    Tok: Clone + std::fmt::Debug,
{
    /// Creates a new stream from a vector of tokens.
    pub fn new(tokens: Vec<Tok>) -> Self {
        Self { tokens }
    }

    /// Returns the token at `pos`, or `OutOfBounds` if `pos >= len`.
    pub fn peek_at(&self, pos: usize) -> Result<&Tok, StreamError> {
        self.tokens.get(pos).ok_or(StreamError::OutOfBounds {
            index: pos,
            len: self.tokens.len(),
        })
    }

    /// Infallible lookup: returns the token at `pos` if in bounds.
    pub fn get(&self, pos: usize) -> Option<&Tok> {
        self.tokens.get(pos)
    }

    /// Total token count, fixed at construction.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the underlying tokens as a slice.
    pub fn as_slice(&self) -> &[Tok] {
        &self.tokens
    }
}

impl<Tok> FromIterator<Tok> for TokenStream<Tok>
where
    Tok: Clone + std::fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = Tok>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<Tok> From<Vec<Tok>> for TokenStream<Tok>
where
    Tok: Clone + std::fmt::Debug,
{
    fn from(tokens: Vec<Tok>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_at_in_bounds() {
        let stream = TokenStream::new(vec!['a', 'b']);
        assert_eq!(stream.peek_at(0), Ok(&'a'));
        assert_eq!(stream.peek_at(1), Ok(&'b'));
    }

    #[test]
    fn test_peek_at_out_of_bounds() {
        let stream = TokenStream::new(vec!['a']);
        assert_eq!(
            stream.peek_at(1),
            Err(StreamError::OutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_empty_stream() {
        let stream: TokenStream<char> = TokenStream::new(Vec::new());
        assert!(stream.is_empty());
        assert_eq!(stream.len(), 0);
        assert_eq!(stream.get(0), None);
    }
}
