use token_stream::TokenStream;

/// The result of a terminal match attempt: whether the expected symbol was
/// found, and the position to continue from. On a miss the position is
/// unchanged, so callers can try another alternative from the same spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: bool,
    pub pos: usize,
}

/// Attempts to consume one terminal at `pos`.
///
/// Advances past the token only if it equals `expected`. A mismatch and
/// end-of-input are the same silent non-match; reading past the end is caught
/// here and never surfaces to the caller.
pub fn try_match<Tok>(stream: &TokenStream<Tok>, pos: usize, expected: &Tok) -> MatchOutcome
where
    Tok: Clone + std::fmt::Debug + PartialEq,
{
    match stream.peek_at(pos) {
        Ok(token) if token == expected => MatchOutcome {
            matched: true,
            pos: pos + 1,
        },
        _ => MatchOutcome {
            matched: false,
            pos,
        },
    }
}
