use crate::stream::TokenStream;

/// A terminal symbol of the grammar.
///
/// The grammar's alphabet is `i` and `+`; any other character is carried as
/// [`Term::Other`] so that foreign input simply fails to match a terminal
/// check instead of being rejected up front with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// The terminal `i`.
    Ident,
    /// The terminal `+`.
    Plus,
    /// A symbol outside the alphabet. Never matches either terminal.
    Other(char),
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Ident => write!(f, "i"),
            Term::Plus => write!(f, "+"),
            Term::Other(c) => write!(f, "{c}"),
        }
    }
}

impl From<char> for Term {
    fn from(c: char) -> Self {
        match c {
            'i' => Term::Ident,
            '+' => Term::Plus,
            other => Term::Other(other),
        }
    }
}

/// Maps each non-whitespace character of `input` to a [`Term`].
///
/// A convenience for demos and tests; the recognizer itself accepts any
/// pre-built token sequence.
pub fn tokenize(input: &str) -> TokenStream<Term> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Term::from)
        .collect()
}
