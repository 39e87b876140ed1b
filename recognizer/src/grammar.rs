use recognizer_core::{Checkpoint, NullSink, TraceEvent, TraceSink};
use token_stream::{Term, TokenStream};

use crate::matcher::try_match;
use crate::tree::{ParseTree, Production};

/// The outcome of recognizing an input: membership in the language, with the
/// parse tree on acceptance. Rejection carries no position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(ParseTree),
    Rejected,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// Returns the parse tree if the input was accepted.
    pub fn tree(&self) -> Option<&ParseTree> {
        match self {
            Verdict::Accepted(tree) => Some(tree),
            Verdict::Rejected => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted(_) => write!(f, "Accepted"),
            Verdict::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Recognizes `tokens` against the grammar `E -> i + E | i`.
///
/// Accepts iff `E` matches starting at position 0 **and** consumes the entire
/// stream: a matching prefix with trailing tokens left over is rejected.
pub fn recognize(tokens: &TokenStream<Term>) -> Verdict {
    recognize_with_sink(tokens, &mut NullSink)
}

/// Like [`recognize`], reporting each trial and backtrack to `sink`.
///
/// The sink is observational only; it cannot influence the verdict.
pub fn recognize_with_sink<S: TraceSink>(tokens: &TokenStream<Term>, sink: &mut S) -> Verdict {
    let mut driver = Recognizer { tokens, sink };
    match driver.parse_e(0) {
        Some((tree, end)) if end == tokens.len() => Verdict::Accepted(tree),
        _ => Verdict::Rejected,
    }
}

/// One recognizer run over a borrowed stream. Positions are passed and
/// returned by value between call frames; the stream itself is never mutated.
struct Recognizer<'a, S: TraceSink> {
    tokens: &'a TokenStream<Term>,
    sink: &'a mut S,
}

impl<S: TraceSink> Recognizer<'_, S> {
    /// Tries the productions for `E` at `pos`, in fixed priority order.
    /// Returns the subtree and the position after it on success.
    fn parse_e(&mut self, pos: usize) -> Option<(ParseTree, usize)> {
        let start = Checkpoint::new(pos);

        self.sink.event(&TraceEvent::TryAlternative {
            label: Production::IPlusE.label(),
            pos,
        });
        match self.try_chain(pos) {
            Ok((tree, end)) => {
                self.sink.event(&TraceEvent::AlternativeMatched {
                    label: Production::IPlusE.label(),
                    pos: end,
                });
                return Some((tree, end));
            }
            Err(reached) => {
                // Discard partial progress and restore the saved position.
                // A chain that failed on its first terminal never advanced,
                // so there is nothing to report as a backtrack.
                if reached > start.index() {
                    self.sink.event(&TraceEvent::Backtrack {
                        from: reached,
                        to: start.index(),
                    });
                }
            }
        }

        self.sink.event(&TraceEvent::TryAlternative {
            label: Production::I.label(),
            pos: start.index(),
        });
        let ident = try_match(self.tokens, start.index(), &Term::Ident);
        if ident.matched {
            self.sink.event(&TraceEvent::AlternativeMatched {
                label: Production::I.label(),
                pos: ident.pos,
            });
            return Some((ParseTree::I { i: Term::Ident }, ident.pos));
        }

        None
    }

    /// `E -> i + E`: matches the chain left to right, recursing on the
    /// rightmost symbol. On failure returns the position the chain had
    /// reached, for the backtrack trace event.
    fn try_chain(&mut self, pos: usize) -> Result<(ParseTree, usize), usize> {
        let ident = try_match(self.tokens, pos, &Term::Ident);
        if !ident.matched {
            return Err(ident.pos);
        }

        let plus = try_match(self.tokens, ident.pos, &Term::Plus);
        if !plus.matched {
            return Err(plus.pos);
        }

        match self.parse_e(plus.pos) {
            Some((rest, end)) => Ok((
                ParseTree::IPlusE {
                    i: Term::Ident,
                    plus: Term::Plus,
                    rest: Box::new(rest),
                },
                end,
            )),
            None => Err(plus.pos),
        }
    }
}

/// Iterative rewrite of [`recognize`] for inputs of unbounded length.
///
/// The grammar is right-recursive, so the recursive driver's depth grows with
/// the number of `i` tokens. This variant keeps an explicit position and a
/// count of pending `+ E` continuations instead of call frames, and agrees
/// with [`recognize`] on every input.
pub fn recognize_iterative(tokens: &TokenStream<Term>) -> Verdict {
    let mut pos = 0;
    let mut pending = 0usize;

    loop {
        let ident = try_match(tokens, pos, &Term::Ident);
        if !ident.matched {
            return Verdict::Rejected;
        }

        let plus = try_match(tokens, ident.pos, &Term::Plus);
        if plus.matched {
            pending += 1;
            pos = plus.pos;
        } else {
            pos = ident.pos;
            break;
        }
    }

    if pos != tokens.len() {
        return Verdict::Rejected;
    }

    let mut tree = ParseTree::I { i: Term::Ident };
    for _ in 0..pending {
        tree = ParseTree::IPlusE {
            i: Term::Ident,
            plus: Term::Plus,
            rest: Box::new(tree),
        };
    }
    Verdict::Accepted(tree)
}
