use token_stream::Term;

/// The productions of the grammar, in the fixed order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    /// `E -> i + E`
    IPlusE,
    /// `E -> i`
    I,
}

impl Production {
    /// Human-readable form, used for trace events.
    pub fn label(&self) -> &'static str {
        match self {
            Production::IPlusE => "E -> i + E",
            Production::I => "E -> i",
        }
    }
}

/// A parse tree node, tagged by the production that built it. Children appear
/// in matched order: the terminals first, then the recursive `E` subtree.
///
/// A tree is only ever built for a fully matched alternative; partial trees
/// are discarded on backtrack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    /// `E -> i + E`: the two matched terminals and the recursive subtree.
    IPlusE {
        i: Term,
        plus: Term,
        rest: Box<ParseTree>,
    },
    /// `E -> i`: a single matched terminal.
    I { i: Term },
}

impl ParseTree {
    /// Returns the production this node was built from.
    pub fn production(&self) -> Production {
        match self {
            ParseTree::IPlusE { .. } => Production::IPlusE,
            ParseTree::I { .. } => Production::I,
        }
    }

    /// Number of `i` terminals in the chain rooted at this node.
    pub fn idents(&self) -> usize {
        match self {
            ParseTree::IPlusE { rest, .. } => 1 + rest.idents(),
            ParseTree::I { .. } => 1,
        }
    }

    /// Flattens the tree back into the terminal sequence it matched, in
    /// input order.
    pub fn terminals(&self) -> Vec<Term> {
        let mut out = Vec::new();
        let mut node = self;
        loop {
            match node {
                ParseTree::IPlusE { i, plus, rest } => {
                    out.push(*i);
                    out.push(*plus);
                    node = rest;
                }
                ParseTree::I { i } => {
                    out.push(*i);
                    return out;
                }
            }
        }
    }
}
