use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TrieNode {
    // BTreeMap keeps word listings in deterministic lexicographic order.
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

/// A prefix tree over strings. Each path from the root spells a prefix;
/// nodes marked terminal end a stored word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie containing each of the given words.
    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    /// Returns true if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.terminal
    }

    /// Inserts `word`, creating the missing suffix of its path.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
    }

    /// Returns true if exactly `word` was inserted; a stored word's proper
    /// prefix does not count.
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).is_some_and(|node| node.terminal)
    }

    /// Returns true if any stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// Removes `word` if present, pruning any branch that no longer leads
    /// to a stored word. Other words sharing a prefix with `word` survive.
    pub fn remove(&mut self, word: &str) {
        let path: Vec<char> = word.chars().collect();
        prune(&mut self.root, &path);
    }

    /// All stored words, in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect(&self.root, &mut String::new(), &mut out);
        out
    }

    /// All stored words starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(node) = self.node_at(prefix) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        collect(node, &mut String::from(prefix), &mut out);
        out
    }

    /// Walks the path spelled by `prefix`, if it exists.
    fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

/// Unmarks the word ending at `path` and reports whether `node` became
/// removable: childless and not ending another word.
fn prune(node: &mut TrieNode, path: &[char]) -> bool {
    match path.split_first() {
        None => {
            if !node.terminal {
                return false;
            }
            node.terminal = false;
            node.children.is_empty()
        }
        Some((c, rest)) => {
            let Some(child) = node.children.get_mut(c) else {
                return false;
            };
            if prune(child, rest) {
                node.children.remove(c);
                node.children.is_empty() && !node.terminal
            } else {
                false
            }
        }
    }
}

fn collect(node: &TrieNode, prefix: &mut String, out: &mut Vec<String>) {
    if node.terminal {
        out.push(prefix.clone());
    }
    for (c, child) in &node.children {
        prefix.push(*c);
        collect(child, prefix, out);
        prefix.pop();
    }
}
