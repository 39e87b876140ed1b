//! Generic tree data structures and traversals.
//!
//! [`BinaryTree`] is built explicitly through its level-order builder; there
//! is no ambient or global state. Traversals return the node values as a
//! flat sequence: depth-first in recursive and explicit-stack forms, and
//! breadth-first via a queue. Alongside it live the ordered containers the
//! demos exercise: a [`BinarySearchTree`], array-backed [`MinHeap`] and
//! [`MaxHeap`], and a [`Trie`] over strings.

pub mod bst;
pub mod heap;
pub mod tree;
pub mod trie;

pub use bst::BinarySearchTree;
pub use heap::{MaxHeap, MinHeap};
pub use tree::{BinaryTree, TreeNode};
pub use trie::Trie;
