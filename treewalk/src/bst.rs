use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
struct BstNode<T> {
    value: T,
    left: Option<Box<BstNode<T>>>,
    right: Option<Box<BstNode<T>>>,
}

impl<T> BstNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary search tree: every value in a node's left subtree is less than
/// the node's value, every value in its right subtree is not less.
///
/// Nodes are private so the ordering invariant cannot be broken from
/// outside; duplicates go to the right, matching the level at which the
/// original demos treat them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinarySearchTree<T: Ord> {
    root: Option<Box<BstNode<T>>>,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting each value in turn.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value);
        }
        tree
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` at its ordered position.
    pub fn insert(&mut self, value: T) {
        fn place<T: Ord>(slot: &mut Option<Box<BstNode<T>>>, value: T) {
            match slot {
                None => *slot = Some(Box::new(BstNode::new(value))),
                Some(node) => {
                    if value < node.value {
                        place(&mut node.left, value);
                    } else {
                        place(&mut node.right, value);
                    }
                }
            }
        }
        place(&mut self.root, value);
    }

    /// Returns true if `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes one occurrence of `value`, if present. A node with two
    /// children is replaced by its in-order successor.
    pub fn remove(&mut self, value: &T) {
        self.root = remove_node(self.root.take(), value);
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        fn count<T>(node: Option<&BstNode<T>>) -> usize {
            node.map_or(0, |n| {
                1 + count(n.left.as_deref()) + count(n.right.as_deref())
            })
        }
        count(self.root.as_deref())
    }

    /// Height of the tree: the number of levels, 0 for an empty tree.
    pub fn height(&self) -> usize {
        fn depth<T>(node: Option<&BstNode<T>>) -> usize {
            node.map_or(0, |n| {
                1 + depth(n.left.as_deref()).max(depth(n.right.as_deref()))
            })
        }
        depth(self.root.as_deref())
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> {
    /// In-order traversal: yields the values in sorted order.
    pub fn in_order(&self) -> Vec<T> {
        fn visit<T: Clone>(node: Option<&BstNode<T>>, out: &mut Vec<T>) {
            if let Some(n) = node {
                visit(n.left.as_deref(), out);
                out.push(n.value.clone());
                visit(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        visit(self.root.as_deref(), &mut out);
        out
    }
}

fn remove_node<T: Ord>(node: Option<Box<BstNode<T>>>, value: &T) -> Option<Box<BstNode<T>>> {
    let mut node = node?;
    match value.cmp(&node.value) {
        Ordering::Less => node.left = remove_node(node.left.take(), value),
        Ordering::Greater => node.right = remove_node(node.right.take(), value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return right,
            (left, None) => return left,
            (left, Some(right)) => {
                let (rest, successor) = take_min(right);
                node.value = successor;
                node.left = left;
                node.right = rest;
            }
        },
    }
    Some(node)
}

/// Detaches the smallest value from a subtree, returning what remains of the
/// subtree along with the value.
fn take_min<T: Ord>(mut node: Box<BstNode<T>>) -> (Option<Box<BstNode<T>>>, T) {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(node), min)
        }
        None => (node.right.take(), node.value),
    }
}
