use std::collections::VecDeque;

/// A node in a binary tree: a value and up to two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Creates a leaf node with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary tree with an explicit level-order builder.
///
/// `insert` fills the tree top to bottom, left to right, so inserting
/// `1..=7` produces the complete three-level tree the traversal demos use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: Option<Box<TreeNode<T>>>,
}

impl<T> BinaryTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by level-order insertion of each value in turn.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value);
        }
        tree
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Returns true if the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` at the first free child slot in level order.
    pub fn insert(&mut self, value: T) {
        let Some(root) = self.root.as_deref_mut() else {
            self.root = Some(Box::new(TreeNode::new(value)));
            return;
        };

        let mut queue: VecDeque<&mut TreeNode<T>> = VecDeque::new();
        queue.push_back(root);
        while let Some(node) = queue.pop_front() {
            let TreeNode { left, right, .. } = node;

            match left {
                None => {
                    *left = Some(Box::new(TreeNode::new(value)));
                    return;
                }
                Some(child) => queue.push_back(child.as_mut()),
            }
            match right {
                None => {
                    *right = Some(Box::new(TreeNode::new(value)));
                    return;
                }
                Some(child) => queue.push_back(child.as_mut()),
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        fn count<T>(node: Option<&TreeNode<T>>) -> usize {
            node.map_or(0, |n| {
                1 + count(n.left.as_deref()) + count(n.right.as_deref())
            })
        }
        count(self.root())
    }

    /// Height of the tree: the number of levels, 0 for an empty tree.
    pub fn height(&self) -> usize {
        fn depth<T>(node: Option<&TreeNode<T>>) -> usize {
            node.map_or(0, |n| {
                1 + depth(n.left.as_deref()).max(depth(n.right.as_deref()))
            })
        }
        depth(self.root())
    }
}

impl<T: Clone> BinaryTree<T> {
    /// Depth-first, root before children (recursive form).
    pub fn pre_order(&self) -> Vec<T> {
        fn visit<T: Clone>(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
            if let Some(n) = node {
                out.push(n.value.clone());
                visit(n.left.as_deref(), out);
                visit(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Depth-first, root before children, driven by an explicit stack
    /// instead of recursion. Yields the same sequence as [`pre_order`].
    ///
    /// [`pre_order`]: BinaryTree::pre_order
    pub fn pre_order_iterative(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode<T>> = Vec::new();
        if let Some(root) = self.root() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            out.push(node.value.clone());
            // Right first so the left subtree is popped (visited) first.
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        out
    }

    /// Depth-first, left subtree before root before right subtree.
    pub fn in_order(&self) -> Vec<T> {
        fn visit<T: Clone>(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
            if let Some(n) = node {
                visit(n.left.as_deref(), out);
                out.push(n.value.clone());
                visit(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Depth-first, children before root.
    pub fn post_order(&self) -> Vec<T> {
        fn visit<T: Clone>(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
            if let Some(n) = node {
                visit(n.left.as_deref(), out);
                visit(n.right.as_deref(), out);
                out.push(n.value.clone());
            }
        }
        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Breadth-first, level by level, via a queue.
    pub fn level_order(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut queue: VecDeque<&TreeNode<T>> = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            out.push(node.value.clone());
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.level_order().is_empty());
    }

    #[test]
    fn test_level_order_insertion_shape() {
        let tree = BinaryTree::from_values(1..=7);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.level_order(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_single_node() {
        let tree = BinaryTree::from_values([42]);
        assert_eq!(tree.pre_order(), vec![42]);
        assert_eq!(tree.in_order(), vec![42]);
        assert_eq!(tree.height(), 1);
    }
}
