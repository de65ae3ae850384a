//! A red-black tree. Every node is colored red or black and the tree keeps five invariants:
//!
//! 1. Every node is red or black.
//! 2. The root is black.
//! 3. Every leaf (the shared sentinel) is black.
//! 4. A red node never has a red child.
//! 5. Every path from a node down to a leaf crosses the same number of black nodes.
//!
//! Together these keep the height below `2 * lg(N + 1)`, so every operation is `O(lg N)`.
//! Insertion and deletion restore the invariants with recoloring and at most three rotations.
//!
//! # Examples
//!
//! ```
//! use rbtree::redblack::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting the same key again is ignored.
//! assert!(!tree.insert(1));
//!
//! // Deleting a key returns it.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(!tree.contains(&1));
//! ```

use std::fmt;

mod delete;
mod insert;
mod iter;
mod node;
mod rotate;
mod search;
mod validate;

pub use iter::Iter;
pub use node::{Color, NodeRef};
pub use validate::Violation;

use node::{Link, Node, NIL};

/// A self-balancing Binary Search Tree (specifically, a red-black tree) holding a set of keys.
///
/// Nodes are kept in an arena owned by the tree and refer to each other by index, so parent
/// links never own anything and moving or cloning the tree keeps every link valid.
#[derive(Clone)]
pub struct Tree<K> {
    /// Slot 0 is the sentinel. Every other slot is a live node or sits on `free`.
    nodes: Vec<Node<K>>,
    root: Link,
    free: Vec<Link>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generate a new, empty `Tree` with room for `capacity` keys before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        Self {
            nodes,
            root: NIL,
            free: Vec::new(),
            len: 0,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key, keeping the sentinel.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.free.clear();
        self.root = NIL;
        self.len = 0;
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.node_ref(self.root)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, link: Link) -> usize {
        if link.is_nil() {
            return 0;
        }
        let left = self.subtree_height(self.left(link));
        let right = self.subtree_height(self.right(link));
        left.max(right) + 1
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
