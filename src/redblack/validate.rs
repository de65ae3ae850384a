//! An invariant-checking oracle. Production operations never call it; tests call it after every
//! mutation to prove the tree is still a red-black tree.

use std::fmt;

use super::node::{Color, Dir, Link, NIL};
use super::Tree;

/// Why [`Tree::validate`] rejected a tree. Variants that concern a particular node carry that
/// node's key.
#[derive(Debug, PartialEq, Eq)]
pub enum Violation<'a, K> {
    /// The sentinel was recolored or relinked.
    Sentinel,
    /// The root is red.
    RedRoot(&'a K),
    /// The root has a parent.
    RootParent(&'a K),
    /// A red node has a red child.
    RedRed(&'a K),
    /// The left and right subtrees of a node have different black-heights.
    BlackHeight {
        /// The node whose subtrees disagree.
        node: &'a K,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// A key is not strictly between its in-order neighbors.
    Unordered(&'a K),
    /// A child's parent link does not point back at the node holding it.
    ParentLink(&'a K),
    /// The number of reachable nodes does not match the tree's length.
    Len {
        /// The tree's recorded length.
        expected: usize,
        /// How many nodes are reachable from the root.
        found: usize,
    },
}

impl<K: fmt::Debug> fmt::Display for Violation<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentinel => write!(f, "sentinel is not a black, unlinked node"),
            Self::RedRoot(k) => write!(f, "root {k:?} is red"),
            Self::RootParent(k) => write!(f, "root {k:?} has a parent"),
            Self::RedRed(k) => write!(f, "red node {k:?} has a red child"),
            Self::BlackHeight { node, left, right } => write!(
                f,
                "node {node:?} has black-height {left} on the left and {right} on the right"
            ),
            Self::Unordered(k) => write!(f, "key {k:?} is out of order"),
            Self::ParentLink(k) => write!(f, "a child of {k:?} does not link back to it"),
            Self::Len { expected, found } => {
                write!(f, "tree claims {expected} nodes but {found} are reachable")
            }
        }
    }
}

impl<K: Ord> Tree<K> {
    /// Checks every red-black and search-tree invariant, returning the black-height of the root
    /// (the sentinel counts as zero) or the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::redblack::Tree;
    ///
    /// let tree: Tree<_> = (0..100).collect();
    /// let black_height = tree.validate().unwrap();
    ///
    /// // A red-black tree is at most twice as tall as its black-height.
    /// assert!(tree.height() <= 2 * black_height);
    /// ```
    pub fn validate(&self) -> Result<usize, Violation<'_, K>> {
        let sentinel = self.node(NIL);
        if sentinel.color != Color::Black
            || sentinel.parent != NIL
            || sentinel.children != [NIL, NIL]
            || sentinel.key.is_some()
        {
            return Err(Violation::Sentinel);
        }

        let root = self.root;
        if !root.is_nil() {
            if self.is_red(root) {
                return Err(Violation::RedRoot(self.key(root)));
            }
            if !self.parent(root).is_nil() {
                return Err(Violation::RootParent(self.key(root)));
            }
        }

        let mut found = 0;
        let black_height = self.check(root, None, None, &mut found)?;
        if found != self.len {
            return Err(Violation::Len {
                expected: self.len,
                found,
            });
        }
        Ok(black_height)
    }

    /// Recursively checks the subtree at `link`, whose keys must lie strictly between `low` and
    /// `high`, and returns its black-height.
    fn check<'a>(
        &'a self,
        link: Link,
        low: Option<&'a K>,
        high: Option<&'a K>,
        found: &mut usize,
    ) -> Result<usize, Violation<'a, K>> {
        if link.is_nil() {
            return Ok(0);
        }
        *found += 1;

        let key = self.key(link);
        if low.is_some_and(|low| key <= low) || high.is_some_and(|high| key >= high) {
            return Err(Violation::Unordered(key));
        }

        for dir in [Dir::Left, Dir::Right] {
            let child = self.child(link, dir);
            if child.is_nil() {
                continue;
            }
            if self.parent(child) != link {
                return Err(Violation::ParentLink(key));
            }
            if self.is_red(link) && self.is_red(child) {
                return Err(Violation::RedRed(key));
            }
        }

        let left = self.check(self.left(link), low, Some(key), found)?;
        let right = self.check(self.right(link), Some(key), high, found)?;
        if left != right {
            return Err(Violation::BlackHeight {
                node: key,
                left,
                right,
            });
        }
        Ok(left + usize::from(self.is_black(link)))
    }
}
