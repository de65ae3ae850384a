use std::borrow::Borrow;
use std::cmp::Ordering;

use super::node::{Link, NodeRef, NIL};
use super::Tree;

impl<K> Tree<K> {
    /// Finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::redblack::Tree;
    ///
    /// let tree: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&2).map(|n| *n.key()), Some(2));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.node_ref(self.find(key))
    }

    /// Whether the tree holds `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.find(key).is_nil()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.node_ref(self.minimum(self.root)).map(|n| n.key())
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.node_ref(self.maximum(self.root)).map(|n| n.key())
    }

    /// Walks down from the root to the node holding `key`, or the sentinel.
    pub(crate) fn find<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while !current.is_nil() {
            current = match key.cmp(self.key(current).borrow()) {
                Ordering::Less => self.left(current),
                Ordering::Equal => return current,
                Ordering::Greater => self.right(current),
            };
        }
        NIL
    }
}
