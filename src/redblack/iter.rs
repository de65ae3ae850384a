use std::iter::FusedIterator;

use super::node::Link;
use super::Tree;

/// An in-order iterator over the keys of a [`Tree`], created by [`Tree::inorder`].
///
/// It follows successor links through the tree, so it holds no stack and never yields the
/// sentinel. Call [`Tree::inorder`] again to start over.
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    next: Link,
    remaining: usize,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_nil() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.successor(current);
        self.remaining -= 1;
        Some(self.tree.key(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Tree<K> {
    /// Iterates over the keys in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::redblack::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn inorder(&self) -> Iter<'_, K> {
        Iter {
            tree: self,
            next: self.minimum(self.root),
            remaining: self.len,
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
