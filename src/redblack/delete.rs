//! Deletion: splice out one node, then repay any black-height debt it leaves behind.

use log::{debug, trace};

use super::node::{Color, Dir, Link, NIL};
use super::Tree;

impl<K> Tree<K> {
    /// Deletes `key` from the tree and returns the stored key. If the tree does not contain the
    /// key, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::redblack::Tree;
    ///
    /// let mut tree: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert!(!tree.contains(&2));
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let z = self.find(key);
        if z.is_nil() {
            debug!("delete: key not found");
            return None;
        }

        // With two children, trade keys with the in-order successor (which has no left child) and
        // remove that node instead.
        let z = if self.left(z).is_nil() || self.right(z).is_nil() {
            z
        } else {
            let successor = self.minimum(self.right(z));
            let successor_key = self.key_mut(successor).take();
            let z_key = std::mem::replace(self.key_mut(z), successor_key);
            *self.key_mut(successor) = z_key;
            successor
        };

        let removed = self.splice(z);
        self.len -= 1;
        removed
    }

    /// Unlinks `z`, which has at most one child, frees its slot and returns its key.
    fn splice(&mut self, z: Link) -> Option<K> {
        let child = if self.left(z).is_nil() {
            self.right(z)
        } else {
            self.left(z)
        };
        debug_assert!(
            self.left(z).is_nil() || self.right(z).is_nil(),
            "Spliced node must have at most one child"
        );

        let parent = self.parent(z);
        let dir = if parent.is_nil() {
            Dir::Left
        } else {
            self.side(parent, z)
        };
        self.attach(parent, dir, child);

        let was_black = self.is_black(z);
        let key = self.release(z);

        if was_black {
            if self.is_red(child) {
                self.set_color(child, Color::Black);
            } else {
                self.delete_fixup(child, parent, dir);
            }
        }
        key
    }

    /// Returns `link`'s slot to the free list.
    fn release(&mut self, link: Link) -> Option<K> {
        let node = &mut self.nodes[link.index()];
        node.parent = NIL;
        node.children = [NIL, NIL];
        node.color = Color::Black;
        let key = node.key.take();
        self.free.push(link);
        key
    }

    /// Restores equal black-heights after a black node was removed from the `dir` side of
    /// `parent`. `x` is whatever took its place (possibly the sentinel) and carries one extra
    /// black that has to be absorbed or pushed up.
    ///
    /// `parent` is tracked explicitly instead of being read from `x`, since `x` may be the
    /// sentinel, whose parent link never changes.
    fn delete_fixup(&mut self, mut x: Link, mut parent: Link, mut dir: Dir) {
        while x != self.root && self.is_black(x) {
            let far = dir.opposite();
            // The side that lost a black still has black-height >= 1 on the other side, so the
            // sibling is a real node.
            let mut sibling = self.child(parent, far);

            if self.is_red(sibling) {
                trace!("delete fixup: red sibling at slot {}", sibling.index());
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, dir);
                sibling = self.child(parent, far);
            }

            if self.is_black(self.left(sibling)) && self.is_black(self.right(sibling)) {
                trace!("delete fixup: black nephews at slot {}", sibling.index());
                self.set_color(sibling, Color::Red);
                x = parent;
                parent = self.parent(x);
                if !parent.is_nil() {
                    dir = self.side(parent, x);
                }
                continue;
            }

            if self.is_black(self.child(sibling, far)) {
                trace!("delete fixup: near nephew red at slot {}", sibling.index());
                let near = self.child(sibling, dir);
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.child(parent, far);
            }

            trace!("delete fixup: far nephew red at slot {}", sibling.index());
            let parent_color = self.color(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            let far_nephew = self.child(sibling, far);
            self.set_color(far_nephew, Color::Black);
            self.rotate(parent, dir);
            x = self.root;
            break;
        }

        if !x.is_nil() {
            self.set_color(x, Color::Black);
        }
    }
}
