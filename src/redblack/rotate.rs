//! The two O(1) rotations every rebalancing step is built from.

use log::trace;

use super::node::{Dir, Link};
use super::Tree;

impl<K> Tree<K> {
    /// Rotates `x` down toward `dir`, promoting its child on the opposite side. Colors are left
    /// alone; callers repaint as their case requires.
    ///
    /// ## Panics
    ///
    /// When `x` has no child on the side being promoted.
    ///
    /// # Diagram
    ///
    /// For `dir == Dir::Left` (a left rotation):
    ///
    /// ```text
    ///    parent                 parent
    ///      |                      |
    ///      x                      y
    ///     / \                    / \
    ///    a   y     rotate ->    x   c
    ///       / \                / \
    ///      b   c              a   b
    /// ```
    ///
    /// `Dir::Right` is the mirror image.
    pub(crate) fn rotate(&mut self, x: Link, dir: Dir) {
        let up = dir.opposite();
        let y = self.child(x, up);
        assert!(!y.is_nil(), "Rotation requires a child to promote");
        trace!("rotating {dir:?} at slot {}", x.index());

        // `y`'s inner subtree crosses over to `x`.
        let inner = self.child(y, dir);
        self.set_child(x, up, inner);
        self.set_parent(inner, x);

        // `y` takes `x`'s place under `x`'s old parent (or as the root).
        let parent = self.parent(x);
        let side = if parent.is_nil() {
            dir
        } else {
            self.side(parent, x)
        };
        self.attach(parent, side, y);

        self.set_child(y, dir, x);
        self.set_parent(x, y);
    }

    // The fixups go through `rotate(x, dir)`; these fixed-direction names are for tests.
    /// Promotes `x`'s right child into `x`'s position.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn rotate_left(&mut self, x: Link) {
        self.rotate(x, Dir::Left);
    }

    /// Promotes `y`'s left child into `y`'s position.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn rotate_right(&mut self, y: Link) {
        self.rotate(y, Dir::Right);
    }
}
