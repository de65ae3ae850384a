//! Ordered insertion followed by the red-red repair loop.

use std::cmp::Ordering;

use log::{debug, trace};

use super::node::{Color, Dir, Link, Node, NIL};
use super::Tree;
use crate::error::Result;

impl<K> Tree<K> {
    /// Inserts `key` into the tree. Returns `true` if the key was added and `false` if an equal
    /// key was already present, in which case the tree is left untouched (the stored key is not
    /// replaced).
    ///
    /// ## Panics
    ///
    /// When a new node cannot be allocated. See [`Tree::try_insert`] for a fallible version.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::redblack::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(tree.contains(&1));
    ///
    /// // Duplicates are ignored.
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        match self.try_insert(key) {
            Ok(inserted) => inserted,
            Err(e) => panic!("{e}"),
        }
    }

    /// Inserts `key` into the tree, reporting allocation failure instead of panicking.
    ///
    /// Memory for the new node is secured before anything is linked, so on error the tree is
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::redblack::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(7).ok(), Some(true));
    /// assert_eq!(tree.try_insert(7).ok(), Some(false));
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<bool>
    where
        K: Ord,
    {
        let mut parent = NIL;
        let mut current = self.root;
        let mut dir = Dir::Left;
        while !current.is_nil() {
            dir = match key.cmp(self.key(current)) {
                Ordering::Less => Dir::Left,
                Ordering::Greater => Dir::Right,
                Ordering::Equal => {
                    debug!("ignoring duplicate key at slot {}", current.index());
                    return Ok(false);
                }
            };
            parent = current;
            current = self.child(current, dir);
        }

        self.reserve_slot()?;
        let z = self.allocate(key, parent);
        self.attach(parent, dir, z);
        self.len += 1;

        if cfg!(debug_assertions) && !parent.is_nil() {
            match dir {
                Dir::Left => assert!(self.key(z) < self.key(parent)),
                Dir::Right => assert!(self.key(z) > self.key(parent)),
            }
        }

        self.insert_fixup(z);
        Ok(true)
    }

    /// Makes sure the next [`Tree::allocate`] cannot fail.
    pub(crate) fn reserve_slot(&mut self) -> Result<()> {
        if self.free.is_empty() {
            self.nodes.try_reserve(1)?;
        }
        Ok(())
    }

    /// Stores a new red node for `key`, reusing a freed slot when one is available.
    pub(crate) fn allocate(&mut self, key: K, parent: Link) -> Link {
        let node = Node::new(key, parent);
        match self.free.pop() {
            Some(link) => {
                self.nodes[link.index()] = node;
                link
            }
            None => {
                self.nodes.push(node);
                Link::from_index(self.nodes.len() - 1)
            }
        }
    }

    /// Restores the red-black invariants after `z` was linked in as a red leaf.
    ///
    /// The only invariant a red leaf can break is "no red node has a red child", and only when
    /// its parent is red. Each pass either fixes that locally with at most two rotations or
    /// pushes the violation two levels up.
    fn insert_fixup(&mut self, mut z: Link) {
        while self.is_red(self.parent(z)) {
            // A red parent is never the root, so the grandparent is a real node.
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            let dir = self.side(grandparent, parent);
            let uncle = self.child(grandparent, dir.opposite());

            if self.is_red(uncle) {
                trace!("insert fixup: red uncle at slot {}", uncle.index());
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if z == self.child(parent, dir.opposite()) {
                trace!("insert fixup: straightening triangle at slot {}", parent.index());
                z = parent;
                self.rotate(z, dir);
            }

            trace!("insert fixup: rotating line at slot {}", grandparent.index());
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, dir.opposite());
        }

        let root = self.root;
        if !root.is_nil() {
            self.set_color(root, Color::Black);
        }
    }
}
