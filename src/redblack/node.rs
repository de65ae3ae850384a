//! The node/sentinel model shared by every other part of the tree.
//!
//! Nodes live in an arena owned by the [`Tree`] and point at each other with [`Link`]s (plain
//! indices). Slot 0 of the arena is the sentinel: a single black record that every "no child" and
//! "no parent" link points at. Reading the color or children of the sentinel is always valid, so
//! callers never have to ask whether a link is present before asking about its color.

use std::fmt;

use super::Tree;

/// The color tag carried by every node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A red node. Never the root, never the parent of another red node.
    Red,
    /// A black node. The root and the sentinel are always black.
    Black,
}

/// One side of a node. Used to write each mirrored case once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dir {
    Left = 0,
    Right = 1,
}

impl Dir {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// An index into the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link(usize);

/// The sentinel's slot.
pub(crate) const NIL: Link = Link(0);

impl Link {
    pub(crate) fn is_nil(self) -> bool {
        self == NIL
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Link(index)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    /// `None` only for the sentinel and for slots waiting on the free list.
    pub(crate) key: Option<K>,
    pub(crate) color: Color,
    pub(crate) parent: Link,
    pub(crate) children: [Link; 2],
}

impl<K> Node<K> {
    /// A freshly inserted node: red, with both children pointing at the sentinel.
    pub(crate) fn new(key: K, parent: Link) -> Self {
        Self {
            key: Some(key),
            color: Color::Red,
            parent,
            children: [NIL, NIL],
        }
    }

    pub(crate) fn sentinel() -> Self {
        Self {
            key: None,
            color: Color::Black,
            parent: NIL,
            children: [NIL, NIL],
        }
    }
}

impl<K> Tree<K> {
    pub(crate) fn node(&self, link: Link) -> &Node<K> {
        &self.nodes[link.index()]
    }

    fn node_mut(&mut self, link: Link) -> &mut Node<K> {
        debug_assert!(!link.is_nil(), "the sentinel is never mutated");
        &mut self.nodes[link.index()]
    }

    pub(crate) fn color(&self, link: Link) -> Color {
        self.node(link).color
    }

    pub(crate) fn is_red(&self, link: Link) -> bool {
        self.color(link) == Color::Red
    }

    pub(crate) fn is_black(&self, link: Link) -> bool {
        self.color(link) == Color::Black
    }

    pub(crate) fn parent(&self, link: Link) -> Link {
        self.node(link).parent
    }

    pub(crate) fn child(&self, link: Link, dir: Dir) -> Link {
        self.node(link).children[dir as usize]
    }

    pub(crate) fn left(&self, link: Link) -> Link {
        self.child(link, Dir::Left)
    }

    pub(crate) fn right(&self, link: Link) -> Link {
        self.child(link, Dir::Right)
    }

    /// The key stored at `link`.
    ///
    /// ## Panics
    ///
    /// When `link` is the sentinel or a freed slot. Every caller walks live links only.
    pub(crate) fn key(&self, link: Link) -> &K {
        self.node(link)
            .key
            .as_ref()
            .expect("Only live nodes hold keys")
    }

    pub(crate) fn key_mut(&mut self, link: Link) -> &mut Option<K> {
        &mut self.node_mut(link).key
    }

    /// Which side of `parent` the node `child` hangs on.
    pub(crate) fn side(&self, parent: Link, child: Link) -> Dir {
        if self.left(parent) == child {
            Dir::Left
        } else {
            debug_assert_eq!(self.right(parent), child, "Nodes are not connected");
            Dir::Right
        }
    }

    pub(crate) fn set_color(&mut self, link: Link, color: Color) {
        self.node_mut(link).color = color;
    }

    /// Points `link`'s `dir` child at `child`. Does not touch `child`'s parent link.
    pub(crate) fn set_child(&mut self, link: Link, dir: Dir, child: Link) {
        self.node_mut(link).children[dir as usize] = child;
    }

    /// Points `link`'s parent at `parent` unless `link` is the sentinel, whose parent never moves.
    pub(crate) fn set_parent(&mut self, link: Link, parent: Link) {
        if !link.is_nil() {
            self.node_mut(link).parent = parent;
        }
    }

    /// Makes `child` the `dir` child of `parent` (or the root when `parent` is the sentinel) and
    /// fixes `child`'s back reference.
    pub(crate) fn attach(&mut self, parent: Link, dir: Dir, child: Link) {
        if parent.is_nil() {
            self.root = child;
        } else {
            self.set_child(parent, dir, child);
        }
        self.set_parent(child, parent);
    }

    /// The leftmost node of the subtree rooted at `link`, or the sentinel for an empty subtree.
    pub(crate) fn minimum(&self, mut link: Link) -> Link {
        if link.is_nil() {
            return NIL;
        }
        while !self.left(link).is_nil() {
            link = self.left(link);
        }
        link
    }

    pub(crate) fn maximum(&self, mut link: Link) -> Link {
        if link.is_nil() {
            return NIL;
        }
        while !self.right(link).is_nil() {
            link = self.right(link);
        }
        link
    }

    /// The in-order successor of `link`, or the sentinel when `link` holds the largest key.
    pub(crate) fn successor(&self, mut link: Link) -> Link {
        let right = self.right(link);
        if !right.is_nil() {
            return self.minimum(right);
        }
        let mut parent = self.parent(link);
        while !parent.is_nil() && self.right(parent) == link {
            link = parent;
            parent = self.parent(link);
        }
        parent
    }

    pub(crate) fn node_ref(&self, link: Link) -> Option<NodeRef<'_, K>> {
        (!link.is_nil()).then(|| NodeRef { tree: self, link })
    }
}

/// A read-only view of one node in a [`Tree`]. Navigating off the edge of the tree (to the
/// sentinel) yields `None`.
///
/// # Examples
///
/// ```
/// use rbtree::redblack::{Color, Tree};
///
/// let tree: Tree<_> = [1, 2, 3].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.key(), &2);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.left().map(|n| *n.key()), Some(1));
/// assert!(root.parent().is_none());
/// ```
pub struct NodeRef<'a, K> {
    tree: &'a Tree<K>,
    link: Link,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    /// The key held by this node.
    pub fn key(&self) -> &'a K {
        self.tree.key(self.link)
    }

    /// The color of this node.
    pub fn color(&self) -> Color {
        self.tree.color(self.link)
    }

    /// Whether this node is red.
    pub fn is_red(&self) -> bool {
        self.tree.is_red(self.link)
    }

    /// Whether this node is black.
    pub fn is_black(&self) -> bool {
        self.tree.is_black(self.link)
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<Self> {
        self.tree.node_ref(self.tree.left(self.link))
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<Self> {
        self.tree.node_ref(self.tree.right(self.link))
    }

    /// The parent, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.tree.node_ref(self.tree.parent(self.link))
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", self.key())
            .field("color", &self.color())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}
