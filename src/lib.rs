//! This crate exposes a red-black tree, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching for values in the tree takes `O(height)`. Inserting keys in sorted order into a
//! plain BST degrades it into a list with `height == N`.
//!
//! ## Red-black trees
//!
//! A red-black tree labels every node red or black and constrains how the colors may be arranged
//! (see [`redblack`]). Those rules guarantee the height never exceeds `2 * lg(N + 1)`. Whenever an
//! insertion or deletion breaks a rule, the tree repairs it locally by recoloring nodes and
//! rotating small subtrees.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod redblack;

pub use error::{Result, TreeError};
