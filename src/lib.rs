//! This crate exposes an ordered collection backed by a plain Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored values. It is built from `Node`s, each storing one value and owning up to two child
//! `Node`s. The invariants of this BST, under the tree's ordering function, are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than its own.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than or equal
//!    to its own.
//!
//! The second rule is what keeps duplicates: a value that ties with a node goes to the right.
//!
//! Searching takes `O(height)`. [`OrderedTree`] never rebalances, so feeding it sorted input
//! gives a tree as tall as it has elements. Traversals and teardown use explicit stacks, so
//! even such degenerate trees never exhaust the call stack.
//!
//! ## Ordering
//!
//! The ordering is chosen once, when the tree is built: the natural [`Ord`] of the element type,
//! a closure, or any [`Compare`] implementation. Types without a natural order must be given one;
//! a [`Builder`] without one fails with [`TreeError::Configuration`].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree = OrderedTree::from_elements(vec![10, 15, -7, 7, 14, 3, 2, 1, 22]);
//!
//! let in_order: Vec<i32> = tree.in_order().copied().collect();
//! assert_eq!(in_order, [-7, 1, 2, 3, 7, 10, 14, 15, 22]);
//!
//! let pre_order: Vec<i32> = tree.pre_order().copied().collect();
//! assert_eq!(pre_order, [10, -7, 7, 3, 2, 1, 15, 14, 22]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod order;
mod traversal;
mod tree;


pub use error::TreeError;
pub use order::{Builder, Compare, NaturalOrder};
pub use traversal::{InOrder, PostOrder, PreOrder};
pub use tree::OrderedTree;

/// A convenience type alias for the result of tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
