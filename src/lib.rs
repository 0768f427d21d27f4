//! This crate keeps a leaderboard of players in a Binary Search Tree ordered by player name.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a record (here a
//! [`Player`]) and up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    name less than its own name.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    name greater than its own name.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a name takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. [`PlayerTree`] does not rebalance, so
//! inserting names in sorted order produces a tree whose height equals its
//! size. BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree (see [`Traversal`]).
//!
//! ## Logging
//!
//! Mutations are reported through the [`log`] facade: `trace` for successful
//! inserts and removals, `debug` for rejected duplicates and missed removals.
//! Install any `log` implementation to see them.

#![deny(missing_docs)]

mod error;
mod player;
mod traversal;
mod tree;

pub use error::ParseTraversalError;
pub use player::Player;
pub use traversal::{Iter, Traversal};
pub use tree::PlayerTree;
