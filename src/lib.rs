//! A Binary Search Tree (BST) that stays as simple as possible on every mutation and only
//! balances itself when asked to.
//!
//! ## Ordering and shape
//!
//! Every [`Node`] keeps smaller values in its left subtree and larger ones in its right subtree,
//! and no value is stored twice. Lookups, inserts and deletes walk a single root-to-leaf path,
//! so they cost whatever the tree's height happens to be.
//!
//! That height depends on how the tree got its shape. [`Tree::build`] and [`Tree::rebalance`]
//! pick the middle of the sorted values as the root at every level, which keeps it at `O(lg N)`.
//! [`Tree::insert`] and [`Tree::delete`] only touch the path they walk, so a tree fed ascending
//! values degrades into a chain. [`Tree::is_balanced`] tells the two apart, using the tolerance
//! from [`Config`], and the caller decides when a rebuild is worth it.
//!
//! ## Traversals
//!
//! Every [`Order`] is available lazily through iterators driven by an explicit stack or queue
//! (see [`traversal`]) and, for comparison, recursively (see [`recursive`]).
//!
//! # Examples
//!
//! ```
//! use rebalancing_bst::Tree;
//!
//! let mut tree: Tree<i32> = [1, 7, 4, 23, 8, 9, 3, 5, 67, 6345, 324].into_iter().collect();
//! assert!(tree.is_balanced());
//!
//! tree.extend([10, 11, 12, 13]);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 15);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod error;
pub mod node;
pub mod recursive;
pub mod traversal;
pub mod tree;

pub use config::Config;
pub use error::{Result, TreeError};
pub use node::Node;
pub use traversal::Order;
pub use tree::Tree;
