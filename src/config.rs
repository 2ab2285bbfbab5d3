//! Tunables for a [`Tree`][crate::Tree].

/// How far apart the heights of a node's two subtrees may be before
/// [`Tree::is_balanced`][crate::Tree::is_balanced] reports the tree as unbalanced.
///
/// Note this is looser than the `1` an AVL tree would use.
pub const DEFAULT_BALANCE_TOLERANCE: usize = 2;

/// Configuration carried by a [`Tree`][crate::Tree] across rebuilds.
///
/// # Examples
///
/// ```
/// use rebalancing_bst::{Config, Tree};
///
/// let strict = Config { balance_tolerance: 1 };
/// let mut tree = Tree::with_config(strict);
/// tree.extend([1, 2, 3]);
///
/// // A three node chain is within the default tolerance but not within 1.
/// assert!(!tree.is_balanced());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Largest allowed difference between the left and right subtree heights of any node.
    pub balance_tolerance: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            balance_tolerance: DEFAULT_BALANCE_TOLERANCE,
        }
    }
}
