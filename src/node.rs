//! The building block of a [`Tree`][crate::Tree] and the structural queries that only need a
//! subtree: [`height`] and [`is_balanced`].

use std::fmt;

use crate::traversal::PostOrder;

/// An owning pointer to an optional subtree. Every `Node` is owned by exactly one `Link`: either
/// its parent's `left`/`right` or the tree's root.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores a value and up to two children. Everything reachable through `left` is smaller
/// than `value` and everything reachable through `right` is larger.
///
/// Nodes are only handed out by shared reference so callers can't break that ordering. Owning
/// (and so dropping or cloning) whole subtrees is left to [`Tree`][crate::Tree], which does it
/// without recursing.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Only one level deep; a chain would otherwise recurse once per node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    /// Construct a new `Node` with no children.
    pub(crate) fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf. A leaf has a height of
    /// 0.
    pub fn height(&self) -> usize {
        // Never negative for a present node.
        height(Some(self)).unsigned_abs()
    }
}

/// Number of edges on the longest downward path from `node` to a leaf. An absent node has a height
/// of -1 so that a leaf has a height of 0.
///
/// # Examples
///
/// ```
/// use rebalancing_bst::{node, Tree};
///
/// let tree: Tree<i32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(node::height::<i32>(None), -1);
/// assert_eq!(node::height(tree.root()), 1);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    match node {
        None => -1,
        Some(node) => fold_heights(node, |_, _| true).unwrap_or(-1),
    }
}

/// Whether, for every node in the subtree rooted at `node`, the heights of its left and right
/// subtrees differ by at most `tolerance`. An absent subtree is balanced.
pub fn is_balanced<T>(node: Option<&Node<T>>, tolerance: usize) -> bool {
    match node {
        None => true,
        Some(node) => {
            fold_heights(node, |left, right| left.abs_diff(right) <= tolerance).is_some()
        }
    }
}

/// Computes subtree heights bottom-up in a single post-order pass, handing `accept` the left and
/// right subtree heights of every node. Returns the height of `root`, or `None` as soon as
/// `accept` rejects a node.
///
/// Post-order finishes a node's whole left subtree and then its whole right subtree right before
/// the node itself, so their heights are always the top of the stack when the node comes up.
fn fold_heights<T>(
    root: &Node<T>,
    mut accept: impl FnMut(isize, isize) -> bool,
) -> Option<isize> {
    let mut heights: Vec<isize> = Vec::new();
    for node in PostOrder::new(Some(root)) {
        let right = match node.right {
            Some(_) => heights.pop()?,
            None => -1,
        };
        let left = match node.left {
            Some(_) => heights.pop()?,
            None => -1,
        };
        if !accept(left, right) {
            return None;
        }
        heights.push(left.max(right) + 1);
    }

    heights.pop()
}
