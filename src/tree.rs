//! A Binary Search Tree that only balances itself when asked to.
//!
//! Insertions and deletions are plain BST operations and can leave the tree lopsided (inserting
//! ascending values builds a chain). [`Tree::is_balanced`] reports how lopsided it is and
//! [`Tree::rebalance`] rebuilds it from its sorted contents.
//!
//! # Examples
//!
//! ```
//! use rebalancing_bst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//! tree.build([5, 3, 9, 3, 1]);
//!
//! // Duplicates are dropped and values come out sorted.
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 5, 9]);
//!
//! // Inserting the same value twice is a no-op.
//! assert!(tree.insert(4));
//! assert!(!tree.insert(4));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&4), Ok(4));
//! assert_eq!(tree.delete(&4), Err(TreeError::NotFound));
//! assert_eq!(tree.find(&4).map(|node| *node.value()), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ptr;

use tracing::{debug, instrument, trace};

use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::node::{self, Link, Node};
use crate::recursive;
use crate::traversal::{Nodes, Order, Values};

/// A Binary Search Tree storing each value at most once. This can be used for inserting,
/// finding, deleting, and traversing values. Balancing only happens through [`Tree::build`] and
/// [`Tree::rebalance`].
pub struct Tree<T> {
    root: Link<T>,
    config: Config,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The derived recursive drop would overflow the stack on a long enough chain, so take the
    // nodes apart one at a time.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    // Rebuilds bottom-up from a post-order walk: by the time a node comes up, copies of its
    // subtrees are the top of the stack (right above left).
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in self.nodes(Order::Post) {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            config: self.config,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    // A BST's shape is fully determined by its pre-order values, and listing them doesn't
    // recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("pre_order", &self.pre_order().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree` with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Generate a new, empty `Tree` with the given [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self { root: None, config }
    }

    /// The configuration this tree was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of values in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.nodes(Order::In).count()
    }

    /// Number of edges on the longest path from the root to a leaf, or -1 for an empty tree.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// Whether the height of the two subtrees of every node differ by at most the configured
    /// [`balance_tolerance`][Config::balance_tolerance].
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend(1..=10);
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(self.root(), self.config.balance_tolerance)
    }

    /// Lazily walks the nodes in the given order.
    pub fn nodes(&self, order: Order) -> Nodes<'_, T> {
        Nodes::new(self.root(), order)
    }

    /// Lazily walks the values in the given order.
    pub fn values(&self, order: Order) -> Values<'_, T> {
        Values::new(self.root(), order)
    }

    /// Values in breadth-first order.
    pub fn level_order(&self) -> Values<'_, T> {
        self.values(Order::Level)
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Values<'_, T> {
        self.values(Order::In)
    }

    /// Values with every node before its subtrees.
    pub fn pre_order(&self) -> Values<'_, T> {
        self.values(Order::Pre)
    }

    /// Values with every node after its subtrees.
    pub fn post_order(&self) -> Values<'_, T> {
        self.values(Order::Post)
    }

    /// Calls `visitor` on every node in the given order.
    pub fn visit<'a>(&'a self, order: Order, visitor: impl FnMut(&'a Node<T>)) {
        self.nodes(order).for_each(visitor);
    }

    /// Same as [`Tree::values`] but walks the tree recursively.
    pub fn values_recursive(&self, order: Order) -> Vec<&T> {
        recursive::values(self.root(), order)
    }

    /// Same as [`Tree::visit`] but walks the tree recursively.
    pub fn visit_recursive<'a>(&'a self, order: Order, mut visitor: impl FnMut(&'a Node<T>)) {
        recursive::visit(self.root(), order, &mut visitor);
    }

    /// Replaces the contents of this tree with a balanced tree built from `values`. The values
    /// are sorted and deduplicated first so they can be in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.build([7, 6, 5, 4, 3, 2, 1, 4]);
    ///
    /// // The middle of the sorted values becomes the root.
    /// assert_eq!(tree.root().map(|node| *node.value()), Some(4));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn build(&mut self, values: impl IntoIterator<Item = T>)
    where
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        debug!(len = values.len(), "built tree");
        self.replace_root(build_balanced(values));
    }

    /// Finds the node holding `value`.
    ///
    /// The node is read-only so the ordering can't be broken through it. To change a value,
    /// [`delete`][Tree::delete] it and [`insert`][Tree::insert] the new one.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no node holds `value`.
    pub fn find(&self, value: &T) -> Result<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(node),
                Ordering::Greater => node.right(),
            };
        }

        Err(TreeError::NotFound)
    }

    /// Whether a node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_ok()
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree untouched, if the value
    /// is already present.
    ///
    /// The tree is not rebalanced afterwards.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("duplicate value, skipping insert");
                    return false;
                }
            };
        }
        *slot = Some(Box::new(Node::leaf(value)));

        true
    }

    /// Deletes the node holding `value` and returns the value.
    ///
    /// A node with two children takes the value of its in-order successor, which is removed from
    /// the right subtree instead.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty and [`TreeError::NotFound`] if no node holds
    /// `value`. The tree is unchanged in both cases.
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, value: &T) -> Result<T>
    where
        T: Ord,
    {
        if self.root.is_none() {
            return Err(TreeError::EmptyTree);
        }
        let slot = locate_mut(&mut self.root, value)?;

        unlink(slot).ok_or(TreeError::NotFound)
    }

    /// Number of edges from the root to `target`.
    ///
    /// `target` must be a node of this tree, e.g. one returned by [`Tree::find`].
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty and [`TreeError::NotFound`] if `target`
    /// can't be reached from the root.
    pub fn depth(&self, target: &Node<T>) -> Result<usize>
    where
        T: Ord,
    {
        let (depth, node) = self.descend(&target.value)?;
        if ptr::eq(node, target) {
            Ok(depth)
        } else {
            Err(TreeError::NotFound)
        }
    }

    /// Number of edges from the root to the node holding `value`.
    ///
    /// # Errors
    ///
    /// Same as [`Tree::depth`].
    pub fn depth_of(&self, value: &T) -> Result<usize>
    where
        T: Ord,
    {
        self.descend(value).map(|(depth, _)| depth)
    }

    /// Rebuilds the tree into its balanced shape. The values are unchanged.
    #[instrument(level = "trace", skip_all)]
    pub fn rebalance(&mut self) {
        let values = into_sorted(self.root.take());
        debug!(len = values.len(), "rebalanced tree");
        self.replace_root(build_balanced(values));
    }

    fn replace_root(&mut self, root: Link<T>) {
        // Drop the old nodes through `Tree::drop` rather than recursively.
        drop(Self {
            root: mem::replace(&mut self.root, root),
            config: self.config,
        });
    }

    /// Finds the node holding `value` along with how many edges down it is.
    fn descend(&self, value: &T) -> Result<(usize, &Node<T>)>
    where
        T: Ord,
    {
        let mut current = self.root().ok_or(TreeError::EmptyTree)?;
        let mut depth = 0;
        loop {
            let next = match value.cmp(&current.value) {
                Ordering::Less => current.left(),
                Ordering::Equal => return Ok((depth, current)),
                Ordering::Greater => current.right(),
            };
            current = next.ok_or(TreeError::NotFound)?;
            depth += 1;
        }
    }
}

/// Builds a balanced tree from sorted, duplicate free values. The element at `len / 2` becomes
/// the root and each half becomes a subtree the same way.
fn build_balanced<T>(mut values: Vec<T>) -> Link<T> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    let right = values.split_off(mid + 1);
    let value = values.pop()?;

    Some(Box::new(Node {
        value,
        left: build_balanced(values),
        right: build_balanced(right),
    }))
}

/// Takes apart the tree rooted at `root`, returning its values in order.
fn into_sorted<T>(root: Link<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            break;
        };
        let Node { value, right, .. } = *node;
        values.push(value);
        current = right;
    }

    values
}

/// Walks down from `slot` to the slot that owns the node holding `value`.
fn locate_mut<'a, T>(mut slot: &'a mut Link<T>, value: &T) -> Result<&'a mut Link<T>>
where
    T: Ord,
{
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return Err(TreeError::NotFound),
        };
        if ordering == Ordering::Equal {
            return Ok(slot);
        }
        if let Some(node) = slot {
            slot = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
}

/// Removes the node owned by `slot`, returning its value, and repairs the slot:
///
/// - a leaf leaves the slot empty,
/// - a node with one child is replaced by that child,
/// - a node with two children keeps its place but takes the value of its in-order successor,
///   which is unlinked from the right subtree instead.
fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        trace!("deleting node with two children");
        let successor = pop_min(&mut node.right)?;
        return Some(mem::replace(&mut node.value, successor));
    }

    let node = slot.take()?;
    let Node { value, left, right } = *node;
    trace!(leaf = left.is_none() && right.is_none(), "deleting node");
    *slot = left.or(right);

    Some(value)
}

/// Unlinks the leftmost node of the subtree owned by `slot` and returns its value. Its right
/// child, if any, takes its place.
fn pop_min<T>(mut slot: &mut Link<T>) -> Option<T> {
    while slot.as_ref()?.left.is_some() {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }
    let node = slot.take()?;
    let Node { value, right, .. } = *node;
    *slot = right;

    Some(value)
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.build(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
