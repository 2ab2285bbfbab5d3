//! Iterative traversals. Each order is a lazy iterator over `&Node`s driven by an explicit stack
//! (or queue, for level order) so arbitrarily deep trees can be walked without recursing.
//!
//! # Examples
//!
//! ```
//! use rebalancing_bst::{Order, Tree};
//!
//! let tree: Tree<i32> = (1..=7).collect();
//!
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [4, 2, 6, 1, 3, 5, 7]);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 3, 2, 5, 7, 6, 4]);
//!
//! let mut visited = 0;
//! tree.visit(Order::Pre, |_node| visited += 1);
//! assert_eq!(visited, 7);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ptr;

use crate::node::Node;

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then every node one edge down (left to right), and so on.
    Level,
    /// Left subtree, node, right subtree. Yields values in ascending order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

impl Order {
    /// Every traversal order.
    pub const ALL: [Order; 4] = [Order::Level, Order::In, Order::Pre, Order::Post];
}

/// Breadth-first iterator over the nodes of a subtree.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// In-order iterator over the nodes of a subtree.
#[derive(Debug, Clone)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // Walk down the left spine, remembering everything we pass.
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }
        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Pre-order iterator over the nodes of a subtree.
#[derive(Debug, Clone)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Post-order iterator over the nodes of a subtree.
#[derive(Debug, Clone)]
pub struct PostOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
    last_visited: Option<&'a Node<T>>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
            last_visited: None,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current.take() {
                self.stack.push(node);
                self.current = node.left();
                continue;
            }

            let peek = *self.stack.last()?;
            match peek.right() {
                // The right subtree still has to be walked before `peek` can be yielded.
                Some(right) if !self.last_visited.is_some_and(|last| ptr::eq(last, right)) => {
                    self.current = Some(right);
                }
                _ => {
                    self.stack.pop();
                    self.last_visited = Some(peek);
                    return Some(peek);
                }
            }
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// A lazy traversal of a subtree in any [`Order`].
#[derive(Debug, Clone)]
pub enum Nodes<'a, T> {
    /// See [`LevelOrder`].
    Level(LevelOrder<'a, T>),
    /// See [`InOrder`].
    In(InOrder<'a, T>),
    /// See [`PreOrder`].
    Pre(PreOrder<'a, T>),
    /// See [`PostOrder`].
    Post(PostOrder<'a, T>),
}

impl<'a, T> Nodes<'a, T> {
    /// Start a traversal of the subtree rooted at `root`.
    pub fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        match order {
            Order::Level => Self::Level(LevelOrder::new(root)),
            Order::In => Self::In(InOrder::new(root)),
            Order::Pre => Self::Pre(PreOrder::new(root)),
            Order::Post => Self::Post(PostOrder::new(root)),
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Level(iter) => iter.next(),
            Self::In(iter) => iter.next(),
            Self::Pre(iter) => iter.next(),
            Self::Post(iter) => iter.next(),
        }
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

/// A lazy traversal yielding the values of the visited nodes.
#[derive(Debug, Clone)]
pub struct Values<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        Self {
            nodes: Nodes::new(root, order),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::value)
    }
}

impl<T> FusedIterator for Values<'_, T> {}
