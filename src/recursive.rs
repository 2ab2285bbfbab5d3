//! Recursive versions of the traversals in [`traversal`][crate::traversal]. They produce exactly
//! the same sequences but use the call stack, so they are only suitable for trees whose height
//! is modest (e.g. right after a [`rebalance`][crate::Tree::rebalance]).

use crate::node::{self, Node};
use crate::traversal::Order;

/// Calls `visitor` on every node of the subtree rooted at `root` in the given order.
pub fn visit<'a, T>(
    root: Option<&'a Node<T>>,
    order: Order,
    visitor: &mut impl FnMut(&'a Node<T>),
) {
    match order {
        Order::Level => {
            // One pass per level; a negative height means there are no levels at all.
            let levels = usize::try_from(node::height(root) + 1).unwrap_or(0);
            for level in 0..levels {
                visit_level(root, level, visitor);
            }
        }
        Order::In => visit_in(root, visitor),
        Order::Pre => visit_pre(root, visitor),
        Order::Post => visit_post(root, visitor),
    }
}

/// Collects the values of the subtree rooted at `root` in the given order.
pub fn values<T>(root: Option<&Node<T>>, order: Order) -> Vec<&T> {
    let mut values = Vec::new();
    visit(root, order, &mut |node| values.push(node.value()));
    values
}

fn visit_level<'a, T>(
    node: Option<&'a Node<T>>,
    level: usize,
    visitor: &mut impl FnMut(&'a Node<T>),
) {
    let Some(node) = node else {
        return;
    };
    match level {
        0 => visitor(node),
        _ => {
            visit_level(node.left(), level - 1, visitor);
            visit_level(node.right(), level - 1, visitor);
        }
    }
}

fn visit_in<'a, T>(node: Option<&'a Node<T>>, visitor: &mut impl FnMut(&'a Node<T>)) {
    if let Some(node) = node {
        visit_in(node.left(), visitor);
        visitor(node);
        visit_in(node.right(), visitor);
    }
}

fn visit_pre<'a, T>(node: Option<&'a Node<T>>, visitor: &mut impl FnMut(&'a Node<T>)) {
    if let Some(node) = node {
        visitor(node);
        visit_pre(node.left(), visitor);
        visit_pre(node.right(), visitor);
    }
}

fn visit_post<'a, T>(node: Option<&'a Node<T>>, visitor: &mut impl FnMut(&'a Node<T>)) {
    if let Some(node) = node {
        visit_post(node.left(), visitor);
        visit_post(node.right(), visitor);
        visitor(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tree;

    #[test]
    fn test_matches_iterative() {
        let mut tree: Tree<i32> = [50, 20, 80, 10, 30, 70, 90, 5, 95].into_iter().collect();
        tree.insert(96);
        tree.insert(97);
        tree.insert(1);

        for order in Order::ALL {
            let iterative: Vec<_> = tree.values(order).collect();
            assert_eq!(values(tree.root(), order), iterative, "{order:?}");
        }
    }

    #[test]
    fn test_empty() {
        for order in Order::ALL {
            assert!(values::<i32>(None, order).is_empty());
        }
    }

    #[test]
    fn test_level_order() {
        let tree: Tree<i32> = [1, 2, 3, 4].into_iter().collect();

        assert_eq!(values(tree.root(), Order::Level), [&3, &2, &4, &1]);
    }
}
