use rebalancing_bst::{Order, Tree, TreeError};

use std::collections::BTreeSet;

use crate::{init_test_setup, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes, and rebuilds we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(tree.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Delete(x) => match tree.delete(x) {
                Ok(deleted) => {
                    assert_eq!(&deleted, x);
                    assert!(set.remove(x));
                }
                Err(TreeError::EmptyTree) => assert!(set.is_empty()),
                Err(TreeError::NotFound) => assert!(!set.contains(x)),
            },
            Op::Build(xs) => {
                tree.build(xs.iter().cloned());
                *set = xs.iter().cloned().collect();
            }
            Op::Rebalance => {
                tree.rebalance();
                assert!(tree.is_balanced());
            }
        }
    }
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    tree.in_order().copied().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_test_setup();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    in_order(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn strictly_ascending(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    in_order(&tree).windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn build_ignores_order_and_duplicates(xs: Vec<i8>) -> bool {
    let mut sorted = xs.clone();
    sorted.sort_unstable();
    sorted.dedup();

    let unsorted: Tree<i8> = xs.into_iter().collect();
    let sorted: Tree<i8> = sorted.into_iter().collect();

    unsorted.level_order().eq(sorted.level_order()) && unsorted.is_balanced()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());

    xs.iter()
        .all(|x| tree.find(x).map(|node| node.value()) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).err() == Some(TreeError::NotFound))
}

#[quickcheck]
fn duplicate_insert_is_noop(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let before: Vec<i8> = tree.pre_order().copied().collect();

    xs.iter().all(|x| !tree.insert(*x)) && tree.pre_order().copied().eq(before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let mut expected: BTreeSet<_> = xs.into_iter().collect();

    for delete in &deletes {
        let removed = expected.remove(delete);
        if tree.delete(delete).is_ok() != removed {
            return false;
        }
        if !in_order(&tree).into_iter().eq(expected.iter().copied()) {
            return false;
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let before = in_order(&tree);

    tree.rebalance();
    tree.is_balanced() && in_order(&tree) == before
}

#[quickcheck]
fn depth_matches_path(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());

    tree.nodes(Order::Pre).all(|node| {
        let depth = tree.depth(node).expect("node is in the tree");
        tree.depth_of(node.value()) == Ok(depth)
            && depth as isize <= tree.height()
    })
}

#[quickcheck]
fn iterative_matches_recursive(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    Order::ALL
        .into_iter()
        .all(|order| tree.values(order).collect::<Vec<_>>() == tree.values_recursive(order))
}

#[quickcheck]
fn visit_matches_values(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);

    Order::ALL.into_iter().all(|order| {
        let mut visited = Vec::new();
        tree.visit(order, |node| visited.push(node.value()));
        visited == tree.values(order).collect::<Vec<_>>()
    })
}

#[test]
fn two_child_delete_after_inserts() {
    init_test_setup();
    let mut tree: Tree<i32> = [1, 7, 4, 23, 8, 9, 3, 5, 67, 6345, 324]
        .into_iter()
        .collect();
    tree.insert(10);
    tree.insert(6);

    assert_eq!(tree.delete(&4), Ok(4));
    assert_eq!(tree.find(&4).err(), Some(TreeError::NotFound));
    assert_eq!(
        tree.in_order().copied().collect::<Vec<_>>(),
        [1, 3, 5, 6, 7, 8, 9, 10, 23, 67, 324, 6345]
    );
}
