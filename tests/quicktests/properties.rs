use ordered_tree::OrderedTree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and to a `Vec` of what should be in it.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same multiset of values.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                model.push(x.clone());
            }
            Op::Remove(x) => {
                if tree.remove(x).is_some() {
                    let pos = model.iter().position(|y| y == x).unwrap();
                    model.swap_remove(pos);
                }
            }
        }
    }
    model.sort();
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.count() == model.len() && tree.in_order().eq(model.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::from_elements(xs.clone());

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = OrderedTree::from_elements(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn count_matches_every_traversal(xs: Vec<i16>, removes: Vec<i16>) -> bool {
    let mut tree = OrderedTree::from_elements(xs);
    for x in &removes {
        tree.remove(x);
    }

    let count = tree.count();
    tree.in_order().count() == count
        && tree.pre_order().count() == count
        && tree.post_order().count() == count
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i8>, seed: usize) -> bool {
    let mut tree = OrderedTree::from_elements(xs.clone());

    // Remove in a rotated order so it differs from insertion order.
    let mut order = xs;
    if !order.is_empty() {
        let mid = seed % order.len();
        order.rotate_left(mid);
    }
    for x in &order {
        assert_eq!(tree.remove(x), Some(*x));
    }

    tree.count() == 0
        && tree.is_empty()
        && tree.in_order().next().is_none()
        && tree.pre_order().next().is_none()
        && tree.post_order().next().is_none()
}

#[quickcheck]
fn traversals_are_restartable(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::from_elements(xs);

    tree.in_order().eq(tree.in_order())
        && tree.pre_order().eq(tree.pre_order())
        && tree.post_order().eq(tree.post_order())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i32>) -> bool {
    let tree = OrderedTree::from_elements(xs);
    let values: Vec<_> = tree.in_order().collect();

    values.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn in_order_is_sorted_under_custom_order(xs: Vec<i32>) -> bool {
    let tree = OrderedTree::with_order(xs, |a: &i32, b: &i32| b.cmp(a));
    let values: Vec<_> = tree.in_order().collect();

    values.windows(2).all(|w| w[0] >= w[1])
}

#[quickcheck]
fn every_traversal_visits_the_same_multiset(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::from_elements(xs);
    let mut pre: Vec<_> = tree.pre_order().copied().collect();
    let mut post: Vec<_> = tree.post_order().copied().collect();
    pre.sort_unstable();
    post.sort_unstable();

    tree.in_order().eq(pre.iter()) && tree.in_order().eq(post.iter())
}

#[quickcheck]
fn first_pre_order_and_last_post_order_are_the_root(xs: Vec<i8>) -> bool {
    let first = xs.first().copied();
    let tree = OrderedTree::from_elements(xs);

    tree.pre_order().next().copied() == first && tree.post_order().last().copied() == first
}
