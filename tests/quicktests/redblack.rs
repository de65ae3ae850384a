use rbtree::redblack::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both, and that both
/// agree on which inserts were duplicates and which deletes missed.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
            Op::Remove(k) => tree.delete(k) == set.take(k),
        };
        if !agrees || tree.validate().is_err() {
            return false;
        }
    }

    true
}

#[test]
fn duplicates_and_missing_keys_are_reported() {
    let ops = [
        Op::Insert(3),
        Op::Insert(3),
        Op::Remove(4),
        Op::Insert(4),
        Op::Remove(3),
        Op::Remove(3),
    ];
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    assert!(do_ops(&ops, &mut tree, &mut set));
    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [4]);
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.inorder().eq(set.iter())
}

#[quickcheck]
fn valid_after_every_insert(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    xs.into_iter().all(|x| {
        tree.insert(x);
        tree.validate().is_ok()
    })
}

#[quickcheck]
fn inorder_is_strictly_increasing(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let keys: Vec<_> = tree.inorder().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys.len() == tree.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - drop each copy.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.validate().is_ok()
}

#[quickcheck]
fn height_bound(xs: HashSet<u32>) -> bool {
    let n = xs.len();
    let tree: Tree<_> = xs.into_iter().collect();

    tree.height() as f64 <= 2.0 * ((n + 1) as f64).log2()
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<u8>, dup: u8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(dup);
    let before = format!("{:?} {:?}", tree, tree.root());

    let inserted = tree.insert(dup);

    !inserted && format!("{:?} {:?}", tree, tree.root()) == before
}
