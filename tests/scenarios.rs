use rbtree::redblack::{Color, Tree};

fn init_logging() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}

/// The key and color of a node's children, `None` standing in for the sentinel.
fn children(tree: &Tree<i32>, key: i32) -> (Option<(i32, Color)>, Option<(i32, Color)>) {
    let node = tree.search(&key).expect("key should be present");
    (
        node.left().map(|n| (*n.key(), n.color())),
        node.right().map(|n| (*n.key(), n.color())),
    )
}

#[test]
fn ascending_three_rotates_left_once() {
    init_logging();
    let mut tree = Tree::new();
    for key in [10, 20, 30] {
        tree.insert(key);
    }

    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 20);
    assert_eq!(root.color(), Color::Black);
    assert_eq!(
        children(&tree, 20),
        (Some((10, Color::Red)), Some((30, Color::Red)))
    );
    assert_eq!(tree.validate(), Ok(1));
}

#[test]
fn descending_three_rotates_right_once() {
    init_logging();
    let mut tree = Tree::new();
    for key in [10, 5, 1] {
        tree.insert(key);
    }

    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 5);
    assert_eq!(root.color(), Color::Black);
    // The line case paints the old parent black and the old grandparent red, so both children
    // come out red.
    assert_eq!(
        children(&tree, 5),
        (Some((1, Color::Red)), Some((10, Color::Red)))
    );
    assert!(tree.validate().is_ok());
}

#[test]
fn ascending_inserts_then_descending_deletes_empty_the_tree() {
    init_logging();
    let mut tree = Tree::new();
    for key in 1..=20 {
        tree.insert(key);
        assert!(tree.validate().is_ok(), "invalid after inserting {key}");
    }
    assert_eq!(tree.len(), 20);

    for key in (1..=20).rev() {
        assert_eq!(tree.delete(&key), Some(key));
        assert!(tree.validate().is_ok(), "invalid after deleting {key}");
    }

    assert!(tree.root().is_none());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.validate(), Ok(0));
}

#[test]
fn duplicate_insert_is_ignored() {
    let mut tree = Tree::new();
    for key in [8, 4, 12, 2, 6] {
        tree.insert(key);
    }
    let keys_before: Vec<_> = tree.inorder().copied().collect();
    let shape_before = format!("{:?}", tree.root());

    assert!(!tree.insert(6));

    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), keys_before);
    assert_eq!(format!("{:?}", tree.root()), shape_before);
}

#[test]
fn delete_missing_reports_not_found() {
    let mut tree: Tree<_> = (0..10).collect();

    assert_eq!(tree.delete(&10), None);
    assert_eq!(tree.len(), 10);
}

#[test]
fn search_tracks_membership_through_churn() {
    let mut tree = Tree::new();
    for key in 0..200 {
        tree.insert(key);
    }
    for key in (0..200).filter(|k| k % 3 == 0) {
        tree.delete(&key);
    }
    for key in (0..200).filter(|k| k % 6 == 0) {
        tree.insert(key);
    }

    for key in 0..200 {
        let expected = key % 3 != 0 || key % 6 == 0;
        assert_eq!(tree.search(&key).is_some(), expected, "key {key}");
    }
    assert!(tree.validate().is_ok());
}

#[test]
fn try_insert_reports_duplicates() {
    let mut tree = Tree::new();

    assert_eq!(tree.try_insert(1).ok(), Some(true));
    assert_eq!(tree.try_insert(1).ok(), Some(false));
    assert_eq!(tree.len(), 1);
}
