use crimson_forest::red_black::{insert, rotate_left, rotate_right, RbNode};
use crimson_forest::util::in_order;
use crimson_forest::{Color, RedBlackTree};

fn in_order_keys<K: Clone + PartialOrd>(tree: &RedBlackTree<K>) -> Vec<K> {
    let mut keys = Vec::new();
    tree.in_order_traverse(|k| keys.push(k.clone()));
    keys
}

#[test]
fn rb_first_insert_is_black_root_matrix() {
    let mut tree = RedBlackTree::<i32>::new();
    let idx = tree.insert(7);

    assert_eq!(tree.root_index(), Some(idx));
    assert_eq!(tree.color(idx), Color::Black);
    tree.assert_valid().unwrap();
}

#[test]
fn rb_classic_sixteen_keys_matrix() {
    let mut tree = RedBlackTree::<i32>::new();
    for k in [11, 7, 15, 5, 9, 13, 20, 3, 6, 8, 10, 12, 14, 18, 25, 2] {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }

    let root = tree.root_index().unwrap();
    assert_eq!(tree.key(root), &11);
    assert_eq!(tree.color(root), Color::Black);
    assert_eq!(
        in_order_keys(&tree),
        vec![2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 18, 20, 25]
    );
}

#[test]
fn rb_descending_triple_single_rotation_matrix() {
    // 3, 2, 1: the third insert is a left-left red conflict with an
    // absent uncle, resolved by one right rotation plus a color swap.
    let mut tree = RedBlackTree::<i32>::new();
    for k in [3, 2, 1] {
        tree.insert(k);
    }

    let root = tree.root_index().unwrap();
    assert_eq!(tree.key(root), &2);
    assert_eq!(tree.color(root), Color::Black);

    let l = tree.node(root).l.unwrap();
    let r = tree.node(root).r.unwrap();
    assert_eq!(tree.key(l), &1);
    assert_eq!(tree.key(r), &3);
    assert_eq!(tree.color(l), Color::Red);
    assert_eq!(tree.color(r), Color::Red);
    tree.assert_valid().unwrap();
}

#[test]
fn rb_ascending_ladder_matrix() {
    let mut tree = RedBlackTree::<i32>::new();
    for i in 0..200 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }

    assert_eq!(tree.size(), 200);
    for i in 0..200 {
        assert!(tree.has(&i), "missing {i}");
    }
    assert!(!tree.has(&200));
    assert_eq!(in_order_keys(&tree), (0..200).collect::<Vec<_>>());
}

#[test]
fn rb_descending_ladder_matrix() {
    let mut tree = RedBlackTree::<i32>::new();
    for i in (0..200).rev() {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }

    assert_eq!(in_order_keys(&tree), (0..200).collect::<Vec<_>>());
    assert_eq!(tree.key(tree.min().unwrap()), &0);
    assert_eq!(tree.key(tree.max().unwrap()), &199);
}

#[test]
fn rb_duplicate_keys_matrix() {
    let mut tree = RedBlackTree::<i32>::new();
    for k in [5, 5, 5, 3, 5] {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }

    assert_eq!(tree.size(), 5);
    assert_eq!(in_order_keys(&tree), vec![3, 5, 5, 5, 5]);
}

#[test]
fn rb_custom_comparator_matrix() {
    let mut tree = RedBlackTree::<i32, _>::with_comparator(|a: &i32, b: &i32| b.cmp(a) as i32);
    for k in [5, 1, 9, 3, 7] {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }

    let mut keys = Vec::new();
    tree.in_order_traverse(|k| keys.push(*k));
    assert_eq!(keys, vec![9, 7, 5, 3, 1]);
}

#[test]
fn rb_empty_tree_matrix() {
    let tree = RedBlackTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    tree.assert_valid().unwrap();

    let mut visited = 0;
    tree.in_order_traverse(|_| visited += 1);
    assert_eq!(visited, 0);
}

#[test]
fn rb_traversal_orders_matrix() {
    let mut tree = RedBlackTree::<i32>::new();
    for k in [11, 7, 15, 5, 9, 13, 20] {
        tree.insert(k);
    }

    // no rotations fire for this order, so the shape is the insertion shape
    let mut pre = Vec::new();
    tree.pre_order_traverse(|k| pre.push(*k));
    assert_eq!(pre, vec![11, 7, 5, 9, 15, 13, 20]);

    let mut post = Vec::new();
    tree.post_order_traverse(|k| post.push(*k));
    assert_eq!(post, vec![5, 9, 7, 13, 20, 15, 11]);
}

#[test]
fn rb_clear_matrix() {
    let mut tree = RedBlackTree::<i32>::new();
    for i in 0..50 {
        tree.insert(i);
    }
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.arena().len(), 0);
    tree.assert_valid().unwrap();

    tree.insert(1);
    assert_eq!(tree.size(), 1);
    tree.assert_valid().unwrap();
}

fn cmp(a: &i32, b: &i32) -> i32 {
    a.cmp(b) as i32
}

fn collect<K: Clone>(arena: &[RbNode<K>], root: Option<u32>) -> Vec<K> {
    let mut keys = Vec::new();
    in_order(arena, root, &mut |k: &K| keys.push(k.clone()));
    keys
}

#[test]
fn rb_rotations_preserve_in_order_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;
    for k in [11, 7, 15, 5, 9, 13, 20, 3, 6] {
        arena.push(RbNode::new(k));
        let idx = (arena.len() - 1) as u32;
        root = insert(&mut arena, root, idx, &cmp);
    }

    let before = collect(&arena, root);

    // rotating at the root re-seats the root pointer
    let top = root.unwrap();
    root = rotate_left(&mut arena, root, top);
    assert_ne!(root, Some(top));
    assert_eq!(collect(&arena, root), before);

    root = rotate_right(&mut arena, root, root.unwrap());
    assert_eq!(root, Some(top));
    assert_eq!(collect(&arena, root), before);

    // interior rotation, root unchanged
    let pivot = arena[top as usize].l.unwrap();
    root = rotate_right(&mut arena, root, pivot);
    assert_eq!(root, Some(top));
    assert_eq!(collect(&arena, root), before);
}
