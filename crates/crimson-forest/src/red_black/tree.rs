use crate::util::{find, first, last, traverse};

use super::node::{Color, RbNode};
use super::util::{assert_red_black_tree, insert, InvariantError};

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Self-balancing binary search tree with O(log n) height.
///
/// Insertion keeps the five red-black invariants; lookups, min/max and
/// traversals are the same generic utilities the plain tree uses. There
/// is no `remove`: see the module docs of [`crate::red_black`].
pub struct RedBlackTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
    comparator: C,
    len: usize,
}

impl<K> RedBlackTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    /// Natural `PartialOrd` ordering.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RedBlackTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RedBlackTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            len: 0,
        }
    }

    /// Inserts `key` and returns the new node's arena index. Duplicate
    /// keys are accepted and routed right of their equals.
    pub fn insert(&mut self, key: K) -> u32 {
        self.arena.push(RbNode::new(key));
        let idx = (self.arena.len() - 1) as u32;
        let comparator = &self.comparator;
        self.root = insert(&mut self.arena, self.root, idx, comparator);
        self.len += 1;
        idx
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn has(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn min(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn max(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &RbNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.node(idx).k
    }

    pub fn color(&self, idx: u32) -> Color {
        self.node(idx).color
    }

    pub fn arena(&self) -> &[RbNode<K>] {
        &self.arena
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn in_order_traverse<F: FnMut(&K)>(&self, mut visit: F) {
        traverse::in_order(&self.arena, self.root, &mut visit);
    }

    pub fn pre_order_traverse<F: FnMut(&K)>(&self, mut visit: F) {
        traverse::pre_order(&self.arena, self.root, &mut visit);
    }

    pub fn post_order_traverse<F: FnMut(&K)>(&self, mut visit: F) {
        traverse::post_order(&self.arena, self.root, &mut visit);
    }

    /// Validates the five invariants plus link and order consistency.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_red_black_tree(&self.arena, self.root, &self.comparator)
    }
}
