use crate::util::{find, first, last, traverse};

use super::node::BstNode;
use super::util::{insert, remove};

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Plain binary search tree over arena-stored nodes.
///
/// Not self-balancing: height is O(n) for adversarial insertion orders.
/// Removed nodes stay in the arena until [`clear`](Self::clear); only
/// their links are severed.
pub struct BinarySearchTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<BstNode<K>>,
    root: Option<u32>,
    comparator: C,
    len: usize,
}

impl<K> BinarySearchTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    /// Natural `PartialOrd` ordering.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for BinarySearchTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> BinarySearchTree<K, C>
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
        self.arena.push(BstNode::new(key));
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

    /// Removes one node holding `key`; a missing key is a no-op.
    pub fn remove(&mut self, key: &K)
    where
        K: Clone,
    {
        if self.find(key).is_none() {
            return;
        }
        let comparator = &self.comparator;
        self.root = remove(&mut self.arena, self.root, key, comparator);
        self.len -= 1;
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

    pub fn node(&self, idx: u32) -> &BstNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.node(idx).k
    }

    pub fn arena(&self) -> &[BstNode<K>] {
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
}
