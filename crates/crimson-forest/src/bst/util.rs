//! Ordered insert and key-replacement removal for the plain tree.

use crate::types::KeyNode;
use crate::util::{first, get_l, get_r, set_l, set_p, set_r};

/// Attaches node `n` at the first empty slot found by comparator
/// descent and returns the new root. Keys comparing equal go right, so
/// duplicate keys are accepted rather than rejected or overwritten.
pub fn insert<N, K, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Some(n);
    };

    loop {
        let cmp = comparator(arena[n as usize].key(), arena[curr as usize].key());
        if cmp < 0 {
            match get_l(arena, curr) {
                Some(l) => curr = l,
                None => {
                    set_l(arena, curr, Some(n));
                    set_p(arena, n, Some(curr));
                    return root;
                }
            }
        } else {
            match get_r(arena, curr) {
                Some(r) => curr = r,
                None => {
                    set_r(arena, curr, Some(n));
                    set_p(arena, n, Some(curr));
                    return root;
                }
            }
        }
    }
}

/// Removes one node holding `key` and returns the new root. A missing
/// key leaves the tree unchanged.
///
/// A node with two children is not relinked: its key is overwritten
/// with the in-order successor's key (the minimum of the right
/// subtree), and that key is then removed from the right subtree. The
/// transient second copy of the key is why `K: Clone` is required.
/// The unlinked node's arena slot is not reclaimed.
pub fn remove<N, K, C>(arena: &mut [N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    K: Clone,
    C: Fn(&K, &K) -> i32,
{
    let root = remove_at(arena, root, key, comparator);
    if let Some(root) = root {
        set_p(arena, root, None);
    }
    root
}

/// Recursive removal over the subtree at `node`; returns the subtree's
/// new root. Parent links of re-seated children are repaired by the
/// caller one frame up, the topmost by [`remove`].
fn remove_at<N, K, C>(
    arena: &mut [N],
    node: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    N: KeyNode<K>,
    K: Clone,
    C: Fn(&K, &K) -> i32,
{
    let i = node?;
    let cmp = comparator(key, arena[i as usize].key());

    if cmp < 0 {
        let l = remove_at(arena, get_l(arena, i), key, comparator);
        set_l(arena, i, l);
        if let Some(l) = l {
            set_p(arena, l, Some(i));
        }
        return Some(i);
    }
    if cmp > 0 {
        let r = remove_at(arena, get_r(arena, i), key, comparator);
        set_r(arena, i, r);
        if let Some(r) = r {
            set_p(arena, r, Some(i));
        }
        return Some(i);
    }

    match (get_l(arena, i), get_r(arena, i)) {
        // leaf: detach
        (None, None) => None,
        // one child: splice it into this slot
        (None, Some(r)) => Some(r),
        (Some(l), None) => Some(l),
        // two children: take over the successor's key, then remove that
        // key from the right subtree
        (Some(_), Some(r)) => {
            let successor = first(arena, Some(r)).expect("non-empty right subtree has a minimum");
            let successor_key = arena[successor as usize].key().clone();
            arena[i as usize].set_key(successor_key.clone());
            let nr = remove_at(arena, Some(r), &successor_key, comparator);
            set_r(arena, i, nr);
            if let Some(nr) = nr {
                set_p(arena, nr, Some(i));
            }
            Some(i)
        }
    }
}
