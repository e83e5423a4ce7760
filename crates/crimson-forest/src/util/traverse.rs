//! Visitor traversals.
//!
//! Each traversal invokes the visitor once per key in the stated order
//! and consumes no return value. Recursion depth is bounded by tree
//! height, which the balanced flavor keeps at O(log n).

use crate::types::KeyNode;
use crate::util::{get_l, get_r};

/// Left subtree, node, right subtree. Yields keys in comparator order.
pub fn in_order<N, K, F>(arena: &[N], node: Option<u32>, visit: &mut F)
where
    N: KeyNode<K>,
    F: FnMut(&K),
{
    let Some(i) = node else {
        return;
    };
    in_order(arena, get_l(arena, i), visit);
    visit(arena[i as usize].key());
    in_order(arena, get_r(arena, i), visit);
}

/// Node, left subtree, right subtree.
pub fn pre_order<N, K, F>(arena: &[N], node: Option<u32>, visit: &mut F)
where
    N: KeyNode<K>,
    F: FnMut(&K),
{
    let Some(i) = node else {
        return;
    };
    visit(arena[i as usize].key());
    pre_order(arena, get_l(arena, i), visit);
    pre_order(arena, get_r(arena, i), visit);
}

/// Left subtree, right subtree, node.
pub fn post_order<N, K, F>(arena: &[N], node: Option<u32>, visit: &mut F)
where
    N: KeyNode<K>,
    F: FnMut(&K),
{
    let Some(i) = node else {
        return;
    };
    post_order(arena, get_l(arena, i), visit);
    post_order(arena, get_r(arena, i), visit);
    visit(arena[i as usize].key());
}
