use std::fmt::Debug;

use crate::types::KeyNode;

use super::node::{Color, RbNodeLike};

/// Debug dump of a colored subtree, one node per line with its arena
/// index and color. Intended for test diagnostics.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: RbNodeLike<K> + KeyNode<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.color() == Color::Black {
                "black"
            } else {
                "red"
            };
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!("Node[{i}] {color} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}", n.key())
        }
    }
}
