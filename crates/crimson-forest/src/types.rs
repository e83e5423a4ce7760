//! Node trait definitions.
//!
//! Every tree in this crate stores its nodes in a caller-invisible
//! `Vec`-backed arena; each "pointer" (parent, left, right) is an
//! `Option<u32>` index into that arena. The traits below are the seam
//! between the generic descent/traversal code in [`crate::util`] and the
//! concrete node layouts in [`crate::bst`] and [`crate::red_black`].

/// Structural links of a binary tree node (`p` / `l` / `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node carrying an ordering key.
///
/// `set_key` exists for the two-children removal case, which overwrites
/// a node's key with its in-order successor's key instead of relinking.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
    fn set_key(&mut self, key: K);
}

/// Comparator used by the tree wrappers.
///
/// Negative means the first key orders before the second, zero means
/// equal, positive means after.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;
