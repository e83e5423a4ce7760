//! Red-black tree: ordered insert with color fix-up.
//!
//! Only insertion is rebalanced. Removal is not part of the colored
//! tree's contract: a color-blind removal would silently break the
//! black-height invariant, so rather than ship one, the colored wrapper
//! exposes none — use [`crate::bst::BinarySearchTree`] when removal
//! matters more than balance.

pub mod node;
pub mod print;
pub mod tree;
pub mod util;

pub use node::{Color, RbNode, RbNodeLike};
pub use print::print;
pub use tree::RedBlackTree;
pub use util::{assert_red_black_tree, insert, rotate_left, rotate_right, InvariantError};
