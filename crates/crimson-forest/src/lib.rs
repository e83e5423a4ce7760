//! Arena-based binary search trees with red-black insertion balancing.
//!
//! Two tree flavors share one structural core:
//!
//! - [`BinarySearchTree`] — plain ordered tree: insert (ties go right),
//!   membership, min/max, key-replacement removal, visitor traversals.
//! - [`RedBlackTree`] — the same ordered insert followed by a bottom-up
//!   color fix-up that keeps the height at O(log n). Removal is
//!   deliberately absent from the colored tree (see [`red_black`]).
//!
//! Instead of heap pointers, all "pointers" are `Option<u32>` indices
//! into a tree-owned `Vec<N>` arena. Parent back-references are plain
//! handle fields on the node, so the upward walk during fix-up never
//! touches ownership: the arena owns every node, links are just numbers.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyNode`] link traits |
//! [`util`] | generic descent, min/max, find, size, visitor traversals |
//! [`bst`] | `BstNode` and the [`BinarySearchTree`] wrapper |
//! [`red_black`] | `RbNode`, rotations, insertion fix-up, validation, [`RedBlackTree`] |

pub mod bst;
pub mod red_black;
pub mod types;
pub mod util;

pub use bst::BinarySearchTree;
pub use red_black::{Color, InvariantError, RedBlackTree};
pub use types::{KeyNode, Node};
