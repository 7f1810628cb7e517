//! # persistent-bst
//!
//! Immutable binary search tree nodes with structural sharing, intended as
//! the common base for persistent ordered collections (ordered maps and sets,
//! order-statistics trees, self-balancing variants).
//!
//! ## Overview
//!
//! A [`TreeNode`](tree::TreeNode) is one immutable subtree: a key, an
//! optional payload, up to two shared children and a cached node count.
//! Nodes are never mutated after construction. Higher layers implement
//! insertion, deletion and rebalancing by building new nodes along the edited
//! path and sharing every untouched subtree by reference.
//!
//! Two handles denote the same tree value if and only if they point at the
//! same allocation, so change detection is a pointer comparison rather than a
//! deep walk.
//!
//! ## Feature Flags
//!
//! - `arc` (default): children are shared through `std::sync::Arc`, making
//!   nodes `Send + Sync`. Without it, `std::rc::Rc` is used.
//! - `tracing` (default): the [`verify`](tree::verify) helpers emit
//!   `tracing` events describing invariant violations.
//!
//! ## Example
//!
//! ```rust
//! use persistent_bst::prelude::*;
//!
//! let left = TreeNode::new("b", None, None);
//! let right = TreeNode::new("d", None, None);
//! let parent = TreeNode::new("c", Some(left.clone()), Some(right.clone()));
//!
//! assert_eq!(parent.size(), 3);
//! assert!(TreeNode::same_subtree(parent.child(Side::Left), Some(&left)));
//! assert!(parent.satisfies_ordering(|a: &&str, b: &&str| a.cmp(b)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use persistent_bst::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;
