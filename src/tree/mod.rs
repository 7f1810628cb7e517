//! Immutable binary search tree nodes.
//!
//! This module provides the building block for persistent ordered
//! collections:
//!
//! - [`TreeNode`]: an immutable subtree with a key, a payload, two optional
//!   shared children and a cached size
//! - [`SearchTreeNode`]: the trait collaborators program against
//! - [`Side`]: selects the left or right child
//! - [`NodeError`]: failures of the fallible constructors and accessors
//! - [`verify`]: whole-tree invariant checks built from the local predicate
//!
//! # Structural Sharing
//!
//! A node never changes after construction. To "modify" a tree, build new
//! nodes along the path from the edited position up to the root and reuse
//! every other subtree by reference. The old and new versions then share all
//! untouched nodes.
//!
//! ```rust
//! use persistent_bst::tree::{Side, TreeNode};
//!
//! let left = TreeNode::new(1, None, None);
//! let right = TreeNode::new(3, None, None);
//! let root = TreeNode::new(2, Some(left), Some(right));
//!
//! let edited = root.replace_child(Side::Right, Some(TreeNode::new(4, None, None)));
//!
//! // The left subtree is shared, not copied
//! assert!(TreeNode::same_subtree(root.child(Side::Left), edited.child(Side::Left)));
//! // The right subtree was replaced in the new version only
//! assert_eq!(root.child(Side::Right).map(|node| *node.key()), Some(3));
//! assert_eq!(edited.child(Side::Right).map(|node| *node.key()), Some(4));
//! ```
//!
//! # Identity
//!
//! Two handles represent the same tree if and only if they point at the same
//! allocation. `TreeNode` deliberately implements neither `PartialEq` nor
//! `Clone`; use [`TreeNode::ptr_eq`] and [`TreeNode::same_subtree`].

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Shared handle to an immutable node.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// so trees can be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is cheaper but confined to one thread.
#[cfg(feature = "arc")]
pub type NodeRef<N> = std::sync::Arc<N>;

/// Shared handle to an immutable node.
#[cfg(not(feature = "arc"))]
pub type NodeRef<N> = std::rc::Rc<N>;

mod error;
mod node;
mod search_tree_node;
mod side;
pub mod verify;

pub use error::NodeError;
pub use node::TreeNode;
pub use node::size_or_zero;
pub use search_tree_node::SearchTreeNode;
pub use side::Side;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod node_ref_tests {
    use super::{NodeRef, TreeNode};
    use rstest::rstest;

    #[rstest]
    fn test_node_ref_clone_shares_allocation() {
        let node = TreeNode::new(42, None, None);
        let node_clone = NodeRef::clone(&node);
        assert!(NodeRef::ptr_eq(&node, &node_clone));
    }

    #[rstest]
    fn test_child_is_released_with_last_parent() {
        let child = TreeNode::new(1, None, None);
        assert_eq!(NodeRef::strong_count(&child), 1);

        let first_parent = TreeNode::new(2, Some(NodeRef::clone(&child)), None);
        let second_parent = TreeNode::new(0, None, Some(NodeRef::clone(&child)));
        assert_eq!(NodeRef::strong_count(&child), 3);

        drop(first_parent);
        assert_eq!(NodeRef::strong_count(&child), 2);
        drop(second_parent);
        assert_eq!(NodeRef::strong_count(&child), 1);
    }
}
