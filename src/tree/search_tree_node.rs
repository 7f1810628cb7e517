//! The trait that tree algorithms program against.

use std::cmp::Ordering;

use super::{NodeError, NodeRef, Side};

/// An immutable node of a binary search tree.
///
/// Implementors are the concrete node type itself: [`child`](Self::child)
/// hands back `NodeRef<Self>`, so a node type carrying extra data keeps its
/// own type while a collaborator walks the tree.
///
/// Implementations must uphold:
///
/// - the key, size and children never change after construction
/// - `size() == 1 + size(left) + size(right)`, counting an absent child as 0
/// - two handles denote the same tree if and only if they share an
///   allocation; never derive structural equality for a node type
///
/// The ordering invariant is a caller obligation. [`satisfies_ordering`]
/// verifies it locally against a comparator supplied per call.
///
/// [`satisfies_ordering`]: Self::satisfies_ordering
pub trait SearchTreeNode: Sized {
    /// The key on which the tree is ordered.
    type Key;

    /// Returns the key of this node.
    fn key(&self) -> &Self::Key;

    /// Returns the number of nodes in the subtree rooted here, including
    /// this node.
    fn size(&self) -> usize;

    /// Returns the child on `side`, or `None` if there is no such child.
    fn child(&self, side: Side) -> Option<&NodeRef<Self>>;

    /// Returns `true` if this node has a child on `side`.
    #[inline]
    fn has_child(&self, side: Side) -> bool {
        self.child(side).is_some()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    fn is_leaf(&self) -> bool {
        !self.has_child(Side::Left) && !self.has_child(Side::Right)
    }

    /// Returns the child on `side`.
    ///
    /// Intended for call sites that already know the child exists.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingChild`] if there is no child on `side`.
    #[inline]
    fn child_or_fail(&self, side: Side) -> Result<&NodeRef<Self>, NodeError> {
        self.child(side).ok_or(NodeError::MissingChild { side })
    }

    /// Returns `true` if the binary search tree ordering invariant holds
    /// locally under `compare`.
    ///
    /// The left child's key must compare `Less` than this key and the right
    /// child's key `Greater`. Grandchildren are not inspected; see
    /// [`verify`](super::verify) for whole-tree checks.
    fn satisfies_ordering<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&Self::Key, &Self::Key) -> Ordering,
    {
        let left_holds = self
            .child(Side::Left)
            .is_none_or(|left| compare(left.key(), self.key()) == Ordering::Less);
        let right_holds = self
            .child(Side::Right)
            .is_none_or(|right| compare(right.key(), self.key()) == Ordering::Greater);
        left_holds && right_holds
    }
}
