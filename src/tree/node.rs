//! The immutable tree node.

use std::cmp::Ordering;

use super::{NodeError, NodeRef, SearchTreeNode, Side};

// =============================================================================
// Node Definition
// =============================================================================

/// An immutable node of a binary search tree, doubling as the subtree rooted
/// at it.
///
/// Every node holds a key, a payload (`()` for plain sets, a value for maps,
/// balancing metadata for self-balancing trees), up to two shared children
/// and the node count of its subtree, fixed at construction.
///
/// `TreeNode` does not implement `PartialEq`, `Eq`, `Hash` or `Clone`, and
/// none of them may be added. Consumers treat two handles as the same tree
/// if and only if [`TreeNode::ptr_eq`] holds; a structurally identical tree
/// built separately is a different tree.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `new`                | O(1)       |
/// | `key` / `payload`    | O(1)       |
/// | `size`               | O(1)       |
/// | `child`              | O(1)       |
/// | `satisfies_ordering` | O(1)       |
/// | `replace_child`      | O(1)       |
///
/// # Examples
///
/// ```rust
/// use persistent_bst::tree::{Side, TreeNode};
///
/// let left = TreeNode::new("b", None, None);
/// let right = TreeNode::new("d", None, None);
/// let parent = TreeNode::new("c", Some(left.clone()), Some(right));
///
/// assert_eq!(parent.size(), 3);
/// assert!(TreeNode::ptr_eq(parent.child_or_fail(Side::Left).unwrap(), &left));
/// assert!(parent.satisfies_ordering(|a: &&str, b: &&str| a.cmp(b)));
/// ```
#[derive(Debug)]
pub struct TreeNode<K, P = ()> {
    key: K,
    payload: P,
    size: usize,
    left: Option<NodeRef<Self>>,
    right: Option<NodeRef<Self>>,
}

/// Returns the size of `node`, or 0 if absent.
#[inline]
pub fn size_or_zero<N: SearchTreeNode>(node: Option<&NodeRef<N>>) -> usize {
    node.map_or(0, |node| node.size())
}

impl<K> TreeNode<K> {
    /// Creates a node without payload over the given children.
    ///
    /// The ordering invariant is not checked; callers must supply a left
    /// subtree with smaller keys and a right subtree with greater keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::tree::TreeNode;
    ///
    /// let leaf = TreeNode::new(1, None, None);
    /// assert_eq!(leaf.size(), 1);
    /// assert!(leaf.is_leaf());
    /// ```
    #[inline]
    #[must_use]
    pub fn new(
        key: K,
        left: Option<NodeRef<Self>>,
        right: Option<NodeRef<Self>>,
    ) -> NodeRef<Self> {
        Self::with_payload(key, (), left, right)
    }

    /// Creates a node without payload from a key that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingKey`] if `key` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::tree::{NodeError, TreeNode};
    ///
    /// let missing: Result<_, _> = TreeNode::<i32>::try_new(None, None, None);
    /// assert_eq!(missing.unwrap_err(), NodeError::MissingKey);
    /// ```
    #[inline]
    pub fn try_new(
        key: Option<K>,
        left: Option<NodeRef<Self>>,
        right: Option<NodeRef<Self>>,
    ) -> Result<NodeRef<Self>, NodeError> {
        Self::try_with_payload(key, (), left, right)
    }
}

impl<K, P> TreeNode<K, P> {
    /// Creates a node carrying `payload` over the given children.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::tree::{Side, TreeNode};
    ///
    /// let one = TreeNode::with_payload(1, "one", None, None);
    /// let two = TreeNode::with_payload(2, "two", Some(one), None);
    ///
    /// assert_eq!(*two.payload(), "two");
    /// assert_eq!(two.child(Side::Left).map(|node| *node.payload()), Some("one"));
    /// ```
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the subtree size overflows `usize`. That
    /// can only happen when the same subtree is reused on both sides over and
    /// over, which already breaks the ordering invariant. Release builds
    /// saturate the size at `usize::MAX`.
    #[must_use]
    pub fn with_payload(
        key: K,
        payload: P,
        left: Option<NodeRef<Self>>,
        right: Option<NodeRef<Self>>,
    ) -> NodeRef<Self> {
        let size = size_or_zero(left.as_ref())
            .checked_add(size_or_zero(right.as_ref()))
            .and_then(|children| children.checked_add(1));
        debug_assert!(size.is_some(), "tree node size overflows usize");
        let size = size.unwrap_or(usize::MAX);
        NodeRef::new(Self {
            key,
            payload,
            size,
            left,
            right,
        })
    }

    /// Creates a node carrying `payload` from a key that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingKey`] if `key` is `None`. No node is
    /// allocated in that case.
    pub fn try_with_payload(
        key: Option<K>,
        payload: P,
        left: Option<NodeRef<Self>>,
        right: Option<NodeRef<Self>>,
    ) -> Result<NodeRef<Self>, NodeError> {
        let key = key.ok_or(NodeError::MissingKey)?;
        Ok(Self::with_payload(key, payload, left, right))
    }

    /// Returns the key on which this node is ordered.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the payload carried by this node.
    #[inline]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the number of nodes in this subtree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the child on `side`, or `None` if there is no such child.
    #[inline]
    pub const fn child(&self, side: Side) -> Option<&NodeRef<Self>> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// Returns `true` if this node has a child on `side`.
    #[inline]
    pub const fn has_child(&self, side: Side) -> bool {
        self.child(side).is_some()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the child on `side`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingChild`] if there is no child on `side`.
    /// Reaching this is a bug in the caller, which should have checked
    /// [`has_child`](Self::has_child).
    #[inline]
    pub fn child_or_fail(&self, side: Side) -> Result<&NodeRef<Self>, NodeError> {
        <Self as SearchTreeNode>::child_or_fail(self, side)
    }

    /// Returns `true` if the ordering invariant holds between this node and
    /// its direct children under `compare`.
    ///
    /// Vacuously `true` for a leaf. Deeper descendants are not inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::tree::TreeNode;
    ///
    /// let bad = TreeNode::new("c", Some(TreeNode::new("z", None, None)), None);
    /// assert!(!bad.satisfies_ordering(|a: &&str, b: &&str| a.cmp(b)));
    ///
    /// // The same shape is valid under the reversed order
    /// assert!(bad.satisfies_ordering(|a: &&str, b: &&str| b.cmp(a)));
    /// ```
    #[inline]
    pub fn satisfies_ordering<F>(&self, compare: F) -> bool
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        <Self as SearchTreeNode>::satisfies_ordering(self, compare)
    }

    /// Returns `true` if `first` and `second` are the same node instance.
    #[inline]
    pub fn ptr_eq(first: &NodeRef<Self>, second: &NodeRef<Self>) -> bool {
        NodeRef::ptr_eq(first, second)
    }

    /// Returns `true` if both subtrees are absent or both are the same node
    /// instance.
    ///
    /// This is the change-detection test for persistent trees: an edit that
    /// leaves a subtree untouched keeps the very same instance.
    #[inline]
    pub fn same_subtree(first: Option<&NodeRef<Self>>, second: Option<&NodeRef<Self>>) -> bool {
        match (first, second) {
            (None, None) => true,
            (Some(first), Some(second)) => Self::ptr_eq(first, second),
            _ => false,
        }
    }
}

// =============================================================================
// Path Copying
// =============================================================================

impl<K: Clone, P: Clone> TreeNode<K, P> {
    /// Returns a new node equal to this one except that the child on `side`
    /// is `child`.
    ///
    /// The child on the other side is shared by reference. This node is left
    /// untouched; rebuilding every ancestor the same way yields a new tree
    /// version sharing all unaffected subtrees with the old one.
    #[must_use]
    pub fn replace_child(&self, side: Side, child: Option<NodeRef<Self>>) -> NodeRef<Self> {
        match side {
            Side::Left => self.replace_children(child, self.right.clone()),
            Side::Right => self.replace_children(self.left.clone(), child),
        }
    }

    /// Returns a new node with this node's key and payload over new children.
    #[must_use]
    pub fn replace_children(
        &self,
        left: Option<NodeRef<Self>>,
        right: Option<NodeRef<Self>>,
    ) -> NodeRef<Self> {
        Self::with_payload(self.key.clone(), self.payload.clone(), left, right)
    }
}

impl<K: Clone, P> TreeNode<K, P> {
    /// Returns a new node with `payload` and this node's key and children.
    #[must_use]
    pub fn replace_payload(&self, payload: P) -> NodeRef<Self> {
        Self::with_payload(
            self.key.clone(),
            payload,
            self.left.clone(),
            self.right.clone(),
        )
    }
}

impl<K, P> SearchTreeNode for TreeNode<K, P> {
    type Key = K;

    #[inline]
    fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn child(&self, side: Side) -> Option<&NodeRef<Self>> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }
}

// Identity is the only equality a node has.
static_assertions::assert_not_impl_any!(TreeNode<i32>: PartialEq, Clone, std::hash::Hash);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(TreeNode<String, Vec<u8>>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(TreeNode<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
