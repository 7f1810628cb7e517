//! Whole-tree invariant checks.
//!
//! [`SearchTreeNode::satisfies_ordering`] only compares a node with its
//! direct children. A tree can pass that check at every node and still be
//! out of order: in `5 -> left 3 -> right 7`, both levels are locally fine
//! but `7` sits in the left subtree of `5`. The helpers here compose node
//! checks over a full walk of the tree:
//!
//! - [`check_local_ordering`]: the local predicate at every node
//! - [`check_search_order`]: every key strictly between the bounds set by its
//!   ancestors, which is the real binary search tree property
//! - [`check_sizes`]: the cached size of every node
//! - [`check_tree`]: sizes and search order together
//!
//! They are meant for tests and debug assertions in the collections built on
//! top of [`TreeNode`](super::TreeNode); each walk is O(N).
//!
//! # Examples
//!
//! ```rust
//! use persistent_bst::tree::{TreeNode, verify};
//!
//! let deep = TreeNode::new(3, None, Some(TreeNode::new(7, None, None)));
//! let root = TreeNode::new(5, Some(deep), None);
//!
//! assert!(verify::check_local_ordering(Some(&root), i32::cmp).is_ok());
//! assert!(verify::check_search_order(Some(&root), i32::cmp).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::{NodeRef, SearchTreeNode, Side, size_or_zero};

// =============================================================================
// Violation
// =============================================================================

/// A broken invariant found by one of the checks, located by the path of
/// sides leading from the root to the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeViolation {
    /// A node's direct children are out of order relative to its key.
    LocalOrdering {
        /// Path from the root to the node.
        path: Vec<Side>,
    },
    /// A node's key falls outside the bounds set by its ancestors.
    SearchOrder {
        /// Path from the root to the node.
        path: Vec<Side>,
    },
    /// A node's cached size disagrees with its children.
    Size {
        /// Path from the root to the node.
        path: Vec<Side>,
        /// The size the node reports.
        recorded: usize,
        /// One plus the sizes its children report.
        expected: usize,
    },
}

impl TreeViolation {
    /// Returns the path from the root to the offending node.
    pub fn path(&self) -> &[Side] {
        match self {
            Self::LocalOrdering { path } | Self::SearchOrder { path } | Self::Size { path, .. } => {
                path
            }
        }
    }
}

struct DisplayPath<'a>(&'a [Side]);

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return formatter.write_str("root");
        };
        write!(formatter, "{first}")?;
        for side in rest {
            write!(formatter, "/{side}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalOrdering { path } => write!(
                formatter,
                "children out of order at {}",
                DisplayPath(path)
            ),
            Self::SearchOrder { path } => write!(
                formatter,
                "key outside ancestor bounds at {}",
                DisplayPath(path)
            ),
            Self::Size {
                path,
                recorded,
                expected,
            } => write!(
                formatter,
                "size {recorded} recorded at {}, expected {expected}",
                DisplayPath(path)
            ),
        }
    }
}

impl std::error::Error for TreeViolation {}

fn report(violation: TreeViolation) -> Result<(), TreeViolation> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        path = %DisplayPath(violation.path()),
        %violation,
        "tree invariant violated"
    );
    Err(violation)
}

fn child_path(path: &[Side], side: Side) -> Vec<Side> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(side);
    extended
}

// =============================================================================
// Checks
// =============================================================================

/// Applies [`SearchTreeNode::satisfies_ordering`] to every node of the tree.
///
/// Passing this check does not make the tree a valid binary search tree;
/// use [`check_search_order`] for that.
///
/// # Errors
///
/// Returns [`TreeViolation::LocalOrdering`] for the first failing node in
/// pre-order.
pub fn check_local_ordering<N, F>(
    root: Option<&NodeRef<N>>,
    mut compare: F,
) -> Result<(), TreeViolation>
where
    N: SearchTreeNode,
    F: FnMut(&N::Key, &N::Key) -> Ordering,
{
    let mut pending: Vec<(&NodeRef<N>, Vec<Side>)> =
        root.map(|node| (node, Vec::new())).into_iter().collect();

    while let Some((node, path)) = pending.pop() {
        if !node.satisfies_ordering(&mut compare) {
            return report(TreeViolation::LocalOrdering { path });
        }
        for side in [Side::Right, Side::Left] {
            if let Some(child) = node.child(side) {
                pending.push((child, child_path(&path, side)));
            }
        }
    }
    Ok(())
}

/// Checks that every key lies strictly between the keys of the ancestors it
/// descends left and right from.
///
/// # Errors
///
/// Returns [`TreeViolation::SearchOrder`] for the first out-of-bounds node in
/// pre-order.
pub fn check_search_order<N, F>(
    root: Option<&NodeRef<N>>,
    mut compare: F,
) -> Result<(), TreeViolation>
where
    N: SearchTreeNode,
    F: FnMut(&N::Key, &N::Key) -> Ordering,
{
    struct Frame<'a, N: SearchTreeNode> {
        node: &'a NodeRef<N>,
        path: Vec<Side>,
        lower: Option<&'a N::Key>,
        upper: Option<&'a N::Key>,
    }

    let mut pending: Vec<Frame<'_, N>> = root
        .map(|node| Frame {
            node,
            path: Vec::new(),
            lower: None,
            upper: None,
        })
        .into_iter()
        .collect();

    while let Some(frame) = pending.pop() {
        let key = frame.node.key();
        let above_lower = frame
            .lower
            .is_none_or(|lower| compare(key, lower) == Ordering::Greater);
        let below_upper = frame
            .upper
            .is_none_or(|upper| compare(key, upper) == Ordering::Less);
        if !(above_lower && below_upper) {
            return report(TreeViolation::SearchOrder { path: frame.path });
        }

        if let Some(right) = frame.node.child(Side::Right) {
            pending.push(Frame {
                node: right,
                path: child_path(&frame.path, Side::Right),
                lower: Some(key),
                upper: frame.upper,
            });
        }
        if let Some(left) = frame.node.child(Side::Left) {
            pending.push(Frame {
                node: left,
                path: child_path(&frame.path, Side::Left),
                lower: frame.lower,
                upper: Some(key),
            });
        }
    }
    Ok(())
}

/// Checks that every node's size is one more than the sizes of its children.
///
/// Always holds for [`TreeNode`](super::TreeNode); useful for other
/// [`SearchTreeNode`] implementations.
///
/// # Errors
///
/// Returns [`TreeViolation::Size`] for the first mismatching node in
/// pre-order.
pub fn check_sizes<N: SearchTreeNode>(root: Option<&NodeRef<N>>) -> Result<(), TreeViolation> {
    let mut pending: Vec<(&NodeRef<N>, Vec<Side>)> =
        root.map(|node| (node, Vec::new())).into_iter().collect();

    while let Some((node, path)) = pending.pop() {
        let expected =
            1 + size_or_zero(node.child(Side::Left)) + size_or_zero(node.child(Side::Right));
        if node.size() != expected {
            return report(TreeViolation::Size {
                path,
                recorded: node.size(),
                expected,
            });
        }
        for side in [Side::Right, Side::Left] {
            if let Some(child) = node.child(side) {
                pending.push((child, child_path(&path, side)));
            }
        }
    }
    Ok(())
}

/// Runs [`check_sizes`] and then [`check_search_order`].
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_tree<N, F>(root: Option<&NodeRef<N>>, compare: F) -> Result<(), TreeViolation>
where
    N: SearchTreeNode,
    F: FnMut(&N::Key, &N::Key) -> Ordering,
{
    check_sizes(root)?;
    check_search_order(root, compare)
}
