//! Error types for tree node construction and navigation.

use super::Side;

/// Represents errors raised by the fallible [`TreeNode`](super::TreeNode)
/// constructors and accessors.
///
/// Both variants signal a caller contract violation rather than a transient
/// condition. There is nothing to retry.
///
/// # Examples
///
/// ```rust
/// use persistent_bst::tree::{NodeError, Side};
///
/// let error = NodeError::MissingChild { side: Side::Left };
/// assert_eq!(
///     format!("{}", error),
///     "illegal state: tree node has no left child"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// A node was constructed without a key (invalid argument).
    MissingKey,
    /// A child was requested on a side where the node has none (illegal state).
    MissingChild {
        /// The side that was requested.
        side: Side,
    },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey => {
                write!(formatter, "invalid argument: tree node key must be present")
            }
            Self::MissingChild { side } => {
                write!(formatter, "illegal state: tree node has no {side} child")
            }
        }
    }
}

impl std::error::Error for NodeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_missing_key_display() {
        assert_eq!(
            NodeError::MissingKey.to_string(),
            "invalid argument: tree node key must be present"
        );
    }

    #[rstest]
    #[case(Side::Left, "illegal state: tree node has no left child")]
    #[case(Side::Right, "illegal state: tree node has no right child")]
    fn test_missing_child_display(#[case] side: Side, #[case] expected: &str) {
        assert_eq!(NodeError::MissingChild { side }.to_string(), expected);
    }

    #[rstest]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(NodeError::MissingKey);
        assert!(error.source().is_none());
    }
}
