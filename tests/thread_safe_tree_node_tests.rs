//! Integration tests for sharing trees across threads.
//!
//! These tests verify that nodes built with the `arc` feature can be read
//! and extended from multiple threads while every version keeps sharing the
//! untouched subtrees.

#![cfg(feature = "arc")]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use persistent_bst::tree::{NodeRef, Side, TreeNode, verify};
use rstest::rstest;
use std::thread;

fn balanced(keys: &[i32]) -> Option<NodeRef<TreeNode<i32>>> {
    if keys.is_empty() {
        return None;
    }
    let middle = keys.len() / 2;
    Some(TreeNode::new(
        keys[middle],
        balanced(&keys[..middle]),
        balanced(&keys[middle + 1..]),
    ))
}

#[rstest]
fn test_cross_thread_readers_see_same_tree() {
    let keys: Vec<i32> = (0..127).collect();
    let root = balanced(&keys).expect("non-empty keys");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = NodeRef::clone(&root);
            thread::spawn(move || {
                assert_eq!(shared.size(), 127);
                assert!(verify::check_tree(Some(&shared), i32::cmp).is_ok());
                NodeRef::clone(shared.child_or_fail(Side::Left).expect("left subtree"))
            })
        })
        .collect();

    for handle in handles {
        let left = handle.join().expect("Thread panicked");
        assert!(TreeNode::ptr_eq(&left, root.child(Side::Left).expect("left subtree")));
    }
}

#[rstest]
fn test_cross_thread_structural_sharing() {
    let keys: Vec<i32> = (0..63).map(|key| key * 10).collect();
    let root = balanced(&keys).expect("non-empty keys");

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let shared = NodeRef::clone(&root);
            thread::spawn(move || {
                // Each thread replaces the right subtree of the root
                let replacement = TreeNode::new(1000 + index, None, None);
                let version = shared.replace_child(Side::Right, Some(replacement));
                assert_eq!(version.size(), shared.size() - 31 + 1);
                version
            })
        })
        .collect();

    let versions: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for (index, version) in versions.iter().enumerate() {
        assert!(TreeNode::same_subtree(
            version.child(Side::Left),
            root.child(Side::Left)
        ));
        assert_eq!(
            version.child(Side::Right).map(|node| *node.key()),
            Some(1000 + index as i32)
        );
    }

    // Original is unchanged
    assert_eq!(root.size(), 63);
    assert!(verify::check_tree(Some(&root), i32::cmp).is_ok());
}
