//! Benchmark for TreeNode construction, path copying and verification.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use persistent_bst::tree::{NodeRef, Side, TreeNode, verify};

fn balanced(keys: &[u64]) -> Option<NodeRef<TreeNode<u64>>> {
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

/// Rebuilds the path to the rightmost node with a new rightmost leaf.
fn append_rightmost(node: &NodeRef<TreeNode<u64>>, key: u64) -> NodeRef<TreeNode<u64>> {
    let replacement = match node.child(Side::Right) {
        Some(right) => append_rightmost(right, key),
        None => TreeNode::new(key, None, None),
    };
    node.replace_child(Side::Right, Some(replacement))
}

// =============================================================================
// build Benchmark
// =============================================================================

fn benchmark_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("build");

    for size in [100u64, 1000, 10000] {
        let keys: Vec<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("balanced", size), &keys, |bencher, keys| {
            bencher.iter(|| black_box(balanced(black_box(keys))));
        });
    }

    group.finish();
}

// =============================================================================
// path copy Benchmark
// =============================================================================

fn benchmark_path_copy(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("path_copy");

    for size in [100u64, 1000, 10000] {
        let keys: Vec<u64> = (0..size).collect();
        let Some(root) = balanced(&keys) else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::new("append_rightmost", size),
            &root,
            |bencher, root| {
                bencher.iter(|| black_box(append_rightmost(root, black_box(size))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// verify Benchmark
// =============================================================================

fn benchmark_verify(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("verify");

    for size in [100u64, 1000, 10000] {
        let keys: Vec<u64> = (0..size).collect();
        let root = balanced(&keys);
        group.bench_with_input(BenchmarkId::new("check_tree", size), &root, |bencher, root| {
            bencher.iter(|| black_box(verify::check_tree(root.as_ref(), u64::cmp)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_build,
    benchmark_path_copy,
    benchmark_verify
);
criterion_main!(benches);
