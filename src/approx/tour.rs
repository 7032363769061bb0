//! Closed-tour extraction from a spanning tree.

use super::prim::SpanningTree;
use crate::solution::Tour;

/// Extracts a closed tour from the tree's preorder traversal.
///
/// Walks the tree depth first from node 0 with an explicit stack, so the
/// traversal depth is bounded by the node count rather than the call
/// stack. Children are visited lowest index first, making the tour
/// deterministic for a given tree. Each node is appended the first time it
/// is reached and a final 0 closes the cycle.
pub fn preorder_tour(tree: &SpanningTree) -> Tour {
    let n = tree.n();
    let mut tour = Vec::with_capacity(n + 1);
    let mut seen = vec![false; n];
    let mut stack = vec![0usize];

    while let Some(node) = stack.pop() {
        if seen[node] {
            // A tree never leads back to a visited node; guard kept so a
            // malformed input degrades to a skipped stop.
            continue;
        }
        seen[node] = true;
        tour.push(node);

        // Push high to low so the lowest-indexed child is popped first.
        for child in (0..n).rev() {
            if tree.edge(node, child) != 0 && !seen[child] {
                stack.push(child);
            }
        }
    }

    tour.push(0);
    tour
}
