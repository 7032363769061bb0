//! Exact and 2-approximate solvers for the symmetric Travelling Salesman
//! Problem on small complete graphs.
//!
//! Provides two solver families over a shared distance-matrix abstraction:
//!
//! - **Brute force (BF)**: exhaustive search over visiting orders with
//!   branch-and-bound pruning, in a sequential variant and a
//!   work-partitioned parallel variant that splits the permutation space
//!   across independent sub-searches and reduces to the global minimum.
//! - **MST double-tree (approx)**: a 2-approximation that builds a minimum
//!   spanning tree with Prim's algorithm and extracts a closed tour from its
//!   preorder traversal.
//!
//! # Architecture
//!
//! [`matrix::DistanceMatrix`] is the read-only foundation every solver
//! borrows; [`solution`] holds the tour representation and cost accounting
//! shared by all entry points. The solvers themselves are pure functions of
//! the matrix: no I/O, no shared mutable state, no side effects beyond the
//! returned [`solution::SearchResult`]. Parallelism appears in exactly one
//! place, the partitioned exact search, which uses rayon with a join
//! barrier followed by a deterministic reduction.
//!
//! Problem data, timing, and command-line selection of solver/problem
//! combinations are deliberately left to consumers; this crate contains the
//! algorithm engines only.
//!
//! # Intended scale
//!
//! Exact search is factorial in the node count and meant for graphs in the
//! low tens of nodes; the approximation runs in O(N³) and scales well past
//! that. Edge costs are non-negative integers; cost accumulation is
//! unchecked, so adversarially large costs are outside the supported range.

pub mod approx;
pub mod bf;
pub mod matrix;
pub mod solution;
