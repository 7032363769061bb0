//! MST double-tree 2-approximation.
//!
//! Builds a minimum spanning tree with Prim's algorithm, then extracts a
//! closed tour from the tree's preorder traversal. Walking the tree depth
//! first uses each tree edge at most twice, so the tour costs no more than
//! twice the tree's weight; since any optimal tour minus one edge is itself
//! a spanning tree, on matrices satisfying the triangle inequality the
//! result is within 2× of the optimal tour cost.
//!
//! No pruning and no parallelism: a single O(N³) pass dominated by the
//! tree construction.
//!
//! # References
//!
//! - Prim (1957), "Shortest Connection Networks and Some Generalizations"
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"

mod prim;
mod runner;
mod tour;

pub use prim::{minimum_spanning_tree, SpanningTree};
pub use runner::ApproxRunner;
pub use tour::preorder_tour;
