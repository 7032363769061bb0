//! Approximate solve: tree construction composed with tour extraction.

use super::prim::minimum_spanning_tree;
use super::tour::preorder_tour;
use crate::matrix::DistanceMatrix;
use crate::solution::{tour_cost, SearchResult};

/// Executes the MST double-tree approximation.
pub struct ApproxRunner;

impl ApproxRunner {
    /// Returns a closed tour whose cost never undercuts the optimum and,
    /// on matrices satisfying the triangle inequality, stays within 2× of
    /// it.
    pub fn run(matrix: &DistanceMatrix) -> SearchResult {
        let tree = minimum_spanning_tree(matrix);
        let tour = preorder_tour(&tree);
        let cost = tour_cost(matrix, &tour);
        SearchResult { cost, tour }
    }
}
