//! Exact search execution: sequential scan and partitioned fan-out.

use rayon::prelude::*;

use super::permute::next_permutation;
use crate::matrix::DistanceMatrix;
use crate::solution::SearchResult;

/// Executes the exact brute-force search.
pub struct BfRunner;

impl BfRunner {
    /// Exhaustive sequential search over all closed tours starting at
    /// node 0.
    ///
    /// When `second` is set, only orderings whose second stop equals it are
    /// considered; this is the partitioning hook used by
    /// [`run_parallel`](Self::run_parallel). Callers must pass a value in
    /// `1..n`.
    ///
    /// Ties on cost keep the first ordering found, in lexicographic
    /// enumeration order. With `second` unset, both traversal directions of
    /// each cycle are enumerated; for a symmetric matrix this is duplicate
    /// work by a constant factor, accepted for the single-threaded path.
    ///
    /// # Panics
    /// Panics if `second` is outside `1..n`.
    pub fn run_sequential(matrix: &DistanceMatrix, second: Option<usize>) -> SearchResult {
        let n = matrix.n();
        if let Some(s) = second {
            assert!((1..n).contains(&s), "pinned second stop {s} out of range 1..{n}");
        }
        if n == 1 {
            return SearchResult {
                cost: 0,
                tour: vec![0, 0],
            };
        }

        // Visiting-order scaffold: fixed prefix, free stops in ascending
        // order, closing 0. Only the free region is permuted.
        let mut order = Vec::with_capacity(n + 1);
        order.push(0);
        if let Some(s) = second {
            order.push(s);
        }
        order.extend((1..n).filter(|&v| Some(v) != second));
        order.push(0);
        let fixed = 1 + second.is_some() as usize;

        let mut best_cost = u64::MAX;
        let mut best_tour = Vec::new();
        loop {
            // Accumulate edge costs in visitation order, abandoning the
            // candidate as soon as it can no longer beat the incumbent.
            let mut cost = 0u64;
            let mut pruned = false;
            for i in 1..order.len() {
                cost += matrix.cost(order[i], order[i - 1]);
                if cost >= best_cost {
                    pruned = true;
                    break;
                }
            }
            if !pruned {
                best_cost = cost;
                best_tour.clear();
                best_tour.extend_from_slice(&order);
            }

            if !next_permutation(&mut order[fixed..n]) {
                break;
            }
        }

        SearchResult {
            cost: best_cost,
            tour: best_tour,
        }
    }

    /// Exhaustive parallel search: one independent sequential sub-search per
    /// pinned second stop in `1..n`, joined and reduced to the cheapest
    /// result.
    ///
    /// The sub-searches share the borrowed matrix read-only and each write
    /// their own result slot; the collect below is the join barrier. The
    /// reduction scans slots in second-stop order, so cost ties resolve
    /// toward the lowest second stop.
    pub fn run_parallel(matrix: &DistanceMatrix) -> SearchResult {
        let n = matrix.n();
        if n <= 2 {
            // A single feasible cycle and nothing to partition on.
            return Self::run_sequential(matrix, None);
        }

        let mut results: Vec<SearchResult> = (1..n)
            .into_par_iter()
            .map(|second| Self::run_sequential(matrix, Some(second)))
            .collect();

        let mut best = 0;
        for i in 1..results.len() {
            if results[i].cost < results[best].cost {
                best = i;
            }
        }
        results.swap_remove(best)
    }
}
