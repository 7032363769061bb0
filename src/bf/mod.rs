//! Exact brute-force search with branch-and-bound pruning.
//!
//! Enumerates closed tours as permutations of the nodes behind a fixed
//! prefix. Node 0 is pinned as the universal start: every cycle can be
//! rotated to begin at 0 without changing its cost, so pinning it removes
//! the N-fold rotational duplicates from the search space. A candidate is
//! abandoned the moment its running partial cost meets the best complete
//! cost seen so far, which skips the tail of most orderings.
//!
//! The parallel variant additionally pins the tour's *second* stop: for
//! each v in {1..N-1} it runs an independent sequential search restricted
//! to orderings beginning `0, v, ...`. The N-1 partitions are disjoint and
//! together cover every ordering rooted at 0, so joining them and keeping
//! the cheapest result is an exhaustive search.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the
//!   Traveling Salesman Problem"

mod permute;
mod runner;

pub use runner::BfRunner;
