//! 2-Opt neighborhood: reverse the segment between two non-adjacent edges.
//!
//! Positions refer to the closed sequence `depot, tour[0], .., tour[n-1], depot`,
//! so edge `k` joins position `k` and `k + 1`. Exchanging edges `i` and `j`
//! reverses positions `i + 1..=j`, which is `tour[i..j]`.

use crate::config::ImprovementPolicy;
use crate::problem::{ProblemInstance, DEPOT_INDEX};

use super::{LocalSearch, IMPROVEMENT_EPSILON};

/// An improving edge exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptMove {
    pub i: usize,
    pub j: usize,
    pub delta: f64,
}

impl LocalSearch {
    /// Scan the neighborhood once and apply one improving move.
    ///
    /// Returns the applied cost delta, or `None` at a local optimum.
    pub fn two_opt_pass(&mut self, tour: &mut [usize], problem: &ProblemInstance) -> Option<f64> {
        let found = self.find_two_opt(tour, problem)?;
        Self::apply_two_opt(tour, found.i, found.j);
        Some(found.delta)
    }

    /// Find an improving move according to the configured policy.
    pub fn find_two_opt(&self, tour: &[usize], problem: &ProblemInstance) -> Option<TwoOptMove> {
        let n = tour.len();
        if n < 3 {
            // With fewer than three targets every reversal yields the same closed tour
            return None;
        }

        let mut best: Option<TwoOptMove> = None;

        // Edge i joins positions i and i + 1; the depot closes the sequence at
        // position n + 1, so j = n is the edge back to the depot. j starts at
        // i + 2 because adjacent edges reverse a single target.
        for i in 0..n - 1 {
            for j in i + 2..=n {
                let delta = Self::evaluate_two_opt(tour, problem, i, j);
                if delta >= -IMPROVEMENT_EPSILON {
                    continue;
                }

                // Improving move found, keep it according to the policy
                let candidate = TwoOptMove { i, j, delta };
                match self.policy {
                    ImprovementPolicy::FirstImprovement => return Some(candidate),
                    ImprovementPolicy::BestImprovement => {
                        if best.map_or(true, |b| delta < b.delta) {
                            best = Some(candidate);
                        }
                    }
                }
            }
        }

        best
    }

    /// Cost change of exchanging edges `i` and `j`.
    pub fn evaluate_two_opt(tour: &[usize], problem: &ProblemInstance, i: usize, j: usize) -> f64 {
        let a = node_at(tour, i);
        let b = node_at(tour, i + 1);
        let c = node_at(tour, j);
        let d = node_at(tour, j + 1);

        // Edges (a, b) and (c, d) are replaced by (a, c) and (b, d)
        let old_cost = problem.cost(a, b) + problem.cost(c, d);
        let new_cost = problem.cost(a, c) + problem.cost(b, d);

        new_cost - old_cost
    }

    /// Apply the exchange of edges `i` and `j`.
    pub fn apply_two_opt(tour: &mut [usize], i: usize, j: usize) {
        // Positions i + 1..=j of the closed sequence are tour[i..j]
        tour[i..j].reverse();
    }
}

/// Node index at a position of the closed sequence.
fn node_at(tour: &[usize], position: usize) -> usize {
    if position == 0 || position > tour.len() {
        DEPOT_INDEX
    } else {
        tour[position - 1]
    }
}
