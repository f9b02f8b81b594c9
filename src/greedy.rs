//! Nearest-neighbour route construction.

use log::debug;

use crate::problem::{ProblemInstance, DEPOT_INDEX};
use crate::route::Route;

/// Two costs closer than this are treated as equal when choosing the next target.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Builds a single route by always flying to the nearest unvisited target.
pub struct GreedyConstructor;

impl GreedyConstructor {
    /// Construct a route for the given problem.
    pub fn construct(problem: &ProblemInstance) -> Route {
        let tour = Self::construct_tour(problem);
        let route = Route::from_tour(problem, &tour);

        debug!(
            "greedy route for '{}': {} targets, cost {:.3}",
            problem.name,
            tour.len(),
            route.cost
        );

        route
    }

    /// Construct the visiting order as target node indices.
    ///
    /// Equidistant candidates are resolved in favour of the lowest waypoint id.
    pub fn construct_tour(problem: &ProblemInstance) -> Vec<usize> {
        let n = problem.target_count();
        let mut unvisited: Vec<usize> = (1..=n).collect();
        let mut tour = Vec::with_capacity(n);
        let mut current = DEPOT_INDEX;

        while !unvisited.is_empty() {
            let nearest = unvisited
                .iter()
                .map(|&candidate| problem.cost(current, candidate))
                .fold(f64::INFINITY, f64::min);

            // Among candidates within tolerance of the true minimum, the lowest id wins
            let best_pos = unvisited
                .iter()
                .enumerate()
                .filter(|&(_, &candidate)| {
                    problem.cost(current, candidate) <= nearest + TIE_TOLERANCE
                })
                .min_by_key(|&(_, &candidate)| problem.id_of(candidate))
                .map(|(pos, _)| pos)
                .unwrap_or(0);

            current = unvisited.swap_remove(best_pos);
            tour.push(current);
        }

        tour
    }
}
