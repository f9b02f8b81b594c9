//! Route representation: a closed tour from the depot through every target and back.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, RoutingError};
use crate::problem::{ProblemInstance, WaypointId, DEPOT_INDEX};

/// An ordered sequence of waypoint ids starting and ending at the depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Waypoint ids, depot at both ends
    pub waypoints: Vec<WaypointId>,
    /// Sum of consecutive pairwise costs
    pub cost: f64,
}

impl Route {
    /// Build a route from target node indices (depot excluded).
    pub fn from_tour(problem: &ProblemInstance, tour: &[usize]) -> Self {
        let depot_id = problem.depot().id;
        let mut waypoints = Vec::with_capacity(tour.len() + 2);

        waypoints.push(depot_id);
        waypoints.extend(tour.iter().map(|&index| problem.id_of(index)));
        waypoints.push(depot_id);

        Route {
            waypoints,
            cost: problem.tour_cost(tour),
        }
    }

    /// Build a route from an explicit id sequence, validating it against `problem`.
    pub fn from_ids(problem: &ProblemInstance, waypoints: Vec<WaypointId>) -> Result<Self> {
        let mut route = Route {
            waypoints,
            cost: 0.0,
        };
        let tour = route.to_tour(problem)?;
        route.cost = problem.tour_cost(&tour);
        Ok(route)
    }

    /// The depot-to-depot route of an instance without targets.
    pub fn trivial(problem: &ProblemInstance) -> Self {
        Self::from_tour(problem, &[])
    }

    /// Convert back into target node indices, checking every route invariant.
    pub fn to_tour(&self, problem: &ProblemInstance) -> Result<Vec<usize>> {
        let expected_len = problem.target_count() + 2;
        if self.waypoints.len() != expected_len {
            return Err(RoutingError::InvalidRoute(format!(
                "expected {} stops, found {}",
                expected_len,
                self.waypoints.len()
            )));
        }

        let depot_id = problem.depot().id;
        let (first, last) = (self.waypoints[0], self.waypoints[expected_len - 1]);
        if first != depot_id || last != depot_id {
            return Err(RoutingError::InvalidRoute(format!(
                "route must start and end at depot {}, found {} .. {}",
                depot_id, first, last
            )));
        }

        let mut seen = HashSet::with_capacity(problem.target_count());
        let mut tour = Vec::with_capacity(problem.target_count());

        for &id in &self.waypoints[1..expected_len - 1] {
            let index = match problem.index_of(id) {
                Some(DEPOT_INDEX) => {
                    return Err(RoutingError::InvalidRoute(format!(
                        "depot {} visited in the middle of the route",
                        id
                    )))
                }
                Some(index) => index,
                None => {
                    return Err(RoutingError::InvalidRoute(format!(
                        "unknown waypoint {}",
                        id
                    )))
                }
            };
            if !seen.insert(id) {
                return Err(RoutingError::InvalidRoute(format!(
                    "waypoint {} visited twice",
                    id
                )));
            }
            tour.push(index);
        }

        Ok(tour)
    }

    /// Check the route against the instance it claims to solve.
    pub fn validate(&self, problem: &ProblemInstance) -> Result<()> {
        self.to_tour(problem).map(|_| ())
    }

    /// Interior ids, without the depot at either end.
    pub fn target_ids(&self) -> &[WaypointId] {
        match self.waypoints.len() {
            0..=2 => &[],
            n => &self.waypoints[1..n - 1],
        }
    }

    /// Number of stops, including the depot twice.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// True for a route with no stops at all.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.waypoints.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, " (cost: {:.2})", self.cost)
    }
}
