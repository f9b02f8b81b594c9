//! Pairwise travel cost between waypoints.
//!
//! Algorithms never look at coordinates directly. A [`CostModel`] is applied
//! once when a [`crate::problem::ProblemInstance`] is built, and every
//! algorithm reads the resulting cost matrix.

use crate::problem::Waypoint;

/// A deterministic, side-effect-free travel cost between two waypoints.
///
/// Implementations must be symmetric, non-negative and return zero for a
/// waypoint paired with itself.
pub trait CostModel: Send + Sync {
    /// Cost of travelling from `from` to `to`.
    fn cost(&self, from: &Waypoint, to: &Waypoint) -> f64;

    /// Short label for logs and reports.
    fn name(&self) -> &str;
}

/// Straight-line distance over the coordinate space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl CostModel for Euclidean {
    fn cost(&self, from: &Waypoint, to: &Waypoint) -> f64 {
        from.position.distance(&to.position)
    }

    fn name(&self) -> &str {
        "euclidean"
    }
}

/// Flight time at a constant cruise speed (distance units per time unit).
#[derive(Debug, Clone, Copy)]
pub struct TravelTime {
    pub speed: f64,
}

impl TravelTime {
    /// Create a travel time model. Non-positive speeds are clamped to a tiny
    /// positive value so the model stays finite.
    pub fn new(speed: f64) -> Self {
        TravelTime {
            speed: speed.max(f64::EPSILON),
        }
    }
}

impl CostModel for TravelTime {
    fn cost(&self, from: &Waypoint, to: &Waypoint) -> f64 {
        from.position.distance(&to.position) / self.speed
    }

    fn name(&self) -> &str {
        "travel-time"
    }
}

