//! Error types for instance validation, algorithm selection and loading.

use thiserror::Error;

use crate::problem::WaypointId;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Structural problems detected while building a [`crate::problem::ProblemInstance`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    #[error("waypoint id {0} appears more than once")]
    DuplicateWaypoint(WaypointId),
    #[error("depot {0} is also listed as a target")]
    DepotListedAsTarget(WaypointId),
    #[error("waypoint {0} has a non-finite coordinate")]
    NonFiniteCoordinate(WaypointId),
    #[error("cost from {from} to {to} is negative or not a number")]
    InvalidCost { from: WaypointId, to: WaypointId },
    #[error("cost from {from} to {to} differs from the reverse direction")]
    AsymmetricCost { from: WaypointId, to: WaypointId },
    #[error("waypoints {0} and {1} are zero cost apart")]
    CoincidentWaypoints(WaypointId, WaypointId),
}

/// Errors surfaced to callers of the routing engine.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("invalid problem instance: {0}")]
    InvalidInstance(#[from] InstanceError),

    #[error("unsupported algorithm '{0}', expected one of: greedy, heuristic, all")]
    UnsupportedAlgorithm(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid route: {0}")]
    InvalidRoute(String),

    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse instance: {0}")]
    Json(#[from] serde_json::Error),
}
