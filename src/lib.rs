//! # UAV Routing
//!
//! Route optimization for a UAV that leaves a depot, visits every target
//! waypoint exactly once and returns.
//!
//! Two strategies are provided: a nearest-neighbour constructor that builds
//! a route in a single sweep, and a heuristic improver that refines any
//! feasible route with 2-opt local search and seeded perturbation kicks.
//! The evaluator times both on one or many instances and the comparator
//! ranks the results.
//!
//! ```
//! use uav_routing::prelude::*;
//!
//! let depot = Waypoint::new(0, Position::new(0.0, 0.0));
//! let targets = vec![
//!     Waypoint::new(1, Position::new(1.0, 0.0)),
//!     Waypoint::new(2, Position::new(1.0, 1.0)),
//!     Waypoint::new(3, Position::new(0.0, 1.0)),
//! ];
//! let problem = ProblemInstance::euclidean("square", depot, targets).unwrap();
//!
//! let summary = Comparator::default().compare(AlgorithmSelection::All, &[problem]);
//! assert_eq!(summary.comparisons.len(), 1);
//! ```

pub mod algorithm;
pub mod comparator;
pub mod config;
pub mod cost;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod greedy;
pub mod heuristic;
pub mod local_search;
pub mod problem;
pub mod route;
pub mod utils;

/// The types most callers need.
pub mod prelude {
    pub use crate::algorithm::{Algorithm, AlgorithmSelection};
    pub use crate::comparator::{Comparator, InstanceComparison, Summary};
    pub use crate::config::{Config, GeneratorConfig, ImprovementPolicy, InitialTour};
    pub use crate::cost::{CostModel, Euclidean, TravelTime};
    pub use crate::error::{InstanceError, RoutingError};
    pub use crate::evaluator::{Evaluator, RunResult};
    pub use crate::generator::InstanceGenerator;
    pub use crate::greedy::GreedyConstructor;
    pub use crate::heuristic::{HeuristicImprover, ImprovementOutcome, Termination};
    pub use crate::problem::{Position, ProblemInstance, Waypoint, WaypointId};
    pub use crate::route::Route;
}
