//! Algorithm identifiers and the selection requested by a caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::error::RoutingError;
use crate::greedy::GreedyConstructor;
use crate::heuristic::HeuristicImprover;
use crate::problem::ProblemInstance;
use crate::route::Route;

/// A route construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Greedy,
    Heuristic,
}

impl Algorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Greedy, Algorithm::Heuristic];

    /// Short tag used in reports.
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Heuristic => "heuristic",
        }
    }

    /// Run the algorithm. Neither strategy keeps state between calls.
    pub fn solve(&self, problem: &ProblemInstance, config: &Config) -> Route {
        match self {
            Algorithm::Greedy => GreedyConstructor::construct(problem),
            Algorithm::Heuristic => HeuristicImprover::new(config.clone()).solve(problem).route,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Which algorithms a run should execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmSelection {
    Greedy,
    Heuristic,
    #[default]
    All,
}

impl AlgorithmSelection {
    /// The algorithms covered by this selection.
    pub fn algorithms(&self) -> &'static [Algorithm] {
        match self {
            AlgorithmSelection::Greedy => &[Algorithm::Greedy],
            AlgorithmSelection::Heuristic => &[Algorithm::Heuristic],
            AlgorithmSelection::All => &Algorithm::ALL,
        }
    }
}

impl From<Algorithm> for AlgorithmSelection {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Greedy => AlgorithmSelection::Greedy,
            Algorithm::Heuristic => AlgorithmSelection::Heuristic,
        }
    }
}

impl FromStr for AlgorithmSelection {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(AlgorithmSelection::Greedy),
            "heuristic" => Ok(AlgorithmSelection::Heuristic),
            "all" => Ok(AlgorithmSelection::All),
            _ => Err(RoutingError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmSelection::Greedy => f.write_str("greedy"),
            AlgorithmSelection::Heuristic => f.write_str("heuristic"),
            AlgorithmSelection::All => f.write_str("all"),
        }
    }
}
