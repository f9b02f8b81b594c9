//! Configuration parameters for the heuristic improver and instance generator.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, RoutingError};

/// Which improving 2-opt move a pass applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImprovementPolicy {
    /// Scan every edge pair and apply the largest improvement
    BestImprovement,
    /// Apply the first improving edge pair found
    FirstImprovement,
}

/// Starting tour used when the improver is not handed a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialTour {
    Greedy,
    Random,
}

/// Configuration settings for the heuristic improver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Move selection policy for 2-opt passes
    pub policy: ImprovementPolicy,
    /// Maximum number of 2-opt moves applied over the whole run
    pub max_iterations: u32,
    /// Optional soft deadline for the improver
    pub time_limit: Option<Duration>,
    /// Number of perturbation kicks tried after reaching a local optimum (0 disables)
    pub perturbation_rounds: u32,
    /// Seed for the perturbation and random initial tour
    pub seed: u64,
    /// Starting tour when none is provided
    pub initial_tour: InitialTour,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            policy: ImprovementPolicy::BestImprovement,
            max_iterations: 10_000,
            time_limit: None,
            perturbation_rounds: 50,
            seed: 42,
            initial_tour: InitialTour::Greedy,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the move selection policy.
    pub fn with_policy(mut self, policy: ImprovementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the maximum number of applied moves.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }

    /// Set the number of perturbation rounds.
    pub fn with_perturbation_rounds(mut self, rounds: u32) -> Self {
        self.perturbation_rounds = rounds;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting tour.
    pub fn with_initial_tour(mut self, initial_tour: InitialTour) -> Self {
        self.initial_tour = initial_tour;
        self
    }
}

/// Settings for synthetic instance generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Side length of the square survey area
    pub plane_size: f64,
    /// Smallest number of targets per instance
    pub min_targets: usize,
    /// Largest number of targets per instance
    pub max_targets: usize,
    /// Minimum spacing between any two generated waypoints
    pub min_separation: f64,
    /// Seed for the generator
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            plane_size: 200.0,
            min_targets: 30,
            max_targets: 35,
            min_separation: 0.01,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration with default values.
    pub fn new() -> Self {
        GeneratorConfig::default()
    }

    /// Set the side length of the survey area.
    pub fn with_plane_size(mut self, size: f64) -> Self {
        self.plane_size = size;
        self
    }

    /// Set the inclusive range of target counts.
    pub fn with_target_range(mut self, min: usize, max: usize) -> Self {
        self.min_targets = min.min(max);
        self.max_targets = max.max(min);
        self
    }

    /// Set the minimum spacing between generated waypoints.
    pub fn with_min_separation(mut self, separation: f64) -> Self {
        self.min_separation = separation;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the settings describe a non-empty area and a positive spacing.
    pub fn validate(&self) -> Result<()> {
        if !(self.plane_size.is_finite() && self.plane_size > 0.0) {
            return Err(RoutingError::InvalidConfig(format!(
                "plane size must be positive and finite, got {}",
                self.plane_size
            )));
        }
        if !(self.min_separation.is_finite() && self.min_separation > 0.0) {
            return Err(RoutingError::InvalidConfig(format!(
                "minimum separation must be positive and finite, got {}",
                self.min_separation
            )));
        }
        if self.min_targets > self.max_targets {
            return Err(RoutingError::InvalidConfig(format!(
                "target range {}..={} is empty",
                self.min_targets, self.max_targets
            )));
        }
        Ok(())
    }
}
