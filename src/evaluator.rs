//! Runs algorithms on problem instances and times them.

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::algorithm::{Algorithm, AlgorithmSelection};
use crate::config::Config;
use crate::problem::ProblemInstance;
use crate::route::Route;

/// Outcome of one algorithm run on one instance. Never modified after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Position of the instance in the batch
    pub instance_index: usize,
    pub instance_name: String,
    pub algorithm: Algorithm,
    pub route: Route,
    pub cost: f64,
    /// Wall-clock time spent inside the algorithm
    pub elapsed: Duration,
}

/// Executes algorithms against instances.
#[derive(Debug, Clone)]
pub struct Evaluator {
    pub config: Config,
    /// Fan (instance, algorithm) pairs out over the rayon pool
    pub parallel: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(Config::default())
    }
}

impl Evaluator {
    /// Create a parallel evaluator with the given heuristic configuration.
    pub fn new(config: Config) -> Self {
        Evaluator {
            config,
            parallel: true,
        }
    }

    /// Create an evaluator that runs every pair on the calling thread.
    pub fn sequential(config: Config) -> Self {
        Evaluator {
            config,
            parallel: false,
        }
    }

    /// Run a single algorithm on a single instance.
    pub fn run_one(&self, algorithm: Algorithm, problem: &ProblemInstance) -> RunResult {
        self.run_indexed(0, algorithm, problem)
    }

    /// Run every selected algorithm on every instance.
    ///
    /// Results are ordered by instance index, then by algorithm, whatever
    /// order the runs complete in.
    pub fn run_all(
        &self,
        selection: AlgorithmSelection,
        instances: &[ProblemInstance],
    ) -> Vec<RunResult> {
        let jobs: Vec<(usize, Algorithm)> = instances
            .iter()
            .enumerate()
            .flat_map(|(index, _)| selection.algorithms().iter().map(move |&a| (index, a)))
            .collect();

        info!(
            "running {} job(s): {} instance(s) with '{}'",
            jobs.len(),
            instances.len(),
            selection
        );

        let mut results: Vec<RunResult> = if self.parallel {
            jobs.par_iter()
                .map(|&(index, algorithm)| self.run_indexed(index, algorithm, &instances[index]))
                .collect()
        } else {
            jobs.iter()
                .map(|&(index, algorithm)| self.run_indexed(index, algorithm, &instances[index]))
                .collect()
        };

        results.sort_by_key(|result| (result.instance_index, result.algorithm));
        results
    }

    fn run_indexed(
        &self,
        instance_index: usize,
        algorithm: Algorithm,
        problem: &ProblemInstance,
    ) -> RunResult {
        let start_time = Instant::now();
        let route = algorithm.solve(problem, &self.config);
        let elapsed = start_time.elapsed();

        debug!(
            "{} on instance {} '{}': cost {:.3} in {:?}",
            algorithm, instance_index, problem.name, route.cost, elapsed
        );

        RunResult {
            instance_index,
            instance_name: problem.name.clone(),
            algorithm,
            cost: route.cost,
            route,
            elapsed,
        }
    }
}
