//! Ranks algorithm results per instance and aggregates them over a batch.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::algorithm::{Algorithm, AlgorithmSelection};
use crate::error::Result;
use crate::evaluator::{Evaluator, RunResult};
use crate::problem::ProblemInstance;

/// Costs closer than this are considered a tie and resolved by elapsed time.
pub const COST_TIE_TOLERANCE: f64 = 1e-9;

/// All results for one instance and the algorithm that did best on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceComparison {
    pub instance_index: usize,
    pub instance_name: String,
    /// Results ordered by algorithm
    pub results: Vec<RunResult>,
    pub winner: Algorithm,
}

impl InstanceComparison {
    /// The winning result.
    pub fn winning_result(&self) -> Option<&RunResult> {
        self.results.iter().find(|r| r.algorithm == self.winner)
    }
}

/// Batch averages for one algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub runs: usize,
    pub wins: usize,
    pub average_cost: f64,
    pub average_time: Duration,
}

/// Comparison of a whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub comparisons: Vec<InstanceComparison>,
    pub algorithms: Vec<AlgorithmSummary>,
}

impl Summary {
    /// Build a summary from results in any order.
    pub fn from_results(results: &[RunResult]) -> Self {
        let mut by_instance: BTreeMap<usize, Vec<RunResult>> = BTreeMap::new();
        let mut by_algorithm: BTreeMap<Algorithm, Vec<&RunResult>> = BTreeMap::new();

        for result in results {
            by_instance
                .entry(result.instance_index)
                .or_default()
                .push(result.clone());
            by_algorithm.entry(result.algorithm).or_default().push(result);
        }

        let comparisons: Vec<InstanceComparison> = by_instance
            .into_iter()
            .filter_map(|(instance_index, mut runs)| {
                runs.sort_by_key(|r| r.algorithm);
                let winner = runs.iter().min_by(|a, b| rank(a, b))?.algorithm;
                Some(InstanceComparison {
                    instance_index,
                    instance_name: runs[0].instance_name.clone(),
                    results: runs,
                    winner,
                })
            })
            .collect();

        let algorithms = by_algorithm
            .into_iter()
            .map(|(algorithm, runs)| {
                let count = runs.len();
                let total_cost: f64 = runs.iter().map(|r| r.cost).sum();
                let total_time: Duration = runs.iter().map(|r| r.elapsed).sum();
                AlgorithmSummary {
                    algorithm,
                    runs: count,
                    wins: comparisons.iter().filter(|c| c.winner == algorithm).count(),
                    average_cost: total_cost / count as f64,
                    average_time: total_time / count as u32,
                }
            })
            .collect();

        Summary {
            comparisons,
            algorithms,
        }
    }

    /// Batch averages for a specific algorithm.
    pub fn algorithm(&self, algorithm: Algorithm) -> Option<&AlgorithmSummary> {
        self.algorithms.iter().find(|s| s.algorithm == algorithm)
    }

    /// The algorithm with the most wins, ties broken by lower average cost.
    pub fn overall_winner(&self) -> Option<Algorithm> {
        self.algorithms
            .iter()
            .max_by(|a, b| {
                a.wins.cmp(&b.wins).then_with(|| {
                    b.average_cost
                        .partial_cmp(&a.average_cost)
                        .unwrap_or(Ordering::Equal)
                })
            })
            .map(|s| s.algorithm)
    }
}

/// Orders results best first: lower cost, then lower elapsed time, then algorithm.
pub fn rank(a: &RunResult, b: &RunResult) -> Ordering {
    if (a.cost - b.cost).abs() > COST_TIE_TOLERANCE {
        return a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal);
    }

    a.elapsed
        .cmp(&b.elapsed)
        .then_with(|| a.algorithm.cmp(&b.algorithm))
}

/// Runs a selection over a batch and ranks the outcome.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    pub evaluator: Evaluator,
}

impl Comparator {
    /// Create a comparator around an evaluator.
    pub fn new(evaluator: Evaluator) -> Self {
        Comparator { evaluator }
    }

    /// Run the selected algorithms on every instance and summarize.
    pub fn compare(&self, selection: AlgorithmSelection, instances: &[ProblemInstance]) -> Summary {
        let results = self.evaluator.run_all(selection, instances);
        Summary::from_results(&results)
    }

    /// Same as [`Comparator::compare`], for a selection given by name.
    pub fn compare_named(&self, selection: &str, instances: &[ProblemInstance]) -> Result<Summary> {
        let selection: AlgorithmSelection = selection.parse()?;
        Ok(self.compare(selection, instances))
    }
}
