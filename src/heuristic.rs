//! Heuristic improver: 2-opt descent with seeded perturbation kicks.
//!
//! The improver starts from a feasible route, descends to a 2-opt local
//! optimum and then repeatedly kicks the incumbent and descends again,
//! keeping a kicked tour only when it is strictly cheaper. The returned
//! route never costs more than the route it started from.

use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::{Config, InitialTour};
use crate::error::Result;
use crate::greedy::GreedyConstructor;
use crate::local_search::perturbation::perturb;
use crate::local_search::{Budget, LocalSearch, IMPROVEMENT_EPSILON};
use crate::problem::ProblemInstance;
use crate::route::Route;

/// Why the improver stopped. Running out of budget is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// The returned route is a 2-opt local optimum
    LocalOptimum,
    /// The move budget ran out during a descent
    IterationBudget,
    /// The soft deadline passed during a descent
    TimeBudget,
}

impl Termination {
    /// True when the search was cut short by its budget.
    pub fn is_budget_exhausted(&self) -> bool {
        !matches!(self, Termination::LocalOptimum)
    }
}

/// The improved route together with search statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementOutcome {
    pub route: Route,
    /// Cost of the starting route
    pub initial_cost: f64,
    pub termination: Termination,
    pub moves_applied: u32,
    pub passes: u32,
    pub kicks: u32,
    pub accepted_kicks: u32,
}

impl ImprovementOutcome {
    /// Cost reduction relative to the starting route.
    pub fn improvement(&self) -> f64 {
        self.initial_cost - self.route.cost
    }
}

/// Improves routes by local search. Holds only configuration, so one
/// improver can serve any number of concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct HeuristicImprover {
    pub config: Config,
}

impl HeuristicImprover {
    /// Create a new improver with the given configuration.
    pub fn new(config: Config) -> Self {
        HeuristicImprover { config }
    }

    /// Build a starting tour according to the configuration and improve it.
    pub fn solve(&self, problem: &ProblemInstance) -> ImprovementOutcome {
        let tour = match self.config.initial_tour {
            InitialTour::Greedy => GreedyConstructor::construct_tour(problem),
            InitialTour::Random => {
                let mut tour: Vec<usize> = (1..=problem.target_count()).collect();
                let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
                tour.shuffle(&mut rng);
                tour
            }
        };

        self.improve_tour(problem, tour)
    }

    /// Improve a caller-provided route. The route must be valid for `problem`.
    pub fn improve(&self, problem: &ProblemInstance, start: &Route) -> Result<ImprovementOutcome> {
        let tour = start.to_tour(problem)?;
        Ok(self.improve_tour(problem, tour))
    }

    fn improve_tour(&self, problem: &ProblemInstance, initial: Vec<usize>) -> ImprovementOutcome {
        let started = Instant::now();
        let budget = Budget {
            max_moves: self.config.max_iterations,
            // A limit too large to represent as an instant means no deadline
            deadline: self
                .config
                .time_limit
                .and_then(|limit| started.checked_add(limit)),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut search = LocalSearch::new(self.config.policy, budget);

        // First descent from the starting tour
        let initial_cost = problem.tour_cost(&initial);
        let mut current = initial.clone();
        let mut termination = search.descend(&mut current, problem);
        let mut current_cost = problem.tour_cost(&current);

        let mut kicks = 0;
        let mut accepted_kicks = 0;

        while termination == Termination::LocalOptimum
            && kicks < self.config.perturbation_rounds
            && current.len() >= 3
        {
            // Out of budget between kicks: the incumbent is still a local optimum
            if budget.exhausted(search.moves_applied).is_some() {
                break;
            }

            let mut candidate = current.clone();
            perturb(&mut candidate, &mut rng);
            kicks += 1;

            let reason = search.descend(&mut candidate, problem);
            let candidate_cost = problem.tour_cost(&candidate);

            // Keep the kicked tour only if it is strictly cheaper than the incumbent
            if candidate_cost < current_cost - IMPROVEMENT_EPSILON {
                current = candidate;
                current_cost = candidate_cost;
                accepted_kicks += 1;
                termination = reason;
            }

            if reason.is_budget_exhausted() {
                break;
            }
        }

        // Rounding in the move deltas must never hand back a dearer route
        if current_cost > initial_cost {
            current = initial;
            current_cost = initial_cost;
        }

        debug!(
            "heuristic on '{}': {:.3} -> {:.3} ({:?}, {} moves, {} passes, {}/{} kicks kept, {:?})",
            problem.name,
            initial_cost,
            current_cost,
            termination,
            search.moves_applied,
            search.passes,
            accepted_kicks,
            kicks,
            started.elapsed()
        );

        ImprovementOutcome {
            route: Route::from_tour(problem, &current),
            initial_cost,
            termination,
            moves_applied: search.moves_applied,
            passes: search.passes,
            kicks,
            accepted_kicks,
        }
    }
}
