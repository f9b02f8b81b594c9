//! Local search operators for the heuristic improver.

pub mod perturbation;
pub mod two_opt;

use log::trace;
use std::time::Instant;

use crate::config::ImprovementPolicy;
use crate::heuristic::Termination;
use crate::problem::ProblemInstance;

/// A move must lower the tour cost by more than this to be applied.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Shared stopping budget for one improver run.
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    /// Maximum number of moves applied
    pub max_moves: u32,
    /// Soft deadline, checked between moves
    pub deadline: Option<Instant>,
}

impl Budget {
    /// A budget that only limits the number of moves.
    pub fn moves(max_moves: u32) -> Self {
        Budget {
            max_moves,
            deadline: None,
        }
    }

    /// Returns why the search must stop, if it must.
    pub fn exhausted(&self, moves_applied: u32) -> Option<Termination> {
        if moves_applied >= self.max_moves {
            return Some(Termination::IterationBudget);
        }

        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Some(Termination::TimeBudget);
            }
        }

        None
    }
}

/// Runs 2-opt passes over a tour until no improving move remains or the budget runs out.
///
/// A tour is the sequence of target node indices; the depot is implied at both ends.
pub struct LocalSearch {
    pub policy: ImprovementPolicy,
    pub budget: Budget,
    /// Moves applied so far, shared across every call to [`LocalSearch::descend`]
    pub moves_applied: u32,
    /// Full passes scanned so far
    pub passes: u32,
}

impl LocalSearch {
    /// Create a new local search instance.
    pub fn new(policy: ImprovementPolicy, budget: Budget) -> Self {
        LocalSearch {
            policy,
            budget,
            moves_applied: 0,
            passes: 0,
        }
    }

    /// Improve `tour` in place and report how the descent ended.
    pub fn descend(&mut self, tour: &mut [usize], problem: &ProblemInstance) -> Termination {
        loop {
            // Budget is checked between passes, never inside one
            if let Some(reason) = self.budget.exhausted(self.moves_applied) {
                return reason;
            }

            // One improving move per pass; no move means a local optimum
            self.passes += 1;
            match self.two_opt_pass(tour, problem) {
                Some(delta) => {
                    self.moves_applied += 1;
                    trace!("2-opt move {} (delta {:.6})", self.moves_applied, delta);
                }
                None => return Termination::LocalOptimum,
            }
        }
    }

    /// True if no single 2-opt move improves `tour`.
    pub fn is_local_optimum(tour: &[usize], problem: &ProblemInstance) -> bool {
        let scan = LocalSearch::new(ImprovementPolicy::FirstImprovement, Budget::moves(1));
        scan.find_two_opt(tour, problem).is_none()
    }
}
