//! Unit tests for the 2-opt neighborhood, budgets and perturbation kicks.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uav_routing::config::{GeneratorConfig, ImprovementPolicy};
use uav_routing::generator::InstanceGenerator;
use uav_routing::heuristic::Termination;
use uav_routing::local_search::perturbation::{double_bridge, perturb, reverse_random_segment};
use uav_routing::local_search::{Budget, LocalSearch};
use uav_routing::problem::{Position, ProblemInstance, Waypoint};

fn wp(id: u32, x: f64, y: f64) -> Waypoint {
    Waypoint::new(id, Position::new(x, y))
}

/// Depot at the origin and the three other corners of a 10x10 square.
fn create_square_problem() -> ProblemInstance {
    ProblemInstance::euclidean(
        "square",
        wp(0, 0.0, 0.0),
        vec![wp(1, 0.0, 10.0), wp(2, 10.0, 0.0), wp(3, 10.0, 10.0)],
    )
    .unwrap()
}

fn sorted(tour: &[usize]) -> Vec<usize> {
    let mut copy = tour.to_vec();
    copy.sort_unstable();
    copy
}

#[test]
fn test_evaluate_two_opt_matches_recomputed_cost() {
    let problem = create_square_problem();
    let tour = vec![1, 2, 3];

    let delta = LocalSearch::evaluate_two_opt(&tour, &problem, 1, 3);
    let mut moved = tour.clone();
    LocalSearch::apply_two_opt(&mut moved, 1, 3);

    assert_eq!(moved, vec![1, 3, 2]);
    assert!((delta - (20.0 - 2.0 * 200f64.sqrt())).abs() < 1e-9);
    assert!((problem.tour_cost(&moved) - problem.tour_cost(&tour) - delta).abs() < 1e-9);
}

#[test]
fn test_descend_removes_crossing() {
    let problem = create_square_problem();

    for policy in [ImprovementPolicy::BestImprovement, ImprovementPolicy::FirstImprovement] {
        let mut tour = vec![1, 2, 3];
        let mut search = LocalSearch::new(policy, Budget::moves(100));

        let termination = search.descend(&mut tour, &problem);

        assert_eq!(termination, Termination::LocalOptimum);
        assert!((problem.tour_cost(&tour) - 40.0).abs() < 1e-9);
        assert!(search.moves_applied >= 1);
        assert!(LocalSearch::is_local_optimum(&tour, &problem));
    }
}

#[test]
fn test_short_tours_have_no_moves() {
    let problem = create_square_problem();
    let search = LocalSearch::new(ImprovementPolicy::BestImprovement, Budget::moves(10));

    assert!(search.find_two_opt(&[], &problem).is_none());
    assert!(search.find_two_opt(&[2], &problem).is_none());
    assert!(search.find_two_opt(&[2, 1], &problem).is_none());
}

#[test]
fn test_best_improvement_picks_largest_delta() {
    let problem = InstanceGenerator::new(GeneratorConfig::new().with_seed(11))
        .generate(15)
        .unwrap();
    let tour: Vec<usize> = (1..=15).collect();

    let best = LocalSearch::new(ImprovementPolicy::BestImprovement, Budget::moves(1))
        .find_two_opt(&tour, &problem)
        .expect("an identity tour over random points can be improved");
    let first = LocalSearch::new(ImprovementPolicy::FirstImprovement, Budget::moves(1))
        .find_two_opt(&tour, &problem)
        .expect("an identity tour over random points can be improved");

    assert!(best.delta <= first.delta);
    assert!(best.delta < 0.0);
}

#[test]
fn test_move_budget_stops_descent() {
    let problem = InstanceGenerator::new(GeneratorConfig::new().with_seed(5))
        .generate(30)
        .unwrap();
    let mut tour: Vec<usize> = (1..=30).collect();
    let initial_cost = problem.tour_cost(&tour);
    let mut search = LocalSearch::new(ImprovementPolicy::FirstImprovement, Budget::moves(2));

    let termination = search.descend(&mut tour, &problem);

    assert_eq!(termination, Termination::IterationBudget);
    assert_eq!(search.moves_applied, 2);
    assert!(problem.tour_cost(&tour) < initial_cost);
}

#[test]
fn test_expired_deadline_stops_descent() {
    let problem = create_square_problem();
    let mut tour = vec![1, 2, 3];
    let budget = Budget {
        max_moves: 100,
        deadline: Some(std::time::Instant::now()),
    };
    let mut search = LocalSearch::new(ImprovementPolicy::BestImprovement, budget);

    assert_eq!(search.descend(&mut tour, &problem), Termination::TimeBudget);
    assert_eq!(tour, vec![1, 2, 3]);
}

#[test]
fn test_perturbations_keep_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for len in [0, 1, 2, 3, 7, 8, 25] {
        let original: Vec<usize> = (1..=len).collect();

        for _ in 0..20 {
            let mut tour = original.clone();
            reverse_random_segment(&mut tour, &mut rng);
            assert_eq!(sorted(&tour), original);

            let mut tour = original.clone();
            double_bridge(&mut tour, &mut rng);
            assert_eq!(sorted(&tour), original);

            let mut tour = original.clone();
            perturb(&mut tour, &mut rng);
            assert_eq!(sorted(&tour), original);
        }
    }
}

#[test]
fn test_perturbation_is_seeded() {
    let original: Vec<usize> = (1..=20).collect();

    let mut first = original.clone();
    perturb(&mut first, &mut ChaCha8Rng::seed_from_u64(9));
    let mut second = original.clone();
    perturb(&mut second, &mut ChaCha8Rng::seed_from_u64(9));

    assert_eq!(first, second);
}
