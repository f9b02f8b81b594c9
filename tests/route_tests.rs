//! Tests for route construction and invariant checking.

use uav_routing::error::RoutingError;
use uav_routing::problem::{Position, ProblemInstance, Waypoint};
use uav_routing::route::Route;

fn wp(id: u32, x: f64, y: f64) -> Waypoint {
    Waypoint::new(id, Position::new(x, y))
}

/// Depot with id 10 and three targets on a line.
fn create_line_problem() -> ProblemInstance {
    ProblemInstance::euclidean(
        "line",
        wp(10, 0.0, 0.0),
        vec![wp(1, 1.0, 0.0), wp(2, 2.0, 0.0), wp(3, 3.0, 0.0)],
    )
    .unwrap()
}

#[test]
fn test_from_tour_adds_depot_at_both_ends() {
    let problem = create_line_problem();
    let route = Route::from_tour(&problem, &[3, 1, 2]);

    assert_eq!(route.waypoints, vec![10, 3, 1, 2, 10]);
    assert_eq!(route.len(), problem.target_count() + 2);
    assert_eq!(route.target_ids(), &[3, 1, 2]);
    assert!((route.cost - 8.0).abs() < 1e-12);
    assert!(route.validate(&problem).is_ok());
}

#[test]
fn test_trivial_route() {
    let problem = ProblemInstance::euclidean("empty", wp(5, 1.0, 1.0), vec![]).unwrap();
    let route = Route::trivial(&problem);

    assert_eq!(route.waypoints, vec![5, 5]);
    assert_eq!(route.cost, 0.0);
    assert!(route.target_ids().is_empty());
    assert!(route.validate(&problem).is_ok());
}

#[test]
fn test_from_ids_round_trips_to_tour() {
    let problem = create_line_problem();
    let route = Route::from_ids(&problem, vec![10, 2, 3, 1, 10]).unwrap();

    assert_eq!(route.to_tour(&problem).unwrap(), vec![2, 3, 1]);
    assert!((route.cost - 6.0).abs() < 1e-12);
}

#[test]
fn test_invalid_routes_are_rejected() {
    let problem = create_line_problem();
    let invalid = [
        vec![10, 1, 2, 10],
        vec![1, 10, 2, 3, 10],
        vec![10, 1, 2, 3, 1],
        vec![10, 1, 1, 3, 10],
        vec![10, 1, 2, 42, 10],
        vec![10, 1, 10, 3, 10],
    ];

    for waypoints in invalid {
        let result = Route::from_ids(&problem, waypoints.clone());
        assert!(
            matches!(result, Err(RoutingError::InvalidRoute(_))),
            "route {:?} should be rejected",
            waypoints
        );
    }
}

#[test]
fn test_display() {
    let problem = create_line_problem();
    let route = Route::from_tour(&problem, &[1, 2, 3]);

    assert_eq!(route.to_string(), "10 -> 1 -> 2 -> 3 -> 10 (cost: 6.00)");
}
