//! Tests for synthetic instance generation.

use uav_routing::config::GeneratorConfig;
use uav_routing::error::RoutingError;
use uav_routing::generator::InstanceGenerator;

#[test]
fn test_generated_instance_shape() {
    let config = GeneratorConfig::new().with_plane_size(50.0).with_seed(3);
    let problem = InstanceGenerator::new(config).generate(12).unwrap();

    assert_eq!(problem.target_count(), 12);
    assert_eq!(problem.depot().id, 0);
    assert_eq!(problem.depot().position.x, 0.0);

    for (i, target) in problem.targets().iter().enumerate() {
        assert_eq!(target.id as usize, i + 1);
        assert!((0.0..=50.0).contains(&target.position.x));
        assert!((0.0..=50.0).contains(&target.position.y));
        assert_eq!(target.name.as_deref(), Some(format!("Target_{}", i + 1).as_str()));
    }
}

#[test]
fn test_points_are_separated() {
    let config = GeneratorConfig::new().with_seed(17);
    let min_separation = config.min_separation;
    let problem = InstanceGenerator::new(config).generate(40).unwrap();

    for i in 0..=problem.target_count() {
        for j in (i + 1)..=problem.target_count() {
            assert!(problem.cost(i, j) >= min_separation);
        }
    }
}

#[test]
fn test_batch_respects_target_range() {
    let config = GeneratorConfig::new().with_target_range(5, 8).with_seed(1);
    let batch = InstanceGenerator::new(config).generate_batch(10).unwrap();

    assert_eq!(batch.len(), 10);
    for (i, problem) in batch.iter().enumerate() {
        assert!((5..=8).contains(&problem.target_count()));
        assert_eq!(problem.name, format!("generated_{}", i + 1));
    }
}

#[test]
fn test_same_seed_same_instances() {
    let first = InstanceGenerator::new(GeneratorConfig::new().with_seed(77))
        .generate_batch(3)
        .unwrap();
    let second = InstanceGenerator::new(GeneratorConfig::new().with_seed(77))
        .generate_batch(3)
        .unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.depot(), b.depot());
        assert_eq!(a.targets(), b.targets());
    }

    let other = InstanceGenerator::new(GeneratorConfig::new().with_seed(78))
        .generate_batch(1)
        .unwrap();
    assert_ne!(first[0].targets(), other[0].targets());
}

#[test]
fn test_zero_targets() {
    let problem = InstanceGenerator::new(GeneratorConfig::new())
        .generate(0)
        .unwrap();

    assert_eq!(problem.target_count(), 0);
}

#[test]
fn test_invalid_plane_size_is_rejected() {
    for size in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let mut generator = InstanceGenerator::new(GeneratorConfig::new().with_plane_size(size));

        assert!(matches!(generator.generate(5), Err(RoutingError::InvalidConfig(_))));
        assert!(matches!(generator.generate_batch(2), Err(RoutingError::InvalidConfig(_))));
    }
}

#[test]
fn test_invalid_separation_is_rejected() {
    for separation in [0.0, -1.0, f64::NAN] {
        let config = GeneratorConfig::new().with_min_separation(separation);

        assert!(matches!(
            InstanceGenerator::new(config).generate(3),
            Err(RoutingError::InvalidConfig(_))
        ));
    }
}

#[test]
fn test_crowded_area_is_an_error() {
    // No point of a 1x1 area is 5 away from a depot on its edge
    let config = GeneratorConfig::new()
        .with_plane_size(1.0)
        .with_min_separation(5.0);

    let result = InstanceGenerator::new(config).generate(1);

    assert!(matches!(result, Err(RoutingError::InvalidConfig(_))));
}

#[test]
fn test_empty_target_range_is_rejected() {
    let mut config = GeneratorConfig::new();
    config.min_targets = 9;
    config.max_targets = 4;

    assert!(config.validate().is_err());
    assert!(matches!(
        InstanceGenerator::new(config).generate_random(),
        Err(RoutingError::InvalidConfig(_))
    ));
    assert!(GeneratorConfig::new().validate().is_ok());
}
