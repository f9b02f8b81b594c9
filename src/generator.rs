//! Synthetic instance generation for experiments and benchmarks.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GeneratorConfig;
use crate::error::{Result, RoutingError};
use crate::problem::{Position, ProblemInstance, Waypoint, WaypointId};

/// Attempts at drawing a well separated point before giving up.
const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Seeded generator of random survey missions.
///
/// The depot sits on the left edge of a square area; targets are spread
/// uniformly over the area and kept apart by `min_separation`.
pub struct InstanceGenerator {
    pub config: GeneratorConfig,
    rng: ChaCha8Rng,
    generated: usize,
}

impl InstanceGenerator {
    /// Create a generator seeded from the configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        InstanceGenerator {
            config,
            rng,
            generated: 0,
        }
    }

    /// Generate an instance with exactly `target_count` targets.
    ///
    /// Fails if the configuration is invalid or the area is too crowded to
    /// keep every point `min_separation` apart.
    pub fn generate(&mut self, target_count: usize) -> Result<ProblemInstance> {
        self.config.validate()?;
        self.generated += 1;
        let size = self.config.plane_size;

        let depot_y = self.rng.gen_range(0.0..=size);
        let depot = Waypoint::new(0, Position::new(0.0, depot_y)).named("Depot");
        let mut placed = vec![depot.position];
        let mut targets = Vec::with_capacity(target_count);

        for i in 1..=target_count {
            let position = self.place_point(&placed).ok_or_else(|| {
                RoutingError::InvalidConfig(format!(
                    "no room for target {} at separation {} in a {} plane",
                    i, self.config.min_separation, size
                ))
            })?;
            placed.push(position);
            targets.push(Waypoint::new(i as WaypointId, position).named(format!("Target_{}", i)));
        }

        let name = format!("generated_{}", self.generated);
        debug!("generated '{}' with {} targets", name, target_count);

        ProblemInstance::euclidean(name, depot, targets)
    }

    /// Generate an instance with a random target count from the configured range.
    pub fn generate_random(&mut self) -> Result<ProblemInstance> {
        self.config.validate()?;
        let count = self
            .rng
            .gen_range(self.config.min_targets..=self.config.max_targets);
        self.generate(count)
    }

    /// Generate `count` instances with random target counts.
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<ProblemInstance>> {
        (0..count).map(|_| self.generate_random()).collect()
    }

    fn place_point(&mut self, placed: &[Position]) -> Option<Position> {
        let min_separation = self.config.min_separation;

        (0..MAX_PLACEMENT_ATTEMPTS)
            .map(|_| self.random_position())
            .find(|position| {
                placed
                    .iter()
                    .all(|other| other.distance(position) >= min_separation)
            })
    }

    fn random_position(&mut self) -> Position {
        let size = self.config.plane_size;
        let x = self.rng.gen_range(0.0..=size);
        let y = self.rng.gen_range(0.0..=size);
        Position::new(x, y)
    }
}
