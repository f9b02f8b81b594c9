//! Problem definition: waypoints, the depot and the precomputed cost matrix.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::iter;
use std::path::Path;

use crate::cost::{CostModel, Euclidean};
use crate::error::{InstanceError, Result};

/// Identifier of a waypoint, unique within a problem instance.
pub type WaypointId = u32;

/// Index of the depot in the cost matrix.
pub const DEPOT_INDEX: usize = 0;

/// Relative difference allowed between the two directions of a pair.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A position in 2D or 3D space. Planar instances leave `z` at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Position {
    /// Create a planar position.
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y, z: 0.0 }
    }

    /// Create a position with an altitude component.
    pub fn with_altitude(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A point to be visited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: WaypointId,
    #[serde(flatten)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Waypoint {
    /// Create a new waypoint.
    pub fn new(id: WaypointId, position: Position) -> Self {
        Waypoint {
            id,
            position,
            name: None,
        }
    }

    /// Attach a human readable label.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// On-disk layout of a problem instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceData {
    #[serde(default)]
    pub name: String,
    pub depot: Waypoint,
    pub targets: Vec<Waypoint>,
}

/// An immutable, validated routing problem.
///
/// Node index [`DEPOT_INDEX`] is the depot, indices `1..=target_count()` are
/// the targets in input order.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    pub name: String,
    waypoints: Vec<Waypoint>,
    cost_matrix: Vec<Vec<f64>>,
    index_by_id: HashMap<WaypointId, usize>,
    cost_model: String,
}

impl ProblemInstance {
    /// Build and validate a problem using the given cost model.
    pub fn new(
        name: impl Into<String>,
        depot: Waypoint,
        targets: Vec<Waypoint>,
        cost_model: &dyn CostModel,
    ) -> Result<Self> {
        let mut waypoints = Vec::with_capacity(targets.len() + 1);
        waypoints.push(depot);
        waypoints.extend(targets);

        let index_by_id = Self::validate(&waypoints)?;
        let cost_matrix = Self::compute_cost_matrix(&waypoints, cost_model)?;

        Ok(ProblemInstance {
            name: name.into(),
            waypoints,
            cost_matrix,
            index_by_id,
            cost_model: cost_model.name().to_string(),
        })
    }

    /// Build a problem with straight-line distances.
    pub fn euclidean(
        name: impl Into<String>,
        depot: Waypoint,
        targets: Vec<Waypoint>,
    ) -> Result<Self> {
        Self::new(name, depot, targets, &Euclidean)
    }

    /// Build a problem from its serialized layout.
    pub fn from_data(data: InstanceData, cost_model: &dyn CostModel) -> Result<Self> {
        Self::new(data.name, data.depot, data.targets, cost_model)
    }

    /// Parse a JSON instance using Euclidean costs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: InstanceData = serde_json::from_str(json)?;
        Self::from_data(data, &Euclidean)
    }

    /// Load a JSON instance from a file. An empty name is replaced by the file stem.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut data: InstanceData = serde_json::from_str(&fs::read_to_string(path)?)?;
        if data.name.is_empty() {
            data.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        Self::from_data(data, &Euclidean)
    }

    /// Export the waypoints in their serialized layout.
    pub fn to_data(&self) -> InstanceData {
        InstanceData {
            name: self.name.clone(),
            depot: self.depot().clone(),
            targets: self.targets().to_vec(),
        }
    }

    fn validate(waypoints: &[Waypoint]) -> Result<HashMap<WaypointId, usize>> {
        let depot_id = waypoints[DEPOT_INDEX].id;
        let mut index_by_id = HashMap::with_capacity(waypoints.len());

        for (index, waypoint) in waypoints.iter().enumerate() {
            if !waypoint.position.is_finite() {
                return Err(InstanceError::NonFiniteCoordinate(waypoint.id).into());
            }
            if index != DEPOT_INDEX && waypoint.id == depot_id {
                return Err(InstanceError::DepotListedAsTarget(waypoint.id).into());
            }
            if index_by_id.insert(waypoint.id, index).is_some() {
                return Err(InstanceError::DuplicateWaypoint(waypoint.id).into());
            }
        }

        Ok(index_by_id)
    }

    fn compute_cost_matrix(
        waypoints: &[Waypoint],
        cost_model: &dyn CostModel,
    ) -> Result<Vec<Vec<f64>>> {
        let n = waypoints.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&waypoints[i], &waypoints[j]);
                let forward = cost_model.cost(a, b);
                let backward = cost_model.cost(b, a);

                if !(forward >= 0.0 && forward.is_finite()) {
                    return Err(InstanceError::InvalidCost { from: a.id, to: b.id }.into());
                }
                if !(backward >= 0.0 && backward.is_finite()) {
                    return Err(InstanceError::InvalidCost { from: b.id, to: a.id }.into());
                }
                // Routes are closed tours walked in either direction
                if (forward - backward).abs() > SYMMETRY_TOLERANCE * forward.max(1.0) {
                    return Err(InstanceError::AsymmetricCost { from: a.id, to: b.id }.into());
                }
                if forward == 0.0 {
                    return Err(InstanceError::CoincidentWaypoints(a.id, b.id).into());
                }

                matrix[i][j] = forward;
                matrix[j][i] = forward;
            }
        }

        Ok(matrix)
    }

    /// Cost between two node indices.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.cost_matrix[from][to]
    }

    /// The depot waypoint.
    pub fn depot(&self) -> &Waypoint {
        &self.waypoints[DEPOT_INDEX]
    }

    /// The target waypoints, in input order.
    pub fn targets(&self) -> &[Waypoint] {
        &self.waypoints[1..]
    }

    /// Number of targets (excluding the depot).
    pub fn target_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Waypoint at a node index.
    pub fn waypoint(&self, index: usize) -> &Waypoint {
        &self.waypoints[index]
    }

    /// Identifier of the waypoint at a node index.
    pub fn id_of(&self, index: usize) -> WaypointId {
        self.waypoints[index].id
    }

    /// Node index of a waypoint id.
    pub fn index_of(&self, id: WaypointId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    /// Name of the cost model the matrix was built with.
    pub fn cost_model_name(&self) -> &str {
        &self.cost_model
    }

    /// Total cost of `depot -> tour... -> depot`, where `tour` holds target node indices.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        iter::once(DEPOT_INDEX)
            .chain(tour.iter().copied())
            .chain(iter::once(DEPOT_INDEX))
            .tuple_windows()
            .map(|(from, to)| self.cost(from, to))
            .sum()
    }
}
