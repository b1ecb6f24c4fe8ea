use nalgebra::Point3;

/// Represents one immutable particle configuration.
///
/// A `SystemState` is an ordered list of 3D particle positions; index i is
/// the position of particle i, matching the charge indexing of the owning
/// [`SimulationCell`](super::cell::SimulationCell). States are value objects:
/// once constructed they are never mutated, so a state appended to a system's
/// history remains a faithful record of the sampling step that produced it.
/// Proposal generation always allocates a fresh state rather than editing a
/// shared buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemState {
    positions: Vec<Point3<f64>>,
}

impl SystemState {
    /// Creates a state from a vector of particle positions.
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    /// Returns the particle positions, one per particle.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Returns the number of particles in this configuration.
    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }
}

impl From<Vec<[f64; 3]>> for SystemState {
    /// Builds a state from N x 3 coordinate rows, one row per particle.
    fn from(rows: Vec<[f64; 3]>) -> Self {
        Self {
            positions: rows
                .into_iter()
                .map(|[x, y, z]| Point3::new(x, y, z))
                .collect(),
        }
    }
}
