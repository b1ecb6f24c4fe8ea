use super::config::ParticleSelection;
use super::error::EngineError;
use crate::core::energy::model::EnergyModel;
use crate::core::models::cell::SimulationCell;
use crate::core::models::state::SystemState;
use nalgebra::Vector3;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// A candidate configuration together with its scoring energy.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub state: SystemState,
    pub energy: f64,
}

/// Produces candidate configurations by Gaussian perturbation of a random
/// particle subset.
///
/// The subset is a uniform sample without replacement over particle indices;
/// each selected particle receives an independent isotropic displacement
/// drawn per axis from `Normal(0, perturbation_scale)` around its current
/// position. The candidate is a freshly allocated state: the input
/// configuration is never touched.
pub struct ProposalGenerator<'a> {
    model: EnergyModel<'a>,
}

impl<'a> ProposalGenerator<'a> {
    pub fn new(cell: &'a SimulationCell) -> Self {
        Self {
            model: EnergyModel::new(cell),
        }
    }

    /// Proposes one candidate and scores it with the Coulomb energy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] if the perturbation scale
    /// is negative or non-finite, or if the selection does not resolve
    /// against the current particle count; energy evaluation errors
    /// propagate as [`EngineError::Energy`].
    pub fn propose<R: Rng>(
        &self,
        current: &SystemState,
        perturbation_scale: f64,
        selection: &ParticleSelection,
        rng: &mut R,
    ) -> Result<Proposal, EngineError> {
        if !perturbation_scale.is_finite() || perturbation_scale < 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "perturbation scale must be finite and non-negative, got {perturbation_scale}"
            )));
        }
        let move_count = selection.resolve(current.particle_count())?;
        let displacement = Normal::new(0.0, perturbation_scale).map_err(|e| {
            EngineError::InvalidParameter(format!("perturbation scale {perturbation_scale}: {e}"))
        })?;

        let mut positions = current.positions().to_vec();
        for index in rand::seq::index::sample(rng, positions.len(), move_count) {
            positions[index] += Vector3::new(
                displacement.sample(rng),
                displacement.sample(rng),
                displacement.sample(rng),
            );
        }

        let state = SystemState::new(positions);
        let energy = self.model.coulomb_energy(&state)?;
        Ok(Proposal { state, energy })
    }
}
