use super::cell::SimulationCell;
use super::state::SystemState;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter '{name}' must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error(
        "Charge vector length ({charges}) does not match particle count ({particles})"
    )]
    DimensionMismatch { charges: usize, particles: usize },
}

/// Represents a particle system: one immutable cell plus the append-only
/// history of configurations produced by sampling it.
///
/// The history is indexed from creation (index 0 is the initial
/// configuration) and is never empty. Exactly one state is appended per
/// Monte Carlo step, accepted or not; a rejected step appends a fresh copy
/// of the prior state so that energy traces and history stay index-aligned.
/// [`compact_history`](Self::compact_history) discards all but the final
/// state when intermediate configurations are no longer needed.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    cell: SimulationCell,
    states: Vec<SystemState>,
}

impl ParticleSystem {
    /// Creates a builder for configuring a new particle system.
    pub fn builder() -> ParticleSystemBuilder {
        ParticleSystemBuilder::new()
    }

    /// Creates a system from the four required parameters, using defaults
    /// for the permittivity constant, well depth, and truncation order.
    pub fn new(
        characteristic_length: f64,
        sigma: f64,
        particle_charges: Vec<f64>,
        initial_positions: Vec<[f64; 3]>,
    ) -> Result<Self, ModelError> {
        Self::builder()
            .characteristic_length(characteristic_length)
            .sigma(sigma)
            .particle_charges(particle_charges)
            .initial_positions(initial_positions)
            .build()
    }

    /// Returns the static cell parameters.
    pub fn cell(&self) -> &SimulationCell {
        &self.cell
    }

    /// Returns the most recent configuration.
    pub fn current_state(&self) -> &SystemState {
        self.states
            .last()
            .expect("history is never empty by construction")
    }

    /// Returns the full configuration history, oldest first.
    pub fn states(&self) -> &[SystemState] {
        &self.states
    }

    /// Appends one configuration to the history.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DimensionMismatch`] if the state's particle
    /// count differs from the cell's charge vector length.
    pub fn push_state(&mut self, state: SystemState) -> Result<(), ModelError> {
        if state.particle_count() != self.cell.particle_count() {
            return Err(ModelError::DimensionMismatch {
                charges: self.cell.particle_count(),
                particles: state.particle_count(),
            });
        }
        self.states.push(state);
        Ok(())
    }

    /// Discards all but the final configuration, reclaiming the memory held
    /// by intermediate states. Energy traces recorded by a driver are
    /// unaffected.
    pub fn compact_history(&mut self) {
        let last = self.states.len() - 1;
        self.states.drain(..last);
    }

    /// Returns the number of particles in the system.
    pub fn particle_count(&self) -> usize {
        self.cell.particle_count()
    }

    /// Returns the number of configurations in the history.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

/// Builder for [`ParticleSystem`], validating parameters at `build` time.
#[derive(Debug, Default)]
pub struct ParticleSystemBuilder {
    characteristic_length: Option<f64>,
    sigma: Option<f64>,
    epsilon0: Option<f64>,
    lj_well_depth: Option<f64>,
    particle_charges: Option<Vec<f64>>,
    periods: Option<u32>,
    initial_positions: Option<SystemState>,
}

impl ParticleSystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the characteristic cell length `L` (required).
    pub fn characteristic_length(mut self, length: f64) -> Self {
        self.characteristic_length = Some(length);
        self
    }

    /// Sets the Lennard-Jones scale `sigma` (required).
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }

    /// Sets the vacuum permittivity constant (default 1.0).
    pub fn epsilon0(mut self, epsilon0: f64) -> Self {
        self.epsilon0 = Some(epsilon0);
        self
    }

    /// Sets the Lennard-Jones well depth (default 1.0, reduced units).
    pub fn lj_well_depth(mut self, well_depth: f64) -> Self {
        self.lj_well_depth = Some(well_depth);
        self
    }

    /// Sets the per-particle charge vector (required).
    pub fn particle_charges(mut self, charges: Vec<f64>) -> Self {
        self.particle_charges = Some(charges);
        self
    }

    /// Sets the periodic-image truncation order `n` (default 0).
    pub fn periods(mut self, periods: u32) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Sets the initial configuration from N x 3 coordinate rows (required).
    pub fn initial_positions(mut self, rows: Vec<[f64; 3]>) -> Self {
        self.initial_positions = Some(SystemState::from(rows));
        self
    }

    /// Sets the initial configuration directly (required if
    /// `initial_positions` is not used).
    pub fn initial_state(mut self, state: SystemState) -> Self {
        self.initial_positions = Some(state);
        self
    }

    pub fn build(self) -> Result<ParticleSystem, ModelError> {
        let characteristic_length = self
            .characteristic_length
            .ok_or(ModelError::MissingParameter("characteristic_length"))?;
        let sigma = self.sigma.ok_or(ModelError::MissingParameter("sigma"))?;
        let particle_charges = self
            .particle_charges
            .ok_or(ModelError::MissingParameter("particle_charges"))?;
        let initial_state = self
            .initial_positions
            .ok_or(ModelError::MissingParameter("initial_positions"))?;
        let epsilon0 = self.epsilon0.unwrap_or(1.0);
        let lj_well_depth = self.lj_well_depth.unwrap_or(1.0);
        let periods = self.periods.unwrap_or(0);

        for (name, value) in [
            ("characteristic_length", characteristic_length),
            ("sigma", sigma),
            ("epsilon0", epsilon0),
            ("lj_well_depth", lj_well_depth),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ModelError::NonPositiveParameter { name, value });
            }
        }

        if particle_charges.len() != initial_state.particle_count() {
            return Err(ModelError::DimensionMismatch {
                charges: particle_charges.len(),
                particles: initial_state.particle_count(),
            });
        }

        let cell = SimulationCell::new(
            characteristic_length,
            sigma,
            epsilon0,
            lj_well_depth,
            particle_charges,
            periods,
        );

        Ok(ParticleSystem {
            cell,
            states: vec![initial_state],
        })
    }
}
