use super::potentials;
use crate::core::models::cell::SimulationCell;
use crate::core::models::state::SystemState;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnergyError {
    #[error("Particles {first} and {second} coincide; the pair separation is singular")]
    DegenerateConfiguration { first: usize, second: usize },

    #[error("State has {particles} particles but the cell is parameterized for {charges}")]
    DimensionMismatch { charges: usize, particles: usize },
}

/// Selects which energy contribution to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyComponent {
    /// Coulomb plus Lennard-Jones.
    Total,
    /// The truncated 12-6 diagnostic only.
    LennardJones,
    /// The real-space Ewald sum minus the self-energy correction. This is
    /// the energy every Monte Carlo proposal is scored against.
    Coulomb,
}

/// Per-term breakdown of a configuration's energy.
///
/// `reciprocal` is structurally present but always zero: the long-range
/// reciprocal-space Ewald sum is not implemented. See [`EnergyModel`] for
/// what that approximation means for callers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub real_space: f64,
    pub reciprocal: f64,
    pub self_energy: f64,
    pub lennard_jones: f64,
}

impl EnergyBreakdown {
    /// The electrostatic energy: `real_space + reciprocal - self_energy`.
    #[inline]
    pub fn coulomb(&self) -> f64 {
        self.real_space + self.reciprocal - self.self_energy
    }

    /// The combined energy: `coulomb + lennard_jones`.
    #[inline]
    pub fn total(&self) -> f64 {
        self.coulomb() + self.lennard_jones
    }
}

/// Evaluates configuration energies against a fixed cell.
///
/// The electrostatic term is the real-space part of an Ewald summation: a
/// complementary-error-function-screened pair sum over all ordered pairs,
/// with each separation shifted by `n * L` for the cell's periodic-image
/// truncation order `n`, scaled by `1 / (8 * pi * epsilon0)`, minus the
/// self-energy correction. The reciprocal-space sum is intentionally not
/// implemented and always contributes zero, so absolute energies are only
/// physically meaningful in the real-space-dominated regime; within a single
/// run, relative comparisons (which is all Monte Carlo acceptance needs)
/// remain valid.
///
/// Evaluation is pure: no randomness, no side effects, identical inputs give
/// identical energies.
pub struct EnergyModel<'a> {
    cell: &'a SimulationCell,
}

impl<'a> EnergyModel<'a> {
    pub fn new(cell: &'a SimulationCell) -> Self {
        Self { cell }
    }

    /// Computes the electrostatic energy a Monte Carlo proposal is scored
    /// against: `real_space + reciprocal - self_energy`.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyError::DegenerateConfiguration`] if a pair separation
    /// (after the periodic-image shift) is exactly zero, and
    /// [`EnergyError::DimensionMismatch`] if the state's particle count does
    /// not match the cell's charge vector.
    pub fn coulomb_energy(&self, state: &SystemState) -> Result<f64, EnergyError> {
        let real_space = self.real_space_sum(state)?;
        let reciprocal = self.reciprocal_sum(state);
        let self_energy = potentials::ewald_self_energy(
            self.cell.particle_charges(),
            self.cell.sigma(),
            self.cell.epsilon0(),
        );
        Ok(real_space + reciprocal - self_energy)
    }

    /// Computes the full per-term breakdown, including the Lennard-Jones
    /// diagnostic.
    pub fn evaluate(&self, state: &SystemState) -> Result<EnergyBreakdown, EnergyError> {
        Ok(EnergyBreakdown {
            real_space: self.real_space_sum(state)?,
            reciprocal: self.reciprocal_sum(state),
            self_energy: potentials::ewald_self_energy(
                self.cell.particle_charges(),
                self.cell.sigma(),
                self.cell.epsilon0(),
            ),
            lennard_jones: self.lennard_jones_sum(state)?,
        })
    }

    /// Computes one named energy contribution.
    pub fn component(
        &self,
        state: &SystemState,
        component: EnergyComponent,
    ) -> Result<f64, EnergyError> {
        match component {
            EnergyComponent::Coulomb => self.coulomb_energy(state),
            EnergyComponent::LennardJones => self.lennard_jones_sum(state),
            EnergyComponent::Total => {
                Ok(self.coulomb_energy(state)? + self.lennard_jones_sum(state)?)
            }
        }
    }

    /// Maps [`component`](Self::component) over a state sequence, producing
    /// the energy trace downstream consumers plot or analyze.
    pub fn series(
        &self,
        states: &[SystemState],
        component: EnergyComponent,
    ) -> Result<Vec<f64>, EnergyError> {
        states
            .iter()
            .map(|state| self.component(state, component))
            .collect()
    }

    fn check_dimensions(&self, state: &SystemState) -> Result<(), EnergyError> {
        if state.particle_count() != self.cell.particle_count() {
            return Err(EnergyError::DimensionMismatch {
                charges: self.cell.particle_count(),
                particles: state.particle_count(),
            });
        }
        Ok(())
    }

    fn real_space_sum(&self, state: &SystemState) -> Result<f64, EnergyError> {
        self.check_dimensions(state)?;

        let positions = state.positions();
        let charges = self.cell.particle_charges();
        let sigma = self.cell.sigma();
        let image_shift = self.cell.periods() as f64 * self.cell.characteristic_length();

        let mut sum = 0.0;
        for i in 0..positions.len() {
            for j in 0..positions.len() {
                if i == j {
                    continue;
                }
                let separation = (positions[i] - positions[j]).norm() + image_shift;
                if separation == 0.0 {
                    return Err(EnergyError::DegenerateConfiguration {
                        first: i.min(j),
                        second: i.max(j),
                    });
                }
                sum += potentials::ewald_real_space(separation, charges[i], charges[j], sigma);
            }
        }
        Ok(sum / (8.0 * PI * self.cell.epsilon0()))
    }

    /// The reciprocal-space Ewald sum is not implemented and contributes
    /// zero. The term is kept so the approximation stays visible in the
    /// breakdown rather than being an implicit absence.
    fn reciprocal_sum(&self, _state: &SystemState) -> f64 {
        0.0
    }

    fn lennard_jones_sum(&self, state: &SystemState) -> Result<f64, EnergyError> {
        self.check_dimensions(state)?;

        let positions = state.positions();
        let sigma = self.cell.sigma();
        let well_depth = self.cell.lj_well_depth();
        let cutoff = self.cell.cutoff_radius();

        let mut sum = 0.0;
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let dist = (positions[i] - positions[j]).norm();
                if dist == 0.0 {
                    return Err(EnergyError::DegenerateConfiguration {
                        first: i,
                        second: j,
                    });
                }
                sum += potentials::lennard_jones_12_6(dist, sigma, well_depth, cutoff);
            }
        }
        Ok(sum)
    }
}
