//! Energy evaluation for particle configurations.
//!
//! [`potentials`] holds the pure pairwise functions; [`model`] assembles them
//! into the [`model::EnergyModel`] that scores a [`SystemState`] against a
//! [`SimulationCell`]. Evaluation is deterministic and side-effect free: the
//! same cell and state always produce the same energy.
//!
//! [`SystemState`]: crate::core::models::state::SystemState
//! [`SimulationCell`]: crate::core::models::cell::SimulationCell

pub mod model;
pub mod potentials;
