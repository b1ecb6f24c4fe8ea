//! # Engine Module
//!
//! This module implements the Monte Carlo machinery: proposal generation,
//! acceptance criteria, and the single-step actors the driver workflows
//! iterate.
//!
//! ## Overview
//!
//! Each Monte Carlo step is an independent propose-evaluate-accept/reject
//! decision. The [`proposal::ProposalGenerator`] perturbs a random particle
//! subset with isotropic Gaussian displacements and scores the candidate via
//! the core energy model; [`acceptance`] supplies the greedy and Metropolis
//! decision rules; [`optimizer::Optimizer`] and [`simulator::Simulator`]
//! compose the two into one step each. There is no cross-step state: the
//! actors borrow the cell, take the current configuration, and return a
//! fresh [`step::McStep`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run settings and particle subset
//!   selection.
//! - **Proposal Generation** ([`proposal`]) - Gaussian perturbation of a
//!   uniformly sampled particle subset.
//! - **Acceptance** ([`acceptance`]) - Greedy and Metropolis criteria.
//! - **Actors** ([`optimizer`], [`simulator`]) - One optimization or
//!   simulation step.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress
//!   reporting for long runs.
//! - **Error Handling** ([`error`]) - Engine-specific error types wrapping
//!   the core layers.
//!
//! ## Determinism
//!
//! All randomness enters through the `rand::Rng` value passed into each
//! call; the engine holds no random state of its own.

pub mod acceptance;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod progress;
pub mod proposal;
pub mod simulator;
pub mod step;
