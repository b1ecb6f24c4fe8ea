//! # Core Module
//!
//! This module provides the fundamental building blocks for Monte Carlo
//! sampling of charged particle ensembles, serving as the stateless
//! computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and pure functions required
//! to represent a periodic particle system and score its configurations. It
//! has no knowledge of sampling strategy: everything stochastic lives in the
//! `engine` layer above it.
//!
//! ## Architecture
//!
//! - **System Representation** ([`models`]) - The immutable cell parameters,
//!   immutable particle configurations, and the append-only configuration
//!   history that records a sampling run.
//! - **Energy Calculations** ([`energy`]) - Pure pairwise potentials and the
//!   energy model that evaluates a configuration against its cell.
//!
//! ## Scientific Foundation
//!
//! The energy model implements the real-space part of an Ewald summation:
//! a complementary-error-function-screened Coulomb sum over particle pairs
//! (optionally shifted by one periodic image) minus the self-energy
//! correction introduced by the Ewald splitting. The reciprocal-space sum is
//! intentionally not implemented and contributes zero; see
//! [`energy::model`] for the resulting approximation limits.

pub mod energy;
pub mod models;
