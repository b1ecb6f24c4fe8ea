//! # Workflows Module
//!
//! This module provides the high-level driver loops that turn single Monte
//! Carlo steps into complete sampling runs.
//!
//! ## Overview
//!
//! Workflows are the top-level entry points for users of the library. Each
//! one borrows a caller-owned [`ParticleSystem`], iterates an engine actor,
//! appends every resulting state (null moves included) to the system's
//! history, and returns an outcome carrying the energy trace of the run.
//! After a workflow returns, the history remains traversable for inspection
//! or plotting by external code; returned configurations are immutable
//! values.
//!
//! - **Optimization** ([`optimize`]) - Greedy descent toward a local energy
//!   minimum, with plateau-based early termination and optional history
//!   compaction.
//! - **Simulation** ([`simulate`]) - Fixed-length Metropolis sampling at a
//!   target temperature.
//!
//! ## Error Handling
//!
//! Errors abort the run at the offending step and propagate to the caller;
//! there is no retry, since a retried stochastic step would be a different
//! step, not a recovery. States appended before the failure stay in the
//! system, so the partial record remains inspectable.
//!
//! [`ParticleSystem`]: crate::core::models::system::ParticleSystem

pub mod optimize;
pub mod simulate;
