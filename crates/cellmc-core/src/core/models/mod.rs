//! Data structures representing a periodic particle system.
//!
//! A [`system::ParticleSystem`] pairs one immutable [`cell::SimulationCell`]
//! (the static physical parameters) with an append-only history of
//! [`state::SystemState`] values (the particle configurations produced by a
//! sampling run). States are immutable once constructed; every Monte Carlo
//! step appends exactly one state, so the history and any energy trace taken
//! over it stay index-aligned.

pub mod cell;
pub mod state;
pub mod system;
