//! # CellMC Core Library
//!
//! A Monte Carlo sampling library for ensembles of charged, Lennard-Jones-like
//! particles confined to a periodic cubic cell. The library produces an
//! append-only sequence of particle configurations ("states"), either by
//! zero-temperature greedy optimization toward a local energy minimum or by
//! finite-temperature Metropolis simulation at a target temperature.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`ParticleSystem`, `SimulationCell`, `SystemState`) and the pure energy
//!   model (a truncated real-space Ewald electrostatic sum with self-energy
//!   correction, plus a truncated Lennard-Jones diagnostic).
//!
//! - **[`engine`]: The Logic Core.** This layer implements the Monte Carlo
//!   machinery: proposal generation by Gaussian perturbation of a random
//!   particle subset, the greedy and Metropolis acceptance criteria, and the
//!   single-step actors (`Optimizer`, `Simulator`) that compose them.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together into complete sampling
//!   runs with termination policy, progress reporting, and history management.
//!
//! ## Determinism
//!
//! Every stochastic operation takes an explicit random-number generator.
//! Two runs with the same seed and parameters produce bit-identical
//! trajectories; parallel chains use independent systems and RNG streams.

pub mod core;
pub mod engine;
pub mod workflows;
