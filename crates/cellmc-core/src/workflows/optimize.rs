use crate::core::energy::model::EnergyModel;
use crate::core::models::system::ParticleSystem;
use crate::engine::config::OptimizeSettings;
use crate::engine::error::EngineError;
use crate::engine::optimizer::Optimizer;
use crate::engine::progress::{Progress, ProgressReporter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Divisor applied to the cutoff radius when no perturbation scale is set.
const DEFAULT_SCALE_DIVISOR: f64 = 24.0;

/// Summary of a completed optimization run.
///
/// `energy_trace` has one entry per executed step and is the authoritative
/// record of the run even when the system's history was compacted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeOutcome {
    pub energy_trace: Vec<f64>,
    pub final_energy: f64,
    pub steps_taken: usize,
    pub accepted_moves: usize,
    pub converged: bool,
}

/// Runs greedy optimization from the system's current state.
///
/// Every step appends exactly one state to the system, accepted or not. The
/// run stops early once the trailing `plateau_window` energies all differ
/// from the most recent energy by less than `energy_tolerance`; otherwise it
/// runs for `max_steps`. With `compact_history` set, intermediate states are
/// discarded after the loop.
#[instrument(skip_all, name = "optimize_workflow")]
pub fn run<R: Rng>(
    system: &mut ParticleSystem,
    settings: &OptimizeSettings,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<OptimizeOutcome, EngineError> {
    let cell = system.cell().clone();
    let perturbation_scale = settings
        .perturbation_scale
        .unwrap_or(cell.cutoff_radius() / DEFAULT_SCALE_DIVISOR);
    let optimizer = Optimizer::new(&cell);

    info!(
        max_steps = settings.max_steps,
        perturbation_scale, "Starting greedy optimization run."
    );
    reporter.report(Progress::TaskStart {
        total_steps: settings.max_steps as u64,
    });

    let mut energy_trace: Vec<f64> = Vec::with_capacity(settings.max_steps);
    let mut accepted_moves = 0;
    let mut converged = false;

    for _ in 0..settings.max_steps {
        let step = optimizer.act(
            system.current_state(),
            perturbation_scale,
            &settings.particle_selection,
            rng,
        )?;
        if step.accepted {
            accepted_moves += 1;
        }
        energy_trace.push(step.energy);
        system.push_state(step.state)?;
        reporter.report(Progress::TaskIncrement);

        if has_plateaued(
            &energy_trace,
            settings.plateau_window,
            settings.energy_tolerance,
        ) {
            converged = true;
            debug!(
                steps = energy_trace.len(),
                "Energy plateau detected; stopping early."
            );
            break;
        }
    }

    reporter.report(Progress::TaskFinish);

    if settings.compact_history {
        system.compact_history();
    }

    let final_energy = match energy_trace.last() {
        Some(&energy) => energy,
        None => EnergyModel::new(&cell).coulomb_energy(system.current_state())?,
    };
    let steps_taken = energy_trace.len();

    info!(
        steps_taken,
        accepted_moves, final_energy, converged, "Optimization run complete."
    );
    Ok(OptimizeOutcome {
        energy_trace,
        final_energy,
        steps_taken,
        accepted_moves,
        converged,
    })
}

/// Runs [`run`] with a freshly seeded deterministic generator.
pub fn run_seeded(
    system: &mut ParticleSystem,
    settings: &OptimizeSettings,
    seed: u64,
    reporter: &ProgressReporter,
) -> Result<OptimizeOutcome, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    run(system, settings, &mut rng, reporter)
}

/// The trailing window is compared against the most recent energy, not a
/// rolling mean; a window of flat-but-drifting energies can therefore pass.
fn has_plateaued(trace: &[f64], window: usize, tolerance: f64) -> bool {
    if window == 0 || trace.len() < window {
        return false;
    }
    let latest = trace[trace.len() - 1];
    trace[trace.len() - window..]
        .iter()
        .all(|&energy| (energy - latest).abs() < tolerance)
}
