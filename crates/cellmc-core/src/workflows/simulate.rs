use crate::core::energy::model::EnergyModel;
use crate::core::models::system::ParticleSystem;
use crate::engine::config::SimulateSettings;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::simulator::Simulator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Summary of a completed simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateOutcome {
    pub energy_trace: Vec<f64>,
    pub final_energy: f64,
    pub accepted_moves: usize,
}

/// Runs Metropolis sampling from the system's current state.
///
/// Executes exactly `steps` Monte Carlo steps with no early termination,
/// appending one state per step. The sampled trajectory is the system's
/// history; the final configuration is `system.current_state()` after
/// return.
#[instrument(skip_all, name = "simulate_workflow")]
pub fn run<R: Rng>(
    system: &mut ParticleSystem,
    settings: &SimulateSettings,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<SimulateOutcome, EngineError> {
    let cell = system.cell().clone();
    let simulator = Simulator::new(&cell);

    info!(
        steps = settings.steps,
        temperature = settings.temperature,
        "Starting Metropolis simulation run."
    );
    reporter.report(Progress::TaskStart {
        total_steps: settings.steps as u64,
    });

    let mut energy_trace: Vec<f64> = Vec::with_capacity(settings.steps);
    let mut accepted_moves = 0;

    for _ in 0..settings.steps {
        let step = simulator.act(system.current_state(), settings.temperature, rng)?;
        if step.accepted {
            accepted_moves += 1;
        }
        energy_trace.push(step.energy);
        system.push_state(step.state)?;
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);

    let final_energy = match energy_trace.last() {
        Some(&energy) => energy,
        None => EnergyModel::new(&cell).coulomb_energy(system.current_state())?,
    };

    info!(
        accepted_moves,
        final_energy, "Simulation run complete."
    );
    Ok(SimulateOutcome {
        energy_trace,
        final_energy,
        accepted_moves,
    })
}

/// Runs [`run`] with a freshly seeded deterministic generator.
pub fn run_seeded(
    system: &mut ParticleSystem,
    settings: &SimulateSettings,
    seed: u64,
    reporter: &ProgressReporter,
) -> Result<SimulateOutcome, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    run(system, settings, &mut rng, reporter)
}
