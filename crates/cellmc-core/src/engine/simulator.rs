use super::acceptance::Metropolis;
use super::config::ParticleSelection;
use super::error::EngineError;
use super::proposal::ProposalGenerator;
use super::step::McStep;
use crate::core::energy::model::EnergyModel;
use crate::core::models::cell::SimulationCell;
use crate::core::models::state::SystemState;
use rand::Rng;

/// Fraction of particles perturbed per simulation step, rounded up.
const MOVE_FRACTION: f64 = 0.1;

/// Scale divisor for the per-step displacement: `sigma / 15`.
const SCALE_DIVISOR: f64 = 15.0;

/// Performs one finite-temperature Metropolis step.
///
/// The subset size is fixed at `ceil(0.1 * N)` and the perturbation scale at
/// `sigma / 15`, independent of caller preferences; only the temperature
/// varies between calls.
pub struct Simulator<'a> {
    cell: &'a SimulationCell,
    model: EnergyModel<'a>,
    generator: ProposalGenerator<'a>,
}

impl<'a> Simulator<'a> {
    pub fn new(cell: &'a SimulationCell) -> Self {
        Self {
            cell,
            model: EnergyModel::new(cell),
            generator: ProposalGenerator::new(cell),
        }
    }

    /// Proposes and Metropolis-accepts or -rejects one move at the given
    /// temperature (Kelvin).
    pub fn act<R: Rng>(
        &self,
        current: &SystemState,
        temperature: f64,
        rng: &mut R,
    ) -> Result<McStep, EngineError> {
        let criterion = Metropolis::new(temperature)?;
        let move_count = (MOVE_FRACTION * current.particle_count() as f64).ceil() as usize;
        let scale = self.cell.sigma() / SCALE_DIVISOR;

        let current_energy = self.model.coulomb_energy(current)?;
        let proposal = self.generator.propose(
            current,
            scale,
            &ParticleSelection::Count(move_count),
            rng,
        )?;

        if criterion.accepts(current_energy, proposal.energy, rng) {
            Ok(McStep {
                state: proposal.state,
                energy: proposal.energy,
                accepted: true,
            })
        } else {
            Ok(McStep {
                state: current.clone(),
                energy: current_energy,
                accepted: false,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::system::ParticleSystem;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_system(particle_count: usize) -> ParticleSystem {
        let positions: Vec<_> = (0..particle_count)
            .map(|i| [2.0 * i as f64, 0.0, 0.0])
            .collect();
        let charges: Vec<_> = (0..particle_count)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        ParticleSystem::new(100.0, 1.0, charges, positions).unwrap()
    }

    fn moved_particle_count(before: &SystemState, after: &SystemState) -> usize {
        before
            .positions()
            .iter()
            .zip(after.positions())
            .filter(|(a, b)| a != b)
            .count()
    }

    #[test]
    fn accepted_step_moves_ceil_of_ten_percent_of_particles() {
        let system = setup_system(10);
        let cell = system.cell().clone();
        let simulator = Simulator::new(&cell);
        let mut rng = StdRng::seed_from_u64(17);

        // At a very high temperature essentially every move is accepted.
        for _ in 0..20 {
            let step = simulator
                .act(system.current_state(), 1e9, &mut rng)
                .unwrap();
            if step.accepted {
                assert_eq!(moved_particle_count(system.current_state(), &step.state), 1);
                return;
            }
        }
        panic!("expected an accepted move at high temperature");
    }

    #[test]
    fn subset_size_rounds_up_for_small_systems() {
        let system = setup_system(3);
        let cell = system.cell().clone();
        let simulator = Simulator::new(&cell);
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..20 {
            let step = simulator
                .act(system.current_state(), 1e9, &mut rng)
                .unwrap();
            if step.accepted {
                // ceil(0.1 * 3) = 1
                assert_eq!(moved_particle_count(system.current_state(), &step.state), 1);
                return;
            }
        }
        panic!("expected an accepted move at high temperature");
    }

    #[test]
    fn near_zero_temperature_never_accepts_uphill_moves() {
        let mut system = setup_system(6);
        let cell = system.cell().clone();
        let simulator = Simulator::new(&cell);
        let mut rng = StdRng::seed_from_u64(31);

        let mut previous = EnergyModel::new(&cell)
            .coulomb_energy(system.current_state())
            .unwrap();
        for _ in 0..100 {
            let step = simulator
                .act(system.current_state(), 1e-9, &mut rng)
                .unwrap();
            assert!(step.energy <= previous);
            previous = step.energy;
            system.push_state(step.state).unwrap();
        }
    }

    #[test]
    fn non_positive_temperature_is_rejected() {
        let system = setup_system(4);
        let cell = system.cell().clone();
        let simulator = Simulator::new(&cell);
        let mut rng = StdRng::seed_from_u64(0);

        let result = simulator.act(system.current_state(), 0.0, &mut rng);
        assert!(matches!(result, Err(EngineError::InvalidParameter(_))));
    }
}
