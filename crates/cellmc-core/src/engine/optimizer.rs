use super::acceptance::Greedy;
use super::config::ParticleSelection;
use super::error::EngineError;
use super::proposal::ProposalGenerator;
use super::step::McStep;
use crate::core::energy::model::EnergyModel;
use crate::core::models::cell::SimulationCell;
use crate::core::models::state::SystemState;
use rand::Rng;

/// Performs one zero-temperature optimization step: propose a candidate and
/// keep it iff it does not increase the Coulomb energy.
pub struct Optimizer<'a> {
    model: EnergyModel<'a>,
    generator: ProposalGenerator<'a>,
    criterion: Greedy,
}

impl<'a> Optimizer<'a> {
    pub fn new(cell: &'a SimulationCell) -> Self {
        Self {
            model: EnergyModel::new(cell),
            generator: ProposalGenerator::new(cell),
            criterion: Greedy,
        }
    }

    /// Proposes and greedily accepts or rejects one move.
    ///
    /// On rejection the returned step carries a fresh copy of the current
    /// state and its energy, so the driver can append it unconditionally.
    pub fn act<R: Rng>(
        &self,
        current: &SystemState,
        perturbation_scale: f64,
        selection: &ParticleSelection,
        rng: &mut R,
    ) -> Result<McStep, EngineError> {
        let current_energy = self.model.coulomb_energy(current)?;
        let proposal = self
            .generator
            .propose(current, perturbation_scale, selection, rng)?;

        if self.criterion.accepts(current_energy, proposal.energy) {
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

    fn setup_system() -> ParticleSystem {
        ParticleSystem::new(
            50.0,
            1.0,
            vec![1.0, 1.0, -1.0, -1.0],
            vec![
                [0.0, 0.0, 0.0],
                [1.8, 0.0, 0.0],
                [0.0, 1.8, 0.0],
                [1.8, 1.8, 0.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn act_never_increases_energy() {
        let mut system = setup_system();
        let cell = system.cell().clone();
        let optimizer = Optimizer::new(&cell);
        let mut rng = StdRng::seed_from_u64(2024);

        let mut previous = EnergyModel::new(&cell)
            .coulomb_energy(system.current_state())
            .unwrap();
        for _ in 0..200 {
            let step = optimizer
                .act(
                    system.current_state(),
                    0.2,
                    &ParticleSelection::Fraction(0.5),
                    &mut rng,
                )
                .unwrap();
            assert!(step.energy <= previous);
            previous = step.energy;
            system.push_state(step.state).unwrap();
        }
    }

    #[test]
    fn rejected_move_returns_copy_of_current_state() {
        let system = setup_system();
        let cell = system.cell().clone();
        let optimizer = Optimizer::new(&cell);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let step = optimizer
                .act(
                    system.current_state(),
                    0.5,
                    &ParticleSelection::Fraction(0.5),
                    &mut rng,
                )
                .unwrap();
            if !step.accepted {
                assert_eq!(&step.state, system.current_state());
                return;
            }
        }
        panic!("expected at least one rejected move in 100 attempts");
    }

    #[test]
    fn zero_scale_move_is_accepted_as_equal_energy() {
        let system = setup_system();
        let cell = system.cell().clone();
        let optimizer = Optimizer::new(&cell);
        let mut rng = StdRng::seed_from_u64(8);

        let step = optimizer
            .act(
                system.current_state(),
                0.0,
                &ParticleSelection::Fraction(1.0),
                &mut rng,
            )
            .unwrap();
        assert!(step.accepted);
        assert_eq!(&step.state, system.current_state());
    }
}
