use super::error::EngineError;
use rand::Rng;

/// Boltzmann constant in eV/K, consistent with the energy model's units.
pub const BOLTZMANN_CONSTANT: f64 = 8.6173303e-5;

/// Zero-temperature acceptance: a candidate is accepted iff it does not
/// increase the energy. Deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Greedy {
    #[inline]
    pub fn accepts(&self, current_energy: f64, candidate_energy: f64) -> bool {
        candidate_energy <= current_energy
    }
}

/// Finite-temperature Metropolis acceptance.
///
/// An energy decrease is always accepted; an increase is accepted with
/// probability `exp(-beta * dE)`, which shrinks toward zero as the
/// temperature approaches zero and toward one as it grows.
#[derive(Debug, Clone, Copy)]
pub struct Metropolis {
    beta: f64,
}

impl Metropolis {
    /// Creates the criterion for a temperature in Kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] unless the temperature is
    /// finite and positive (beta would not be finite otherwise).
    pub fn new(temperature: f64) -> Result<Self, EngineError> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "temperature must be finite and positive, got {temperature}"
            )));
        }
        Ok(Self {
            beta: 1.0 / (BOLTZMANN_CONSTANT * temperature),
        })
    }

    /// Returns the inverse temperature `beta = 1 / (k_B * T)`.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns `min(1, exp(beta * (current - candidate)))`, always in [0, 1].
    #[inline]
    pub fn acceptance_probability(&self, current_energy: f64, candidate_energy: f64) -> f64 {
        (self.beta * (current_energy - candidate_energy))
            .exp()
            .min(1.0)
    }

    /// Draws one uniform number in [0, 1) and accepts iff it does not exceed
    /// the acceptance probability.
    pub fn accepts<R: Rng>(
        &self,
        current_energy: f64,
        candidate_energy: f64,
        rng: &mut R,
    ) -> bool {
        rng.r#gen::<f64>() <= self.acceptance_probability(current_energy, candidate_energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn greedy_accepts_lower_or_equal_energy() {
        let greedy = Greedy;
        assert!(greedy.accepts(1.0, 0.5));
        assert!(greedy.accepts(1.0, 1.0));
        assert!(!greedy.accepts(1.0, 1.1));
    }

    #[test]
    fn metropolis_rejects_non_positive_temperature() {
        assert!(matches!(
            Metropolis::new(0.0),
            Err(EngineError::InvalidParameter(_))
        ));
        assert!(matches!(
            Metropolis::new(-300.0),
            Err(EngineError::InvalidParameter(_))
        ));
        assert!(matches!(
            Metropolis::new(f64::NAN),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn beta_is_inverse_of_boltzmann_constant_times_temperature() {
        let metropolis = Metropolis::new(300.0).unwrap();
        assert_eq!(metropolis.beta(), 1.0 / (BOLTZMANN_CONSTANT * 300.0));
    }

    #[test]
    fn acceptance_probability_is_always_in_unit_interval() {
        let metropolis = Metropolis::new(300.0).unwrap();
        for delta in [-10.0, -0.1, 0.0, 0.1, 10.0] {
            let p = metropolis.acceptance_probability(0.0, delta);
            assert!((0.0..=1.0).contains(&p), "p = {p} for delta = {delta}");
        }
    }

    #[test]
    fn energy_decrease_is_always_accepted() {
        let metropolis = Metropolis::new(300.0).unwrap();
        assert_eq!(metropolis.acceptance_probability(1.0, 0.5), 1.0);

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(metropolis.accepts(1.0, 0.5, &mut rng));
        }
    }

    #[test]
    fn near_zero_temperature_behaves_like_greedy() {
        let metropolis = Metropolis::new(1e-9).unwrap();
        assert_eq!(metropolis.acceptance_probability(1.0, 1.1), 0.0);
        assert_eq!(metropolis.acceptance_probability(1.0, 1.0), 1.0);
        assert_eq!(metropolis.acceptance_probability(1.0, 0.9), 1.0);
    }

    #[test]
    fn acceptance_of_fixed_uphill_move_increases_with_temperature() {
        let delta = 0.05;
        let cold = Metropolis::new(100.0).unwrap();
        let warm = Metropolis::new(300.0).unwrap();
        let hot = Metropolis::new(1000.0).unwrap();

        let p_cold = cold.acceptance_probability(0.0, delta);
        let p_warm = warm.acceptance_probability(0.0, delta);
        let p_hot = hot.acceptance_probability(0.0, delta);
        assert!(p_cold < p_warm);
        assert!(p_warm < p_hot);
        assert!(p_hot < 1.0);
    }
}
