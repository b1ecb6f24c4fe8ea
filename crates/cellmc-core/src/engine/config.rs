use super::error::EngineError;
use serde::{Deserialize, Serialize};

/// Selects how many particles a proposal perturbs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParticleSelection {
    /// A fixed number of particles; must not exceed the particle count.
    Count(usize),
    /// A fraction in (0, 1] of the particle count, resolved as
    /// `floor(fraction * N)`.
    Fraction(f64),
}

impl ParticleSelection {
    /// Resolves the selection against a concrete particle count.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] for fractions outside
    /// (0, 1] and for counts exceeding `particle_count`.
    pub fn resolve(&self, particle_count: usize) -> Result<usize, EngineError> {
        match *self {
            ParticleSelection::Count(count) => {
                if count > particle_count {
                    return Err(EngineError::InvalidParameter(format!(
                        "selection count {count} exceeds particle count {particle_count}"
                    )));
                }
                Ok(count)
            }
            ParticleSelection::Fraction(fraction) => {
                if !(fraction > 0.0 && fraction <= 1.0) {
                    return Err(EngineError::InvalidParameter(format!(
                        "selection fraction {fraction} is outside (0, 1]"
                    )));
                }
                Ok((fraction * particle_count as f64).floor() as usize)
            }
        }
    }
}

/// Settings for a greedy optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeSettings {
    /// Upper bound on the number of Monte Carlo steps.
    pub max_steps: usize,
    /// Standard deviation of the Gaussian displacement; `None` derives the
    /// default `cutoff_radius / 24` from the cell.
    pub perturbation_scale: Option<f64>,
    /// Absolute energy difference below which a step counts as no progress.
    pub energy_tolerance: f64,
    /// Trailing-window length for plateau detection.
    pub plateau_window: usize,
    /// Subset of particles each proposal perturbs.
    pub particle_selection: ParticleSelection,
    /// Whether to discard intermediate states once the run finishes.
    pub compact_history: bool,
}

impl Default for OptimizeSettings {
    fn default() -> Self {
        Self {
            max_steps: 500,
            perturbation_scale: None,
            energy_tolerance: 1e-6,
            plateau_window: 250,
            particle_selection: ParticleSelection::Fraction(0.5),
            compact_history: true,
        }
    }
}

/// Settings for a finite-temperature Metropolis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateSettings {
    /// Number of Monte Carlo steps; every step appends one state.
    pub steps: usize,
    /// Target temperature in Kelvin; must be positive.
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_resolves_to_floor_of_scaled_count() {
        let resolved = ParticleSelection::Fraction(0.5).resolve(10).unwrap();
        assert_eq!(resolved, 5);
    }

    #[test]
    fn full_fraction_selects_every_particle() {
        let resolved = ParticleSelection::Fraction(1.0).resolve(7).unwrap();
        assert_eq!(resolved, 7);
    }

    #[test]
    fn fraction_outside_unit_interval_is_rejected() {
        assert!(matches!(
            ParticleSelection::Fraction(0.0).resolve(10),
            Err(EngineError::InvalidParameter(_))
        ));
        assert!(matches!(
            ParticleSelection::Fraction(1.5).resolve(10),
            Err(EngineError::InvalidParameter(_))
        ));
        assert!(matches!(
            ParticleSelection::Fraction(-0.2).resolve(10),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn count_within_bounds_is_passed_through() {
        assert_eq!(ParticleSelection::Count(3).resolve(10).unwrap(), 3);
    }

    #[test]
    fn count_exceeding_particle_count_is_rejected() {
        assert!(matches!(
            ParticleSelection::Count(11).resolve(10),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn optimize_settings_defaults_match_documented_values() {
        let settings = OptimizeSettings::default();
        assert_eq!(settings.max_steps, 500);
        assert_eq!(settings.perturbation_scale, None);
        assert_eq!(settings.energy_tolerance, 1e-6);
        assert_eq!(settings.plateau_window, 250);
        assert_eq!(
            settings.particle_selection,
            ParticleSelection::Fraction(0.5)
        );
        assert!(settings.compact_history);
    }
}
