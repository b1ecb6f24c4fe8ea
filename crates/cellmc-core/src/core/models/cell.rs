/// Represents the immutable physical parameters of a periodic cubic cell.
///
/// A `SimulationCell` carries everything about a system that does not change
/// during sampling: the cell geometry, the Lennard-Jones scale, the
/// electrostatic constants, and the per-particle charges. Configurations are
/// scored against a cell by the energy model; the cell itself holds no
/// positions.
///
/// The cutoff radius is fixed at `2.5 * sigma` and is derived, never set
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationCell {
    /// Characteristic edge length `L` of the cubic cell.
    characteristic_length: f64,
    /// Lennard-Jones scale `sigma`, the characteristic interaction range.
    sigma: f64,
    /// Vacuum permittivity constant `epsilon0`.
    epsilon0: f64,
    /// Lennard-Jones well depth, in reduced units.
    lj_well_depth: f64,
    /// Per-particle charges; index i is the charge of particle i.
    particle_charges: Vec<f64>,
    /// Periodic-image truncation order `n`: the shift `n * L` applied to
    /// pair separations in the real-space Ewald sum.
    periods: u32,
}

impl SimulationCell {
    /// Validity is the builder's responsibility; see `ParticleSystemBuilder`.
    pub(crate) fn new(
        characteristic_length: f64,
        sigma: f64,
        epsilon0: f64,
        lj_well_depth: f64,
        particle_charges: Vec<f64>,
        periods: u32,
    ) -> Self {
        Self {
            characteristic_length,
            sigma,
            epsilon0,
            lj_well_depth,
            particle_charges,
            periods,
        }
    }

    /// Returns the characteristic length `L`.
    pub fn characteristic_length(&self) -> f64 {
        self.characteristic_length
    }

    /// Returns the three (equal) box edge lengths `[L, L, L]`.
    pub fn box_dim(&self) -> [f64; 3] {
        [self.characteristic_length; 3]
    }

    /// Returns the cell volume `L^3`.
    pub fn volume(&self) -> f64 {
        self.characteristic_length.powi(3)
    }

    /// Returns the Lennard-Jones scale `sigma`.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the interaction cutoff radius, fixed at `2.5 * sigma`.
    pub fn cutoff_radius(&self) -> f64 {
        self.sigma * 2.5
    }

    /// Returns the vacuum permittivity constant.
    pub fn epsilon0(&self) -> f64 {
        self.epsilon0
    }

    /// Returns the Lennard-Jones well depth.
    pub fn lj_well_depth(&self) -> f64 {
        self.lj_well_depth
    }

    /// Returns the per-particle charge vector.
    pub fn particle_charges(&self) -> &[f64] {
        &self.particle_charges
    }

    /// Returns the periodic-image truncation order `n`.
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// Returns the number of particles the cell is parameterized for.
    pub fn particle_count(&self) -> usize {
        self.particle_charges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn setup_cell() -> SimulationCell {
        SimulationCell::new(10.0, 1.2, 1.0, 1.0, vec![1.0, -1.0, 0.5], 0)
    }

    #[test]
    fn cutoff_radius_is_fixed_ratio_of_sigma() {
        let cell = setup_cell();
        assert!(f64_approx_equal(cell.cutoff_radius(), 3.0));
    }

    #[test]
    fn box_dim_has_three_equal_edges() {
        let cell = setup_cell();
        assert_eq!(cell.box_dim(), [10.0, 10.0, 10.0]);
    }

    #[test]
    fn volume_is_cube_of_characteristic_length() {
        let cell = setup_cell();
        assert!(f64_approx_equal(cell.volume(), 1000.0));
    }

    #[test]
    fn particle_count_matches_charge_vector_length() {
        let cell = setup_cell();
        assert_eq!(cell.particle_count(), 3);
    }
}
