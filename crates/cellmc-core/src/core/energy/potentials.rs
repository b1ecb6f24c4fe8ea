use statrs::function::erf::erfc;
use std::f64::consts::{PI, SQRT_2};

// Callers guarantee dist > 0; zero separations are rejected by the energy
// model before these functions are reached.

#[inline]
pub fn ewald_real_space(dist: f64, q1: f64, q2: f64, sigma: f64) -> f64 {
    q1 * q2 / dist * erfc(dist / (sigma * SQRT_2))
}

#[inline]
pub fn lennard_jones_12_6(dist: f64, sigma: f64, well_depth: f64, cutoff: f64) -> f64 {
    if dist >= cutoff {
        return 0.0;
    }
    let rho6 = (sigma / dist).powi(6);
    4.0 * well_depth * (rho6 * rho6 - rho6)
}

#[inline]
pub fn ewald_self_energy(charges: &[f64], sigma: f64, epsilon0: f64) -> f64 {
    let charge_sq_sum: f64 = charges.iter().map(|q| q * q).sum();
    charge_sq_sum / (2.0 * epsilon0 * sigma * (2.0 * PI).powf(1.5))
}
