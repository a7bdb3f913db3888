//! Free-electron and Kronig-Penney electron models (SI units).

use serde::Serialize;

use crate::constants::{ELECTRON_MASS, HBAR, BOLTZMANN};

/// Fermi-surface parameters of a free-electron gas.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FermiGas {
    /// Fermi wavevector, 1/m.
    pub wavevector: f64,
    /// Fermi energy, J.
    pub energy: f64,
    /// Fermi velocity, m/s.
    pub velocity: f64,
    /// Fermi temperature, K.
    pub temperature: f64,
}

/// Fermi parameters for an electron number density in 1/m³.
pub fn fermi_gas(number_density: f64) -> FermiGas {
    let wavevector = (3.0 * std::f64::consts::PI.powi(2) * number_density).powf(1.0 / 3.0);
    let energy = (HBAR * wavevector).powi(2) / (2.0 * ELECTRON_MASS);
    let velocity = HBAR * wavevector / ELECTRON_MASS;
    let temperature = energy / BOLTZMANN;
    FermiGas {
        wavevector,
        energy,
        velocity,
        temperature,
    }
}

/// Kronig-Penney square-well superlattice: wells of width `well_width`
/// separated by barriers of width `barrier_width` and height
/// `barrier_height` (J).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct KronigPenney {
    pub well_width: f64,
    pub barrier_width: f64,
    pub barrier_height: f64,
}

impl KronigPenney {
    /// The cos(k·(a+b)) side of the dispersion relation at energy `E`:
    ///
    /// f(E) = cos(αa)·cosh(βb) + (β²−α²)/2 · sin(αa)/α · sinh(βb)/β
    ///
    /// continued smoothly across E < 0, E = 0 and E > V₀ (the trigonometric
    /// and hyperbolic branches swap as α² or β² changes sign). Energies
    /// with |f(E)| ≤ 1 admit a real Bloch wavevector.
    pub fn dispersion(&self, energy: f64) -> f64 {
        let a = self.well_width;
        let b = self.barrier_width;
        let alpha_sq = 2.0 * ELECTRON_MASS * energy / HBAR.powi(2);
        let beta_sq = 2.0 * ELECTRON_MASS * (self.barrier_height - energy) / HBAR.powi(2);
        cos_like(alpha_sq, a) * cos_like(-beta_sq, b)
            + (beta_sq - alpha_sq) / 2.0 * sinc_like(alpha_sq, a) * sinc_like(-beta_sq, b)
    }

    /// Dispersion values at each sampled energy.
    pub fn evaluate(&self, energies: &[f64]) -> Vec<f64> {
        energies.iter().map(|&e| self.dispersion(e)).collect()
    }

    /// Energies where |f(E)| crosses 1 between consecutive samples: the
    /// allowed-band edges resolvable on the given energy grid.
    pub fn band_edges(&self, energies: &[f64]) -> Vec<f64> {
        let values = self.evaluate(energies);
        let mut edges = Vec::new();
        for k in 0..values.len().saturating_sub(1) {
            let here = values[k].abs() - 1.0;
            let next = values[k + 1].abs() - 1.0;
            if here * next < 0.0 {
                edges.push(energies[k]);
            }
        }
        edges
    }
}

/// cos(√s·x) continued to cosh(√−s·x) for s < 0.
fn cos_like(s: f64, x: f64) -> f64 {
    if s >= 0.0 {
        (s.sqrt() * x).cos()
    } else {
        ((-s).sqrt() * x).cosh()
    }
}

/// sin(√s·x)/√s continued through the removable point at s = 0 (limit x)
/// and to sinh(√−s·x)/√−s for s < 0.
fn sinc_like(s: f64, x: f64) -> f64 {
    if s > 0.0 {
        let k = s.sqrt();
        (k * x).sin() / k
    } else if s < 0.0 {
        let k = (-s).sqrt();
        (k * x).sinh() / k
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ANGSTROM_TO_M, EV_TO_J, J_TO_EV};

    #[test]
    fn fermi_energy_of_copper_is_about_seven_ev() {
        // Copper: n = 8.47e28 electrons/m^3, E_F = 7.00 eV.
        let gas = fermi_gas(8.47e28);
        assert!((gas.energy * J_TO_EV - 7.0).abs() < 0.1);
        assert!((gas.velocity - HBAR * gas.wavevector / ELECTRON_MASS).abs() < 1e-6);
        assert!((gas.temperature - gas.energy / BOLTZMANN).abs() < 1e-6);
    }

    #[test]
    fn fermi_quantities_grow_with_density() {
        let lo = fermi_gas(1e28);
        let hi = fermi_gas(1e29);
        assert!(hi.wavevector > lo.wavevector);
        assert!(hi.energy > lo.energy);
    }

    fn model() -> KronigPenney {
        KronigPenney {
            well_width: 0.5 * ANGSTROM_TO_M,
            barrier_width: 0.25 * ANGSTROM_TO_M,
            barrier_height: 13.6 * EV_TO_J,
        }
    }

    #[test]
    fn dispersion_is_finite_across_all_regimes() {
        let kp = model();
        let v0 = kp.barrier_height;
        for e in [-0.5 * v0, 0.0, 0.5 * v0, v0, 2.0 * v0, 50.0 * v0] {
            let f = kp.dispersion(e);
            assert!(f.is_finite(), "f({e}) = {f}");
        }
    }

    #[test]
    fn dispersion_is_continuous_at_the_regime_boundaries() {
        let kp = model();
        let eps = 1e-6 * EV_TO_J;
        for boundary in [0.0, kp.barrier_height] {
            let below = kp.dispersion(boundary - eps);
            let at = kp.dispersion(boundary);
            let above = kp.dispersion(boundary + eps);
            assert!((below - at).abs() < 1e-4 * at.abs().max(1.0));
            assert!((above - at).abs() < 1e-4 * at.abs().max(1.0));
        }
    }

    #[test]
    fn vanishing_barrier_recovers_the_free_electron_band() {
        // With V0 = 0 the relation collapses to cos(alpha*(a+b)), so |f| <= 1
        // at every positive energy: no gaps.
        let kp = KronigPenney {
            well_width: 0.5 * ANGSTROM_TO_M,
            barrier_width: 0.25 * ANGSTROM_TO_M,
            barrier_height: 0.0,
        };
        for k in 1..200 {
            let e = k as f64 * 0.25 * EV_TO_J;
            assert!(kp.dispersion(e).abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn band_edges_alternate_on_a_fine_grid() {
        let kp = model();
        let step = 0.01 * EV_TO_J;
        let energies: Vec<f64> = (1..20_000).map(|k| k as f64 * step).collect();
        let edges = kp.band_edges(&energies);
        assert!(edges.len() >= 4, "found {} edges", edges.len());
        for pair in edges.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        // Below the first edge the relation is out of band.
        assert!(kp.dispersion(energies[0]).abs() > 1.0);
    }
}
