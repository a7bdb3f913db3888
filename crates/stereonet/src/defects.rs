//! Vacancy thermodynamics from dilatometry data.
//!
//! The vacancy fraction follows from the difference between macroscopic
//! length expansion and lattice-parameter expansion; an Arrhenius fit of
//! ln(n_v/N) against 1/T yields the formation enthalpy and entropy.

use serde::Serialize;

use crate::constants::BOLTZMANN;

/// Vacancy site fraction n_v/N from relative length and lattice-parameter
/// changes: 3·(Δl/l − Δa/a).
#[inline]
pub fn vacancy_fraction(dl_over_l: f64, da_over_a: f64) -> f64 {
    3.0 * (dl_over_l - da_over_a)
}

/// Result of fitting ln(n_v/N) = slope·(1/T) + intercept.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ArrheniusFit {
    pub slope: f64,
    pub intercept: f64,
    /// Vacancy formation enthalpy, J: −slope·k_B.
    pub formation_enthalpy: f64,
    /// Vacancy formation entropy, J/K: intercept·k_B.
    pub formation_entropy: f64,
}

/// Least-squares Arrhenius fit over (temperature, vacancy fraction) pairs.
/// Non-positive fractions are skipped (no logarithm); returns None with
/// fewer than two usable samples or a degenerate temperature spread.
pub fn arrhenius_fit(temperatures: &[f64], fractions: &[f64]) -> Option<ArrheniusFit> {
    let samples: Vec<(f64, f64)> = temperatures
        .iter()
        .zip(fractions)
        .filter(|(t, n)| **t > 0.0 && **n > 0.0)
        .map(|(t, n)| (1.0 / t, n.ln()))
        .collect();
    let (slope, intercept) = linear_fit(&samples)?;
    Some(ArrheniusFit {
        slope,
        intercept,
        formation_enthalpy: -slope * BOLTZMANN,
        formation_entropy: intercept * BOLTZMANN,
    })
}

/// Ordinary least squares for y = slope·x + intercept.
fn linear_fit(samples: &[(f64, f64)]) -> Option<(f64, f64)> {
    let n = samples.len() as f64;
    if samples.len() < 2 {
        return None;
    }
    let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = samples.iter().map(|(_, y)| y).sum::<f64>() / n;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in samples {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EV_TO_J;

    #[test]
    fn fraction_is_three_times_the_strain_difference() {
        assert!((vacancy_fraction(2.0e-3, 1.5e-3) - 1.5e-3).abs() < 1e-18);
    }

    #[test]
    fn fit_recovers_synthetic_arrhenius_parameters() {
        // n_v/N = exp(s_v/k_B) * exp(-h_v/(k_B T))
        let h_v = 0.9 * EV_TO_J;
        let s_v = 2.0 * BOLTZMANN;
        let temperatures: Vec<f64> = (0..8).map(|k| 700.0 + 50.0 * k as f64).collect();
        let fractions: Vec<f64> = temperatures
            .iter()
            .map(|t| (s_v / BOLTZMANN - h_v / (BOLTZMANN * t)).exp())
            .collect();
        let fit = arrhenius_fit(&temperatures, &fractions).unwrap();
        assert!((fit.formation_enthalpy / h_v - 1.0).abs() < 1e-9);
        assert!((fit.formation_entropy / s_v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn non_positive_fractions_are_skipped() {
        let temperatures = [800.0, 900.0, 1000.0, 1100.0];
        let fractions = [-1.0e-6, 1.0e-5, 3.0e-5, 8.0e-5];
        let fit = arrhenius_fit(&temperatures, &fractions).unwrap();
        assert!(fit.formation_enthalpy > 0.0);
    }

    #[test]
    fn too_few_samples_fail() {
        assert!(arrhenius_fit(&[900.0], &[1.0e-5]).is_none());
        assert!(arrhenius_fit(&[900.0, 900.0], &[1.0e-5, 1.0e-5]).is_none());
    }
}
