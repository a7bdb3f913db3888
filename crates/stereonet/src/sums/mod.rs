//! Lattice sums: inverse-power structure sums, Madelung constants, and the
//! equilibrium spacings / cohesive energies they feed.
//!
//! Conventions
//! - Sums run over symmetric integer grids of half-width `R` (inclusive on
//!   both ends), skipping zero-distance terms. The grids are symmetric
//!   under (u,v) → (−u,−v), so every sum is too.
//! - `power` applies to the squared distance: a structure sum for the r⁻¹²
//!   repulsion uses `power = 6`, for the r⁻⁶ attraction `power = 3`.
//! - Alternating (Madelung-style) sums over a truncated box converge only
//!   in the expanding-box sense; callers pick `R` and check convergence by
//!   comparing successive values.

use crate::constants::{ELEMENTARY_CHARGE, VACUUM_PERMITTIVITY};

/// Σ 1/(u²+v²+w²)^p over the simple-cubic grid, origin excluded.
pub fn inverse_power_sum_cubic(power: f64, half_width: i64) -> f64 {
    let mut sum = 0.0;
    for (u, v, w) in grid_3d(half_width) {
        let r2 = u * u + v * v + w * w;
        if r2 != 0.0 {
            sum += r2.powf(-power);
        }
    }
    sum
}

/// Σ 1/d²ᵖ with the fcc metric d² = ((u+v)² + (v+w)² + (w+u)²)/4.
pub fn inverse_power_sum_fcc(power: f64, half_width: i64) -> f64 {
    let mut sum = 0.0;
    for (u, v, w) in grid_3d(half_width) {
        let r2 = ((u + v).powi(2) + (v + w).powi(2) + (w + u).powi(2)) / 4.0;
        if r2 != 0.0 {
            sum += r2.powf(-power);
        }
    }
    sum
}

/// fcc metric shifted to the opposite-ion sublattice of rock salt:
/// d² = ((u+v+1)² + (v+w+1)² + (w+u+1)²)/4.
pub fn inverse_power_sum_nacl_shifted(power: f64, half_width: i64) -> f64 {
    let mut sum = 0.0;
    for (u, v, w) in grid_3d(half_width) {
        let r2 = ((u + v + 1.0).powi(2) + (v + w + 1.0).powi(2) + (w + u + 1.0).powi(2)) / 4.0;
        if r2 != 0.0 {
            sum += r2.powf(-power);
        }
    }
    sum
}

/// Σ 1/(u²+v²)^p over the square lattice, origin excluded.
pub fn inverse_power_sum_square(power: f64, half_width: i64) -> f64 {
    let mut sum = 0.0;
    for (u, v) in grid_2d(half_width) {
        let r2 = u * u + v * v;
        if r2 != 0.0 {
            sum += r2.powf(-power);
        }
    }
    sum
}

/// Σ 1/d²ᵖ with the oblique metric d² = u² + v² + 2uv·cosγ, origin
/// excluded. `gamma` is the angle between the basis vectors in radians.
pub fn rhombus_sum(gamma: f64, power: f64, half_width: i64) -> f64 {
    let cos_gamma = gamma.cos();
    let mut sum = 0.0;
    for (u, v) in grid_2d(half_width) {
        let r2 = u * u + v * v + 2.0 * u * v * cos_gamma;
        if r2 != 0.0 {
            sum += r2.powf(-power);
        }
    }
    sum
}

/// Σ uv/d²ᵖ with the oblique metric, origin excluded. Appears in the
/// stationarity condition of the oblique Lennard-Jones layer.
pub fn rhombus_sum_weighted(gamma: f64, power: f64, half_width: i64) -> f64 {
    let cos_gamma = gamma.cos();
    let mut sum = 0.0;
    for (u, v) in grid_2d(half_width) {
        let r2 = u * u + v * v + 2.0 * u * v * cos_gamma;
        if r2 != 0.0 {
            sum += u * v * r2.powf(-power);
        }
    }
    sum
}

/// 3D rock-salt Madelung sum Σ (−1)^(u+v+w)/√(u²+v²+w²) over an expanding
/// cube, origin excluded, in units of the nearest-neighbor spacing.
/// Converges to ≈ −1.747565 for the reference ion.
pub fn madelung_nacl(half_width: i64) -> f64 {
    let mut sum = 0.0;
    for u in -half_width..=half_width {
        for v in -half_width..=half_width {
            for w in -half_width..=half_width {
                if u == 0 && v == 0 && w == 0 {
                    continue;
                }
                let sign = if (u + v + w).rem_euclid(2) == 0 { 1.0 } else { -1.0 };
                let r2 = (u * u + v * v + w * w) as f64;
                sum += sign / r2.sqrt();
            }
        }
    }
    sum
}

/// 2D square-lattice Madelung sum, two-sublattice form: cation grid minus
/// the (½,½)-shifted anion grid.
pub fn madelung_square(half_width: i64) -> f64 {
    let mut sum = 0.0;
    for (u, v) in grid_2d(half_width) {
        let same = u * u + v * v;
        if same != 0.0 {
            sum += 1.0 / same.sqrt();
        }
        let opposite = (u + 0.5).powi(2) + (v + 0.5).powi(2);
        sum -= 1.0 / opposite.sqrt();
    }
    sum
}

/// 2D square-lattice Madelung sum, single-grid alternating form:
/// Σ (−1)^(u+v)/√(u²+v²), origin excluded.
pub fn madelung_square_alternating(half_width: i64) -> f64 {
    let mut sum = 0.0;
    for u in -half_width..=half_width {
        for v in -half_width..=half_width {
            if u == 0 && v == 0 {
                continue;
            }
            let sign = if (u + v).rem_euclid(2) == 0 { 1.0 } else { -1.0 };
            let r2 = (u * u + v * v) as f64;
            sum += sign / r2.sqrt();
        }
    }
    sum
}

/// Equilibrium nearest-neighbor spacing of a Lennard-Jones layer on the
/// oblique lattice: a₀ = (2·A₁₂/A₆)^(1/6)·σ.
pub fn lj_equilibrium_spacing(gamma: f64, sigma: f64, half_width: i64) -> f64 {
    let a12 = rhombus_sum(gamma, 6.0, half_width);
    let a6 = rhombus_sum(gamma, 3.0, half_width);
    (2.0 * a12 / a6).powf(1.0 / 6.0) * sigma
}

/// Cohesive energy per atom of the Lennard-Jones layer at its equilibrium
/// spacing: ε·A₆²/(2·A₁₂). Positive value = binding.
pub fn lj_cohesive_energy(gamma: f64, epsilon: f64, half_width: i64) -> f64 {
    let a12 = rhombus_sum(gamma, 6.0, half_width);
    let a6 = rhombus_sum(gamma, 3.0, half_width);
    epsilon * a6 * a6 / a12 / 2.0
}

/// Equilibrium ion spacing of a 2D square ionic layer bound by the
/// alternating Coulomb sum against an r⁻¹² repulsion (SI inputs).
pub fn ionic_equilibrium_spacing(sigma: f64, epsilon: f64, half_width: i64) -> f64 {
    let (coulomb, repulsive) = ionic_coefficients(sigma, epsilon, half_width);
    (-12.0 * repulsive / coulomb).powf(1.0 / 11.0)
}

/// Energy per ion pair of the 2D square ionic layer at spacing `d`.
/// Negative at the equilibrium spacing.
pub fn ionic_cohesive_energy(d: f64, sigma: f64, epsilon: f64, half_width: i64) -> f64 {
    let (coulomb, repulsive) = ionic_coefficients(sigma, epsilon, half_width);
    coulomb / d + repulsive / d.powi(12)
}

fn ionic_coefficients(sigma: f64, epsilon: f64, half_width: i64) -> (f64, f64) {
    let madelung = madelung_square_alternating(half_width);
    let repulsion_sum = inverse_power_sum_square(6.0, half_width);
    let coulomb = ELEMENTARY_CHARGE * ELEMENTARY_CHARGE
        / (4.0 * std::f64::consts::PI * VACUUM_PERMITTIVITY)
        * madelung;
    let repulsive = 4.0 * epsilon * sigma.powi(12) * repulsion_sum;
    (coulomb, repulsive)
}

fn grid_2d(half_width: i64) -> impl Iterator<Item = (f64, f64)> {
    (-half_width..=half_width).flat_map(move |u| {
        (-half_width..=half_width).map(move |v| (u as f64, v as f64))
    })
}

fn grid_3d(half_width: i64) -> impl Iterator<Item = (f64, f64, f64)> {
    (-half_width..=half_width).flat_map(move |u| {
        (-half_width..=half_width).flat_map(move |v| {
            (-half_width..=half_width).map(move |w| (u as f64, v as f64, w as f64))
        })
    })
}

#[cfg(test)]
mod tests;
