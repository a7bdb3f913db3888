use super::*;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

#[test]
fn cubic_sums_match_tabulated_values() {
    // Simple-cubic lattice sums in nearest-neighbor units.
    assert!((inverse_power_sum_cubic(3.0, 20) - 8.401924).abs() < 1e-3);
    assert!((inverse_power_sum_cubic(6.0, 10) - 6.202149).abs() < 1e-3);
}

#[test]
fn madelung_nacl_converges_to_the_reference_constant() {
    assert!((madelung_nacl(20) + 1.747565).abs() < 1e-2);
}

#[test]
fn madelung_square_alternating_converges_to_the_reference_constant() {
    assert!((madelung_square_alternating(100) + 1.615543).abs() < 1e-2);
}

#[test]
fn madelung_forms_converge_with_box_size() {
    let d1 = (madelung_nacl(16) - madelung_nacl(8)).abs();
    let d2 = (madelung_nacl(32) - madelung_nacl(16)).abs();
    assert!(d2 < d1);
}

#[test]
fn absolutely_convergent_sums_have_shrinking_tails() {
    let f = |r| inverse_power_sum_cubic(3.0, r);
    let d1 = (f(20) - f(10)).abs();
    let d2 = (f(40) - f(20)).abs();
    assert!(d2 < d1);
    assert!(f(20) > f(10));
}

#[test]
fn sums_are_invariant_under_grid_reflection() {
    // Accumulate the reflected grid (u,v) -> (-u,-v) in reverse order and
    // compare against the forward pass.
    let gamma = 1.0f64;
    let power = 3.0;
    let half_width = 15i64;
    let forward = rhombus_sum(gamma, power, half_width);
    let cos_gamma = gamma.cos();
    let mut reflected = 0.0;
    for u in (-half_width..=half_width).rev() {
        for v in (-half_width..=half_width).rev() {
            let (ru, rv) = (-u as f64, -v as f64);
            let r2 = ru * ru + rv * rv + 2.0 * ru * rv * cos_gamma;
            if r2 != 0.0 {
                reflected += r2.powf(-power);
            }
        }
    }
    assert!((forward - reflected).abs() < 1e-9 * forward.abs().max(1.0));
}

#[test]
fn right_angle_rhombus_reduces_to_the_square_lattice() {
    let a = rhombus_sum(FRAC_PI_2, 3.0, 30);
    let b = inverse_power_sum_square(3.0, 30);
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn fcc_metric_counts_twelve_nearest_neighbors() {
    // At large power the sum is dominated by the nearest shell, d = 1/sqrt(2)
    // in cube-edge units: 12 * (1/2)^(-p) for squared-distance power p.
    let p = 30.0;
    let sum = inverse_power_sum_fcc(p, 3);
    let nearest_shell = 12.0 * 0.5f64.powf(-p);
    assert!((sum / nearest_shell - 1.0).abs() < 1e-3);
}

#[test]
fn lj_layer_equilibrium_is_near_sigma() {
    let spacing = lj_equilibrium_spacing(FRAC_PI_3, 1.0, 50);
    assert!(spacing > 1.0 && spacing < 1.2, "spacing {spacing}");
    let energy = lj_cohesive_energy(FRAC_PI_3, 1.0, 50);
    assert!(energy > 1.0 && energy < 10.0, "energy {energy}");
}

#[test]
fn ionic_layer_equilibrium_minimizes_the_energy() {
    use crate::constants::{ANGSTROM_TO_M, EV_TO_J};
    let sigma = 3.40 * ANGSTROM_TO_M;
    let epsilon = 0.0104 * EV_TO_J;
    let half_width = 50;
    let d0 = ionic_equilibrium_spacing(sigma, epsilon, half_width);
    assert!(d0 > 0.0);
    let at = |d| ionic_cohesive_energy(d, sigma, epsilon, half_width);
    assert!(at(d0) < 0.0);
    assert!(at(d0) < at(1.2 * d0));
    assert!(at(d0) < at(0.8 * d0));
}

proptest! {
    // The oblique metric maps onto itself under gamma -> pi - gamma with
    // (u,v) -> (u,-v), a bijection of the symmetric grid.
    #[test]
    fn rhombus_sum_is_symmetric_about_the_right_angle(
        gamma in 0.4f64..2.7,
        power in 2.0f64..4.0,
    ) {
        let a = rhombus_sum(gamma, power, 10);
        let b = rhombus_sum(PI - gamma, power, 10);
        prop_assert!((a - b).abs() < 1e-6 * a.abs().max(1.0));
    }

    #[test]
    fn weighted_rhombus_sum_is_antisymmetric_about_the_right_angle(
        gamma in 0.4f64..2.7,
    ) {
        let a = rhombus_sum_weighted(gamma, 3.0, 10);
        let b = rhombus_sum_weighted(PI - gamma, 3.0, 10);
        prop_assert!((a + b).abs() < 1e-6 * a.abs().max(1.0));
    }
}
