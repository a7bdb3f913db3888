//! Physical constants and shared tolerances (SI unless noted).
//!
//! Policy
//! - Plain `f64` throughout; callers carry units in SI and convert at the
//!   edges with the factors below. No unit-typing layer.

/// Tolerance for coincidence checks on coordinates and spans.
pub const NEAR_ZERO: f64 = 1.0e-6;

/// Vacuum permittivity, F/m.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;
/// Elementary charge, C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// 1 eV in J.
pub const EV_TO_J: f64 = ELEMENTARY_CHARGE;
/// 1 J in eV.
pub const J_TO_EV: f64 = 1.0 / EV_TO_J;
/// 1 eV in J/mol.
pub const EV_TO_J_PER_MOL: f64 = 96_491.5666;
/// 1 J/mol in eV.
pub const J_PER_MOL_TO_EV: f64 = 1.0 / EV_TO_J_PER_MOL;
/// 1 Å in m.
pub const ANGSTROM_TO_M: f64 = 1.0e-10;

/// Electron rest mass, kg.
pub const ELECTRON_MASS: f64 = 9.109_383_7e-31;
/// Reduced Planck constant, J·s.
pub const HBAR: f64 = 1.054_571_817e-34;
/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.380_649e-23;
