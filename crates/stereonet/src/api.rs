//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the cli and
//!   project-internal scripts. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across figures.

// Geometry catalogs
pub use crate::cube::Cube;
pub use crate::stereogram::{Curve, CurveFamily, Stereogram, StereogramCfg};
// Identifier scheme
pub use crate::ident::{composite_id, pair_key, split_composite, ORIGIN_ID};
// 2D lattice helpers
pub use crate::lattice::{
    bisector_segment, line_intersection, points_by_index, points_in_window, polygon_area,
    reciprocal_vectors,
};
// Lattice sums and equilibria
pub use crate::sums::{
    inverse_power_sum_cubic, inverse_power_sum_fcc, inverse_power_sum_nacl_shifted,
    inverse_power_sum_square, ionic_cohesive_energy, ionic_equilibrium_spacing,
    lj_cohesive_energy, lj_equilibrium_spacing, madelung_nacl, madelung_square,
    madelung_square_alternating, rhombus_sum, rhombus_sum_weighted,
};
// Electron and defect models
pub use crate::defects::{arrhenius_fit, vacancy_fraction, ArrheniusFit};
pub use crate::electrons::{fermi_gas, FermiGas, KronigPenney};
// Errors and small math
pub use crate::error::{Axis, GeometryError, Result};
pub use crate::{polar, transform_tensor, Point2, Point3};
