//! Reference geometry and closed-form physics for cubic point-group
//! stereograms and lattice coursework figures.
//!
//! The core pair is [`cube::Cube`] and [`stereogram::Stereogram`]: a named
//! 26-point catalog on a scaled unit cube and its stereographic projection
//! onto a disk, with precomputed boundary curves between projected points.
//! Around them sit the small numeric modules the same figures need:
//! 2D lattice generation, lattice sums (Madelung, Lennard-Jones), the
//! free-electron gas, the Kronig-Penney relation, and vacancy
//! thermodynamics.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Plot composition (figures, image I/O) lives with the callers; the
//!   library only hands out coordinates and curves.

pub mod api;
pub mod constants;
pub mod cube;
pub mod defects;
pub mod electrons;
pub mod error;
pub mod ident;
pub mod lattice;
pub mod stereogram;
pub mod sums;

use nalgebra::Matrix3;

pub use error::GeometryError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 2D point on the projection disk.
pub type Point2 = nalgebra::Vector2<f64>;
/// 3D point on the cube.
pub type Point3 = nalgebra::Vector3<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cube::Cube;
    pub use crate::error::{GeometryError, Result};
    pub use crate::stereogram::{Curve, CurveFamily, Stereogram, StereogramCfg};
    pub use crate::{polar, Point2, Point3};
}

/// Point at `radius` from the origin at `angle` radians.
#[inline]
pub fn polar(radius: f64, angle: f64) -> Point2 {
    Point2::new(radius * angle.cos(), radius * angle.sin())
}

/// Transform a rank-2 property tensor by a symmetry operation:
/// `a · t · aᵀ`.
#[inline]
pub fn transform_tensor(a: &Matrix3<f64>, t: &Matrix3<f64>) -> Matrix3<f64> {
    a * t * a.transpose()
}
