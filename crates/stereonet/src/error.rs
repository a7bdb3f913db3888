//! Library error type.
//!
//! Policy
//! - The catalogs are exhaustively precomputed at construction, so every
//!   lookup miss is a caller defect: errors propagate immediately, nothing
//!   is defaulted, interpolated, or retried.

use thiserror::Error;

/// Coordinate axis a curve family is parametrized along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors from catalog lookups and curve sampling.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// The identifier names no point in the catalog.
    #[error("unknown point identifier `{0}`")]
    UnknownPoint(String),
    /// No boundary curve was registered under the canonical key.
    #[error("no boundary curve registered for `{0}`")]
    UnknownCurve(String),
    /// The two endpoints have no extent along the driving axis.
    #[error("degenerate span along {axis}: [{lo}, {hi}]")]
    DegenerateSpan { axis: Axis, lo: f64, hi: f64 },
    /// A basis vector has no component along the requested window axis.
    #[error("degenerate basis along {0}: window span cannot be derived")]
    DegenerateBasis(Axis),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeometryError>;
