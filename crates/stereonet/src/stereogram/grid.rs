//! Shared sample grid for boundary curves.
//!
//! One symmetric coordinate lattice serves every curve family: the evenly
//! spaced base samples in [0, radius], the abscissae of the great-circle
//! arc at those same samples, and the negatives of both sets. Sampling all
//! curves from this one lattice makes differently parametrized curves meet
//! on exactly comparable rounded coordinates.

use serde::Serialize;

use crate::constants::NEAR_ZERO;
use crate::error::{Axis, GeometryError, Result};

/// Round to a fixed number of decimal places.
#[inline]
pub(crate) fn round_to(x: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (x * f).round() / f
}

/// Sorted, deduplicated, rounded sample coordinates. The same values are
/// used for x and y.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct SampleGrid {
    values: Vec<f64>,
    decimals: i32,
}

impl SampleGrid {
    pub(crate) fn build(
        radius: f64,
        arc_radius: f64,
        arc_offset: f64,
        resolution: usize,
        decimals: i32,
    ) -> Self {
        let n = resolution.max(1);
        let mut values = Vec::with_capacity(4 * (n + 1));
        for k in 0..=n {
            let t = radius * (k as f64 / n as f64);
            values.push(t);
            // Abscissa of the great-circle arc at ordinate t.
            values.push((arc_radius * arc_radius - t * t).max(0.0).sqrt() - arc_offset);
        }
        let negatives: Vec<f64> = values.iter().map(|v| -v).collect();
        values.extend(negatives);
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        values.dedup();
        for v in &mut values {
            *v = round_to(*v, decimals);
        }
        Self { values, decimals }
    }

    #[inline]
    pub(crate) fn decimals(&self) -> i32 {
        self.decimals
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Samples spanned by two coordinates, inclusive on both ends. Errors
    /// when the span collapses below the coincidence tolerance (a request
    /// for a zero-length curve).
    pub(crate) fn span(&self, c1: f64, c2: f64, axis: Axis) -> Result<Vec<f64>> {
        let lo = c1.min(c2);
        let hi = c1.max(c2);
        if hi - lo < NEAR_ZERO {
            return Err(GeometryError::DegenerateSpan { axis, lo, hi });
        }
        Ok(self
            .values
            .iter()
            .copied()
            .filter(|v| *v >= lo && *v <= hi)
            .collect())
    }
}
