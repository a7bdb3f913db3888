//! 2D Bravais-lattice helpers for cell diagrams.
//!
//! Purpose
//! - Generate lattice point sets over index ranges or cartesian windows,
//!   and provide the small constructions the diagrams need: perpendicular
//!   bisectors and their intersections (Wigner-Seitz cells), signed
//!   polygon areas, and the 2D reciprocal basis.
//!
//! Everything here is a pure function of the basis vectors; no state.

use crate::constants::NEAR_ZERO;
use crate::error::{Axis, GeometryError, Result};
use crate::Point2;

/// All integer combinations `i·a + j·b` over inclusive index ranges.
pub fn points_by_index(
    vec_a: Point2,
    vec_b: Point2,
    range_a: (i64, i64),
    range_b: (i64, i64),
) -> Vec<Point2> {
    let mut points = Vec::with_capacity(
        ((range_a.1 - range_a.0 + 1).max(0) * (range_b.1 - range_b.0 + 1).max(0)) as usize,
    );
    for i in range_a.0..=range_a.1 {
        for j in range_b.0..=range_b.1 {
            points.push(vec_a * i as f64 + vec_b * j as f64);
        }
    }
    points
}

/// Lattice points inside an open cartesian window.
///
/// The index span is derived from the window extents over the larger basis
/// component per axis, with margin, then points are filtered to the window.
/// A basis pair with no component along a window axis is a hard error.
pub fn points_in_window(
    vec_a: Point2,
    vec_b: Point2,
    range_x: (f64, f64),
    range_y: (f64, f64),
) -> Result<Vec<Point2>> {
    let span_x = vec_a.x.abs().max(vec_b.x.abs());
    let span_y = vec_a.y.abs().max(vec_b.y.abs());
    if span_x < NEAR_ZERO {
        return Err(GeometryError::DegenerateBasis(Axis::X));
    }
    if span_y < NEAR_ZERO {
        return Err(GeometryError::DegenerateBasis(Axis::Y));
    }
    let range_a = (
        (2.0 * range_x.0 / span_x) as i64,
        (2.0 * range_x.1 / span_x) as i64,
    );
    let range_b = (
        (2.0 * range_y.0 / span_y) as i64,
        (2.0 * range_y.1 / span_y) as i64,
    );
    Ok(points_by_index(vec_a, vec_b, range_a, range_b)
        .into_iter()
        .filter(|p| {
            range_x.0 < p.x && p.x < range_x.1 && range_y.0 < p.y && p.y < range_y.1
        })
        .collect())
}

/// Endpoints of the perpendicular bisector of the segment start→end,
/// extended `relative_magnitude` times the segment length to each side.
/// The Wigner-Seitz construction draws these for the nearest neighbors.
pub fn bisector_segment(end: Point2, start: Point2, relative_magnitude: f64) -> [Point2; 2] {
    let midpoint = (end + start) / 2.0;
    let direction = end - start;
    let normal = Point2::new(-direction.y, direction.x);
    [
        midpoint + normal * relative_magnitude,
        midpoint - normal * relative_magnitude,
    ]
}

/// Intersection of the carrier lines of two segments. None when parallel
/// (within the determinant tolerance).
pub fn line_intersection(line_1: [Point2; 2], line_2: [Point2; 2]) -> Option<Point2> {
    let d1 = line_1[1] - line_1[0];
    let d2 = line_2[1] - line_2[0];
    let det = d1.x * d2.y - d1.y * d2.x;
    if det.abs() < 1e-12 {
        return None;
    }
    let delta = line_2[0] - line_1[0];
    let t = (delta.x * d2.y - delta.y * d2.x) / det;
    Some(line_1[0] + d1 * t)
}

/// Signed shoelace area of a polygon (counterclockwise positive).
pub fn polygon_area(vertices: &[Point2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (k, p) in vertices.iter().enumerate() {
        let q = vertices[(k + 1) % vertices.len()];
        twice_area += p.x * q.y - p.y * q.x;
    }
    twice_area / 2.0
}

/// 2D reciprocal basis in the 2π convention:
/// `a·a* = b·b* = 2π·scale²`, `a·b* = b·a* = 0`.
pub fn reciprocal_vectors(vec_a: Point2, vec_b: Point2, scale: f64) -> (Point2, Point2) {
    let two_pi_s2 = 2.0 * std::f64::consts::PI * scale * scale;
    let cross_b = Point2::new(vec_b.y, -vec_b.x);
    let reciprocal_a = cross_b * (two_pi_s2 / vec_a.dot(&cross_b));
    let cross_a = Point2::new(-vec_a.y, vec_a.x);
    let reciprocal_b = cross_a * (two_pi_s2 / vec_b.dot(&cross_a));
    (reciprocal_a, reciprocal_b)
}
