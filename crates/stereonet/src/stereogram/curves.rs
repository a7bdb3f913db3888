//! Analytic curve families of the cubic stereographic net.
//!
//! Every boundary between two named points on the disk belongs to one of
//! four families: a radial line at 0°/45°/90°/135°, a great-circle arc of
//! radius `radius·√3` centered `radius·√2` off the origin on one of the
//! four half-axes, or a segment of the bounding circle. Which family
//! applies is fixed by the pair of points, not searched at runtime.

use serde::Serialize;

use crate::error::Axis;
use crate::Point2;

/// Analytic shape of a boundary curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CurveFamily {
    /// Radial line along the x axis.
    Line0,
    /// Radial line at 45°.
    Line45,
    /// Radial line along the y axis.
    Line90,
    /// Radial line at 135°.
    Line135,
    /// Great-circle arc centered at (+arc_offset, 0).
    ArcCenterRight,
    /// Great-circle arc centered at (−arc_offset, 0).
    ArcCenterLeft,
    /// Great-circle arc centered at (0, +arc_offset).
    ArcCenterTop,
    /// Great-circle arc centered at (0, −arc_offset).
    ArcCenterBottom,
    /// Upper half of the bounding circle.
    RimUpper,
    /// Lower half of the bounding circle.
    RimLower,
}

impl CurveFamily {
    /// Axis the family is parametrized along.
    pub fn driving_axis(self) -> Axis {
        match self {
            CurveFamily::Line90 | CurveFamily::ArcCenterRight | CurveFamily::ArcCenterLeft => {
                Axis::Y
            }
            _ => Axis::X,
        }
    }

    /// Point of the curve at driving coordinate `c`.
    pub(crate) fn point_at(self, c: f64, radius: f64, arc_radius: f64, arc_offset: f64) -> Point2 {
        // Rounding can push a sample marginally outside a circle; clamp the
        // radicand so the paired coordinate stays finite.
        let arc = |t: f64| (arc_radius * arc_radius - t * t).max(0.0).sqrt() - arc_offset;
        let rim = |t: f64| (radius * radius - t * t).max(0.0).sqrt();
        match self {
            CurveFamily::Line0 => Point2::new(c, 0.0),
            CurveFamily::Line45 => Point2::new(c, c),
            CurveFamily::Line90 => Point2::new(0.0, c),
            CurveFamily::Line135 => Point2::new(c, -c),
            CurveFamily::ArcCenterRight => Point2::new(-arc(c), c),
            CurveFamily::ArcCenterLeft => Point2::new(arc(c), c),
            CurveFamily::ArcCenterTop => Point2::new(c, -arc(c)),
            CurveFamily::ArcCenterBottom => Point2::new(c, arc(c)),
            CurveFamily::RimUpper => Point2::new(c, rim(c)),
            CurveFamily::RimLower => Point2::new(c, -rim(c)),
        }
    }
}

/// A discretized boundary curve, ordered by ascending driving coordinate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Curve {
    pub family: CurveFamily,
    pub points: Vec<Point2>,
}

impl Curve {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }
}
