//! Stereographic projection of the cube's named points and region
//! boundaries.
//!
//! Purpose
//! - Provide the 2D half of the symmetry-diagram pair: the cube catalog of
//!   [`crate::cube`] projected onto a disk, plus precomputed discretized
//!   curves for every boundary of the cubic stereographic net.
//!
//! Model
//! - All derived lengths are closed-form in the disk radius: the region
//!   boundaries between projected cube features are radial lines, arcs of
//!   radius `r·√3` centered `r·√2` off the origin, or rim segments.
//! - Upper- and lower-hemisphere features that overlap in projection share
//!   coordinates under distinct keys (`"47"`/`"23"`, `"4"`/`"3"`, ...).
//!   The aliasing is intentional geometry, not a collision to repair.
//! - Everything is built eagerly in the constructor; the catalogs are
//!   read-only afterwards.
//!
//! Code cross-refs: `crate::ident` (keys), `grid::SampleGrid` (shared
//! sample lattice), `curves::CurveFamily` (closed forms).

mod cfg;
mod curves;
mod grid;

pub use cfg::StereogramCfg;
pub use curves::{Curve, CurveFamily};

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_4, SQRT_2};

use serde::Serialize;

use crate::error::{Axis, GeometryError, Result};
use crate::ident::{self, ORIGIN_ID};
use crate::{polar, Point2};
use self::curves::CurveFamily::*;
use self::grid::{round_to, SampleGrid};

/// Fixed topology of the cubic stereographic net: which two points each
/// precomputed boundary connects, and the analytic family joining them.
const CURVE_TABLE: &[(&str, &str, CurveFamily)] = &[
    // Upper hemisphere, then the aliased lower-hemisphere counterparts.
    ("origin", "47", Line0),
    ("47", "2347", Line0),
    ("origin", "56", Line0),
    ("56", "0156", Line0),
    ("origin", "23", Line0),
    ("23", "2347", Line0),
    ("origin", "01", Line0),
    ("01", "0156", Line0),
    ("origin", "4", Line45),
    ("4", "34", Line45),
    ("origin", "6", Line45),
    ("6", "16", Line45),
    ("origin", "3", Line45),
    ("3", "34", Line45),
    ("origin", "1", Line45),
    ("1", "16", Line45),
    ("origin", "45", Line90),
    ("45", "0345", Line90),
    ("origin", "67", Line90),
    ("67", "1267", Line90),
    ("origin", "03", Line90),
    ("03", "0345", Line90),
    ("origin", "12", Line90),
    ("12", "1267", Line90),
    ("origin", "5", Line135),
    ("5", "05", Line135),
    ("origin", "7", Line135),
    ("7", "27", Line135),
    ("origin", "0", Line135),
    ("0", "05", Line135),
    ("origin", "2", Line135),
    ("2", "27", Line135),
    ("6", "56", ArcCenterRight),
    ("6", "1267", ArcCenterRight),
    ("5", "56", ArcCenterRight),
    ("5", "0345", ArcCenterRight),
    ("1", "01", ArcCenterRight),
    ("1", "1267", ArcCenterRight),
    ("0", "01", ArcCenterRight),
    ("0", "0345", ArcCenterRight),
    ("4", "47", ArcCenterLeft),
    ("4", "0345", ArcCenterLeft),
    ("7", "47", ArcCenterLeft),
    ("7", "1267", ArcCenterLeft),
    ("3", "23", ArcCenterLeft),
    ("3", "0345", ArcCenterLeft),
    ("2", "23", ArcCenterLeft),
    ("2", "1267", ArcCenterLeft),
    ("7", "67", ArcCenterTop),
    ("7", "2347", ArcCenterTop),
    ("6", "67", ArcCenterTop),
    ("6", "0156", ArcCenterTop),
    ("2", "12", ArcCenterTop),
    ("2", "2347", ArcCenterTop),
    ("1", "12", ArcCenterTop),
    ("1", "0156", ArcCenterTop),
    ("4", "45", ArcCenterBottom),
    ("4", "2347", ArcCenterBottom),
    ("5", "45", ArcCenterBottom),
    ("5", "0156", ArcCenterBottom),
    ("3", "03", ArcCenterBottom),
    ("3", "2347", ArcCenterBottom),
    ("0", "03", ArcCenterBottom),
    ("0", "0156", ArcCenterBottom),
    ("34", "2347", RimUpper),
    ("34", "0345", RimUpper),
    ("05", "0345", RimUpper),
    ("05", "0156", RimUpper),
    ("27", "2347", RimLower),
    ("27", "1267", RimLower),
    ("16", "1267", RimLower),
    ("16", "0156", RimLower),
];

/// Stereographic projection catalog: 26 named points on the disk and 72
/// precomputed boundary curves between them.
#[derive(Clone, Debug, Serialize)]
pub struct Stereogram {
    cfg: StereogramCfg,
    arc_radius: f64,
    arc_offset: f64,
    inner_radius_edge: f64,
    inner_radius_vertex: f64,
    arc_angle_deg: f64,
    origin: Point2,
    grid: SampleGrid,
    points: BTreeMap<String, Point2>,
    curves: BTreeMap<String, Curve>,
}

impl Stereogram {
    /// Build the full point and curve catalogs for the given configuration.
    pub fn new(cfg: StereogramCfg) -> Result<Self> {
        let r = cfg.radius;
        let arc_radius = r * 3f64.sqrt();
        let arc_offset = r * SQRT_2;
        // Edge midpoints off the equator land where the great-circle arc
        // crosses the axes; vertices land on the diagonals.
        let inner_radius_edge = arc_radius - arc_offset;
        let inner_radius_vertex = (SQRT_2 - 1.0) * r;
        let arc_angle_deg = (2.0 * (1.0 / SQRT_2).atan()).to_degrees();

        let grid = SampleGrid::build(
            r,
            arc_radius,
            arc_offset,
            cfg.resolution,
            cfg.rounding_decimals,
        );

        let re = inner_radius_edge;
        let rv = inner_radius_vertex;
        let mut points = BTreeMap::new();
        // Equatorial face centers on the rim.
        points.insert("2347".to_string(), Point2::new(r, 0.0));
        points.insert("0345".to_string(), Point2::new(0.0, r));
        points.insert("0156".to_string(), Point2::new(-r, 0.0));
        points.insert("1267".to_string(), Point2::new(0.0, -r));
        // Equatorial edge midpoints (mirror points) on the rim diagonals.
        points.insert("34".to_string(), polar(r, FRAC_PI_4));
        points.insert("05".to_string(), polar(r, 3.0 * FRAC_PI_4));
        points.insert("16".to_string(), polar(r, 5.0 * FRAC_PI_4));
        points.insert("27".to_string(), polar(r, 7.0 * FRAC_PI_4));
        // Top-face edge midpoints on the axes, and the basal edges that
        // project onto the same points.
        points.insert("47".to_string(), Point2::new(re, 0.0));
        points.insert("45".to_string(), Point2::new(0.0, re));
        points.insert("56".to_string(), Point2::new(-re, 0.0));
        points.insert("67".to_string(), Point2::new(0.0, -re));
        points.insert("23".to_string(), Point2::new(re, 0.0));
        points.insert("03".to_string(), Point2::new(0.0, re));
        points.insert("01".to_string(), Point2::new(-re, 0.0));
        points.insert("12".to_string(), Point2::new(0.0, -re));
        // Vertices on the diagonals, aliased pairwise across hemispheres.
        points.insert("4".to_string(), polar(rv, FRAC_PI_4));
        points.insert("5".to_string(), polar(rv, 3.0 * FRAC_PI_4));
        points.insert("6".to_string(), polar(rv, 5.0 * FRAC_PI_4));
        points.insert("7".to_string(), polar(rv, 7.0 * FRAC_PI_4));
        points.insert("3".to_string(), polar(rv, FRAC_PI_4));
        points.insert("0".to_string(), polar(rv, 3.0 * FRAC_PI_4));
        points.insert("1".to_string(), polar(rv, 5.0 * FRAC_PI_4));
        points.insert("2".to_string(), polar(rv, 7.0 * FRAC_PI_4));
        // Axis face centers project onto the disk center, so the cube and
        // disk catalogs share one key set.
        points.insert("0123".to_string(), Point2::zeros());
        points.insert("4567".to_string(), Point2::zeros());

        let origin = Point2::zeros();
        let mut stereogram = Self {
            cfg,
            arc_radius,
            arc_offset,
            inner_radius_edge,
            inner_radius_vertex,
            arc_angle_deg,
            origin,
            grid,
            points,
            curves: BTreeMap::new(),
        };

        let mut curves = BTreeMap::new();
        for &(a, b, family) in CURVE_TABLE {
            let p1 = stereogram.endpoint(a)?;
            let p2 = stereogram.endpoint(b)?;
            let curve = stereogram.sample_curve(family, p1, p2)?;
            curves.insert(ident::pair_key(a, b), curve);
        }
        stereogram.curves = curves;
        Ok(stereogram)
    }

    /// Default catalog at the given disk radius.
    pub fn with_radius(radius: f64) -> Result<Self> {
        Self::new(StereogramCfg::with_radius(radius))
    }

    fn endpoint(&self, id: &str) -> Result<Point2> {
        if id == ORIGIN_ID {
            Ok(self.origin)
        } else {
            self.point(id)
        }
    }

    #[inline]
    pub fn cfg(&self) -> StereogramCfg {
        self.cfg
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.cfg.radius
    }

    /// Radius of the great-circle boundary arcs, `radius·√3`.
    #[inline]
    pub fn arc_radius(&self) -> f64 {
        self.arc_radius
    }

    /// Distance of the arc centers from the origin, `radius·√2`.
    #[inline]
    pub fn arc_offset(&self) -> f64 {
        self.arc_offset
    }

    /// Distance of projected off-equator edge midpoints from the origin.
    #[inline]
    pub fn inner_radius_edge(&self) -> f64 {
        self.inner_radius_edge
    }

    /// Distance of projected vertices from the origin, `radius·(√2−1)`.
    #[inline]
    pub fn inner_radius_vertex(&self) -> f64 {
        self.inner_radius_vertex
    }

    /// Opening angle of a boundary arc in degrees, for drawing call sites.
    #[inline]
    pub fn arc_angle_deg(&self) -> f64 {
        self.arc_angle_deg
    }

    /// Center of the disk.
    #[inline]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Full projected point catalog.
    #[inline]
    pub fn points(&self) -> &BTreeMap<String, Point2> {
        &self.points
    }

    /// All precomputed boundary curves keyed by canonical pair id.
    #[inline]
    pub fn curves(&self) -> &BTreeMap<String, Curve> {
        &self.curves
    }

    /// Projected coordinate of one named point.
    pub fn point(&self, id: &str) -> Result<Point2> {
        self.points
            .get(id)
            .copied()
            .ok_or_else(|| GeometryError::UnknownPoint(id.to_string()))
    }

    /// Precomputed boundary curve between two named points.
    pub fn curve(&self, a: &str, b: &str) -> Result<&Curve> {
        let key = ident::pair_key(a, b);
        self.curves
            .get(&key)
            .ok_or(GeometryError::UnknownCurve(key))
    }

    /// Boundary curves of an area: one curve per pairwise combination of
    /// the named points. A pair without a registered curve is a hard error
    /// (the requested region boundary was never part of the net).
    pub fn edges_of_area(&self, area_id: &str) -> Result<Vec<&Curve>> {
        let ids = ident::split_composite(area_id);
        let mut edges = Vec::with_capacity(ids.len() * (ids.len() - 1) / 2);
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                edges.push(self.curve(a, b)?);
            }
        }
        Ok(edges)
    }

    /// Weighted combination of projected catalog points.
    pub fn combine(&self, terms: &[(&str, f64)]) -> Result<Point2> {
        let mut acc = Point2::zeros();
        for (id, coeff) in terms {
            acc += self.point(id)? * *coeff;
        }
        Ok(acc)
    }

    /// Discretize the curve of `family` between two endpoints on the shared
    /// sample grid. Errors when the endpoints have no extent along the
    /// family's driving axis.
    pub fn sample_curve(&self, family: CurveFamily, p1: Point2, p2: Point2) -> Result<Curve> {
        let samples = match family.driving_axis() {
            Axis::X => self.grid.span(p1.x, p2.x, Axis::X)?,
            Axis::Y => self.grid.span(p1.y, p2.y, Axis::Y)?,
        };
        let decimals = self.grid.decimals();
        let points = samples
            .into_iter()
            .map(|c| {
                let p = family.point_at(c, self.cfg.radius, self.arc_radius, self.arc_offset);
                Point2::new(round_to(p.x, decimals), round_to(p.y, decimals))
            })
            .collect();
        Ok(Curve { family, points })
    }
}
