//! Named reference points on a unit cube.
//!
//! Purpose
//! - Provide the 3D half of the symmetry-diagram pair: 8 vertices, 12 edge
//!   midpoints and 6 face centers of a scaled unit cube, keyed by the
//!   identifier scheme in [`crate::ident`], plus a fixed front/back quad
//!   partition for the one camera angle the diagrams use.
//!
//! The catalog is built eagerly in the constructor and read-only afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{GeometryError, Result};
use crate::ident::{self, ORIGIN_ID};
use crate::Point3;

/// Vertex order of the unit cube. Indices are the digits used in ids.
const VERTEX_COORDS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Incident vertices of the 12 edges, each pair sorted so the digits form the id.
const EDGE_VERTICES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [0, 3],
    [4, 5],
    [5, 6],
    [6, 7],
    [4, 7],
    [0, 5],
    [1, 6],
    [2, 7],
    [3, 4],
];

/// Corner vertices of the 6 faces, sorted so the digits form the id.
const FACE_VERTICES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [2, 3, 4, 7],
    [0, 3, 4, 5],
    [0, 1, 5, 6],
    [1, 2, 6, 7],
    [4, 5, 6, 7],
];

/// Quads facing the viewer at the fixed drawing elevation/azimuth.
const FRONT_QUADS: [[usize; 4]; 3] = [[1, 2, 7, 6], [2, 3, 4, 7], [4, 5, 6, 7]];
/// Quads facing away; drawn dashed behind the front set.
const BACK_QUADS: [[usize; 4]; 3] = [[0, 5, 4, 3], [0, 1, 6, 5], [0, 3, 2, 1]];

/// Basal face center id `"origin"` resolves to when basal digits co-occur.
const BASAL_FACE_ID: &str = "0123";
/// Top face center id `"origin"` resolves to otherwise.
const TOP_FACE_ID: &str = "4567";

fn id_of(indices: &[usize]) -> String {
    indices.iter().map(|i| i.to_string()).collect()
}

/// Named point catalog of a scaled unit cube.
#[derive(Clone, Debug, Serialize)]
pub struct Cube {
    scale: f64,
    vertices: [Point3; 8],
    front_faces: [[Point3; 4]; 3],
    back_faces: [[Point3; 4]; 3],
    points: BTreeMap<String, Point3>,
}

impl Cube {
    /// Build the full 26-entry catalog for a cube scaled by `scale`.
    pub fn new(scale: f64) -> Self {
        let vertices: [Point3; 8] =
            VERTEX_COORDS.map(|[x, y, z]| Point3::new(x, y, z) * scale);

        let quad = |ids: [usize; 4]| ids.map(|i| vertices[i]);
        let front_faces = FRONT_QUADS.map(quad);
        let back_faces = BACK_QUADS.map(quad);

        let mut points = BTreeMap::new();
        for (i, v) in vertices.iter().enumerate() {
            points.insert(i.to_string(), *v);
        }
        for edge in EDGE_VERTICES {
            let mid = (vertices[edge[0]] + vertices[edge[1]]) / 2.0;
            points.insert(id_of(&edge), mid);
        }
        for face in FACE_VERTICES {
            let center = face
                .iter()
                .fold(Point3::zeros(), |acc, &i| acc + vertices[i])
                / 4.0;
            points.insert(id_of(&face), center);
        }

        Self {
            scale,
            vertices,
            front_faces,
            back_faces,
            points,
        }
    }

    /// Edge length scale passed at construction.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The 8 base vertices in id order.
    #[inline]
    pub fn vertices(&self) -> &[Point3; 8] {
        &self.vertices
    }

    /// Quads facing the viewer at the fixed drawing angle.
    #[inline]
    pub fn front_faces(&self) -> &[[Point3; 4]; 3] {
        &self.front_faces
    }

    /// Quads facing away from the viewer.
    #[inline]
    pub fn back_faces(&self) -> &[[Point3; 4]; 3] {
        &self.back_faces
    }

    /// All 6 quads, front set first.
    pub fn faces(&self) -> Vec<[Point3; 4]> {
        self.front_faces
            .iter()
            .chain(self.back_faces.iter())
            .copied()
            .collect()
    }

    /// Full catalog: vertices, edge midpoints, face centers.
    #[inline]
    pub fn points(&self) -> &BTreeMap<String, Point3> {
        &self.points
    }

    /// Coordinate of one named point.
    pub fn point(&self, id: &str) -> Result<Point3> {
        self.points
            .get(id)
            .copied()
            .ok_or_else(|| GeometryError::UnknownPoint(id.to_string()))
    }

    /// Ordered coordinates of the named points bounding an area.
    ///
    /// `"origin"` resolves to the basal face center `"0123"` when any basal
    /// vertex digit (0-3) occurs elsewhere in the identifier, and to the top
    /// face center `"4567"` otherwise.
    pub fn vertices_of_area(&self, area_id: &str) -> Result<Vec<Point3>> {
        let resolved = resolve_origin(area_id);
        ident::split_composite(&resolved)
            .iter()
            .map(|id| self.point(id))
            .collect()
    }

    /// Weighted combination of catalog points, e.g. for placing a pole
    /// marker at fractional coordinates inside an area.
    pub fn combine(&self, terms: &[(&str, f64)]) -> Result<Point3> {
        let mut acc = Point3::zeros();
        for (id, coeff) in terms {
            acc += self.point(id)? * *coeff;
        }
        Ok(acc)
    }
}

/// Replace the reserved `"origin"` token by the face center it denotes.
fn resolve_origin(area_id: &str) -> String {
    if !area_id.contains(ORIGIN_ID) {
        return area_id.to_string();
    }
    let has_basal_digit = area_id.chars().any(|c| ('0'..='3').contains(&c));
    let face = if has_basal_digit {
        BASAL_FACE_ID
    } else {
        TOP_FACE_ID
    };
    area_id.replace(ORIGIN_ID, face)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_26_entries() {
        let cube = Cube::new(1.0);
        assert_eq!(cube.points().len(), 26);
        for id in ["0", "7", "01", "47", "0123", "4567"] {
            assert!(cube.point(id).is_ok(), "missing {id}");
        }
    }

    #[test]
    fn edge_midpoints_are_exact_means() {
        let cube = Cube::new(2.0);
        for edge in EDGE_VERTICES {
            let id = id_of(&edge);
            let expected = (cube.vertices()[edge[0]] + cube.vertices()[edge[1]]) / 2.0;
            assert_eq!(cube.point(&id).unwrap(), expected, "edge {id}");
        }
    }

    #[test]
    fn face_centers_are_exact_means() {
        let cube = Cube::new(1.0);
        for face in FACE_VERTICES {
            let id = id_of(&face);
            let expected = face
                .iter()
                .fold(Point3::zeros(), |acc, &i| acc + cube.vertices()[i])
                / 4.0;
            assert_eq!(cube.point(&id).unwrap(), expected, "face {id}");
        }
    }

    #[test]
    fn area_vertices_match_direct_computation() {
        let cube = Cube::new(1.0);
        let got = cube.vertices_of_area("4_47_4567").unwrap();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0], Point3::new(0.0, 1.0, 1.0));
        assert_eq!(got[1], (cube.vertices()[4] + cube.vertices()[7]) / 2.0);
        assert_eq!(got[2], Point3::new(0.5, 0.5, 1.0));
    }

    #[test]
    fn origin_resolves_to_basal_face_with_basal_digits() {
        let cube = Cube::new(1.0);
        let got = cube.vertices_of_area("origin_23_2347").unwrap();
        assert_eq!(got[0], cube.point("0123").unwrap());
    }

    #[test]
    fn origin_resolves_to_top_face_without_basal_digits() {
        let cube = Cube::new(1.0);
        let got = cube.vertices_of_area("origin_47_4567").unwrap();
        assert_eq!(got[0], cube.point("4567").unwrap());
    }

    #[test]
    fn unknown_id_is_a_hard_error() {
        let cube = Cube::new(1.0);
        assert_eq!(
            cube.vertices_of_area("4_48"),
            Err(GeometryError::UnknownPoint("48".to_string()))
        );
    }

    #[test]
    fn combine_is_a_weighted_sum() {
        let cube = Cube::new(1.0);
        let p = cube
            .combine(&[("4", 2.0 / 3.0), ("47", 3.0 / 12.0), ("4567", 1.0 / 12.0)])
            .unwrap();
        let expected = cube.point("4").unwrap() * (2.0 / 3.0)
            + cube.point("47").unwrap() * (3.0 / 12.0)
            + cube.point("4567").unwrap() * (1.0 / 12.0);
        assert!((p - expected).norm() < 1e-15);
    }

    #[test]
    fn faces_partition_is_fixed() {
        let cube = Cube::new(1.0);
        assert_eq!(cube.front_faces().len(), 3);
        assert_eq!(cube.back_faces().len(), 3);
        assert_eq!(cube.faces().len(), 6);
        // Front set starts at vertex 1 per the drawing convention.
        assert_eq!(cube.front_faces()[0][0], cube.vertices()[1]);
    }
}
