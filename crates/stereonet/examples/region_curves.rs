//! Boundary-curve probe for one symmetry region of the stereogram.
//!
//! Purpose
//! - Print the curves bounding a fundamental region (vertex, edge midpoint,
//!   face center) so a plotting script can be checked against known
//!   endpoints without rendering anything.

use stereonet::prelude::*;

fn main() {
    let stereogram = Stereogram::new(StereogramCfg::default()).expect("catalog builds");
    let area = "4_47_2347";
    let edges = stereogram.edges_of_area(area).expect("region is in the net");

    println!("area={} curves={}", area, edges.len());
    for curve in edges {
        let first = curve.first().expect("curves are non-empty");
        let last = curve.last().expect("curves are non-empty");
        println!(
            "family={:?} samples={} from=({:.6}, {:.6}) to=({:.6}, {:.6})",
            curve.family,
            curve.len(),
            first.x,
            first.y,
            last.x,
            last.y,
        );
    }

    let pole = stereogram
        .combine(&[("4", 8.0 / 12.0), ("47", 2.0 / 12.0), ("2347", 2.0 / 12.0)])
        .expect("pole ids are in the catalog");
    println!("pole=({:.6}, {:.6})", pole.x, pole.y);
}
