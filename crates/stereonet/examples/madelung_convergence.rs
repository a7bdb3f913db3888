//! Convergence table for the Madelung sums.
//!
//! Purpose
//! - Show how the box-truncated alternating sums approach their limits as
//!   the half-width doubles, as a quick numeric sanity check.

use stereonet::sums::{madelung_nacl, madelung_square_alternating};

fn main() {
    println!("{:>6} {:>14} {:>14}", "R", "nacl_3d", "square_2d");
    let mut half_width = 5i64;
    while half_width <= 80 {
        println!(
            "{:>6} {:>14.8} {:>14.8}",
            half_width,
            madelung_nacl(half_width),
            madelung_square_alternating(half_width),
        );
        half_width *= 2;
    }
}
