//! Declustering layout for exploded nests.
//!
//! Small nests are placed evenly on a ring whose radius clears the largest
//! circle in the nest; larger nests follow an Archimedean spiral. Distances are
//! divided by the zoom so the spacing on screen does not depend on it.

#[cfg(test)]
#[path = "spread_test.rs"]
mod spread_test;

use std::f64::consts::TAU;

use crate::camera::Point;
use crate::consts::{RING_BASE_GAP_PX, RING_MAX_POINTS, SPIRAL_ANGLE_STEP, SPIRAL_SPACING_PX, SPREAD_MIN_ZOOM};

/// Spread positions for the members of one nest.
///
/// `amounts` are the members' amounts in nest order; the returned positions
/// are in the same order, in world pixels around `center`. `radius` maps an
/// amount to its circle radius in screen pixels.
#[must_use]
pub fn spread(amounts: &[f64], center: Point, zoom: f64, radius: impl Fn(f64) -> f64) -> Vec<Point> {
    let zoom = zoom.max(SPREAD_MIN_ZOOM);
    match amounts.len() {
        0 => Vec::new(),
        1 => vec![center],
        n if n <= RING_MAX_POINTS => {
            let largest = amounts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let ring = (RING_BASE_GAP_PX + radius(largest)) / zoom;
            ring_positions(n, center, ring)
        }
        n => spiral_positions(n, center, SPIRAL_SPACING_PX / zoom),
    }
}

#[allow(clippy::cast_precision_loss)]
fn ring_positions(n: usize, center: Point, ring: f64) -> Vec<Point> {
    let step = TAU / n as f64;
    (0..n)
        .map(|i| {
            let angle = i as f64 * step;
            Point::new(center.x + ring * angle.cos(), center.y + ring * angle.sin())
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn spiral_positions(n: usize, center: Point, spacing: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = i as f64 * SPIRAL_ANGLE_STEP;
            let r = spacing * angle;
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect()
}
