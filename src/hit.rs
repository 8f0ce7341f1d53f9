#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::legend::Legend;

/// What is under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A legend row, by index into [`Legend::rows`].
    Legend(usize),
    /// A circle, by record index.
    Point(usize),
}

/// A drawn circle as seen by the hit tester.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleHitbox {
    pub index: usize,
    /// Center in world pixels.
    pub center: Point,
    /// Radius in screen pixels.
    pub radius_px: f64,
}

/// Test what lies under `screen`.
///
/// The legend is drawn on top and wins. Circles are tested topmost first,
/// i.e. in reverse draw order; `circles` must only contain visible circles.
#[must_use]
pub fn hit_test(
    screen: Point,
    legend: &Legend,
    camera: &Camera,
    circles: impl DoubleEndedIterator<Item = CircleHitbox>,
) -> Option<Hit> {
    if let Some(row) = legend.index_at(screen) {
        return Some(Hit::Legend(row));
    }
    circles
        .rev()
        .find(|c| camera.world_to_screen(c.center).distance(screen) <= c.radius_px)
        .map(|c| Hit::Point(c.index))
}
