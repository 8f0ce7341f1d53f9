//! Mercator projection fitted to the expense points.
//!
//! The fit works in unit-sphere Mercator space: the point bounds are measured
//! there, scaled so the larger relative extent fills [`FIT_MARGIN`] of the
//! viewport, and the bounds midpoint is placed at the viewport center. Every
//! input point therefore lands inside the viewport.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use std::f64::consts::FRAC_PI_4;

use crate::camera::Point;
use crate::consts::{FIT_MARGIN, MAX_LATITUDE, MIN_FIT_EXTENT};

/// Project (lon, lat) in degrees onto the unit-sphere Mercator plane.
///
/// `y` grows northwards. Latitude is clamped to ±[`MAX_LATITUDE`].
#[must_use]
pub fn mercator(lon: f64, lat: f64) -> Point {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    Point::new(lon.to_radians(), (FRAC_PI_4 + lat / 2.0).tan().ln())
}

/// Axis-aligned bounds in Mercator space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Bounds of the given (lon, lat) pairs, or `None` if empty.
    #[must_use]
    pub fn of(coords: &[(f64, f64)]) -> Option<Self> {
        let mut iter = coords.iter().map(|&(lon, lat)| mercator(lon, lat));
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |b, p| Self {
            min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        }))
    }

    /// Bounds covering the whole projectable world.
    #[must_use]
    pub fn world() -> Self {
        Self { min: mercator(-180.0, -MAX_LATITUDE), max: mercator(180.0, MAX_LATITUDE) }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A fitted projection from (lon, lat) to world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Pixels per Mercator unit.
    pub scale: f64,
    /// Mercator point mapped to `translate`.
    pub center: Point,
    /// Pixel position of `center` (the viewport center).
    pub translate: Point,
}

impl Projection {
    /// Fit a projection so every coordinate lies within a `width` × `height` viewport.
    ///
    /// Extents smaller than [`MIN_FIT_EXTENT`] are widened to it, so a single
    /// point or a line of points still gets a finite scale. An empty input
    /// fits the whole world.
    #[must_use]
    pub fn fit(coords: &[(f64, f64)], width: f64, height: f64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let bounds = Bounds::of(coords).unwrap_or_else(Bounds::world);

        let dx = bounds.width().max(MIN_FIT_EXTENT);
        let dy = bounds.height().max(MIN_FIT_EXTENT);
        let scale = FIT_MARGIN / (dx / width).max(dy / height);

        Self { scale, center: bounds.center(), translate: Point::new(width / 2.0, height / 2.0) }
    }

    /// Map (lon, lat) in degrees to world pixels.
    #[must_use]
    pub fn project(&self, lon: f64, lat: f64) -> Point {
        let m = mercator(lon, lat);
        Point::new(
            self.translate.x + (m.x - self.center.x) * self.scale,
            self.translate.y - (m.y - self.center.y) * self.scale,
        )
    }
}
