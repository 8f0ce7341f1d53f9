#![allow(clippy::float_cmp)]

use std::f64::consts::TAU;

use super::*;
use crate::projection::Projection;
use crate::scale::RadiusScale;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn constant_radius(_: f64) -> f64 {
    5.0
}

fn angle_of(p: Point, center: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x).rem_euclid(TAU)
}

// =============================================================
// Degenerate sizes
// =============================================================

#[test]
fn empty_nest_has_no_positions() {
    assert!(spread(&[], Point::new(0.0, 0.0), 1.0, constant_radius).is_empty());
}

#[test]
fn single_point_stays_at_center() {
    let c = Point::new(3.0, 4.0);
    assert_eq!(spread(&[10.0], c, 1.0, constant_radius), vec![c]);
}

// =============================================================
// Ring
// =============================================================

#[test]
fn ring_points_are_equidistant_and_evenly_spaced() {
    let center = Point::new(100.0, 50.0);
    for n in 2..=RING_MAX_POINTS {
        let amounts: Vec<f64> = (1..=n).map(|i| i as f64).collect();
        let points = spread(&amounts, center, 1.0, constant_radius);
        assert_eq!(points.len(), n);
        for (i, p) in points.iter().enumerate() {
            assert!(approx_eq(p.distance(center), RING_BASE_GAP_PX + 5.0));
            let expected = TAU / n as f64 * i as f64;
            assert!(approx_eq(angle_of(*p, center), expected), "n={n} i={i}");
        }
    }
}

#[test]
fn ring_radius_uses_largest_amount() {
    let radius = |a: f64| a / 2.0;
    let points = spread(&[4.0, 40.0, 10.0], Point::new(0.0, 0.0), 1.0, radius);
    for p in points {
        assert!(approx_eq(p.distance(Point::new(0.0, 0.0)), 25.0 + 20.0));
    }
}

#[test]
fn ring_radius_shrinks_with_zoom() {
    let c = Point::new(0.0, 0.0);
    let at_1 = spread(&[1.0, 1.0], c, 1.0, constant_radius);
    let at_4 = spread(&[1.0, 1.0], c, 4.0, constant_radius);
    assert!(approx_eq(at_4[0].distance(c) * 4.0, at_1[0].distance(c)));
}

#[test]
fn three_records_at_same_location_example() {
    let amounts = [10.0, 20.0, 30.0];
    let projection = Projection::fit(&[(8.0, 47.0)], 800.0, 600.0);
    let scale = RadiusScale::new(30.0);
    let center = projection.project(8.0, 47.0);

    let points = spread(&amounts, center, 1.0, |a| scale.radius(a));

    assert_eq!(points.len(), 3);
    let expected_radius = 25.0 + scale.radius(30.0);
    for (i, p) in points.iter().enumerate() {
        assert!(approx_eq(p.distance(center), expected_radius));
        assert!(approx_eq(angle_of(*p, center), (120.0 * i as f64).to_radians()));
    }
}

// =============================================================
// Spiral
// =============================================================

#[test]
fn spiral_distance_increases_monotonically() {
    let center = Point::new(-20.0, 35.0);
    for n in [11, 12, 25, 60] {
        let amounts = vec![1.0; n];
        let points = spread(&amounts, center, 1.0, constant_radius);
        assert_eq!(points.len(), n);
        let distances: Vec<f64> = points.iter().map(|p| p.distance(center)).collect();
        for pair in distances.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}

#[test]
fn spiral_follows_archimedean_formula() {
    let center = Point::new(0.0, 0.0);
    let points = spread(&[1.0; 11], center, 2.0, constant_radius);
    assert_eq!(points[0], center);
    // Point 4: angle 2.0 rad, radius (12 / 2) * 2.0 = 12.
    assert!(approx_eq(points[4].distance(center), 12.0));
    assert!(approx_eq(points[4].x, 12.0 * 2.0_f64.cos()));
    assert!(approx_eq(points[4].y, 12.0 * 2.0_f64.sin()));
}

#[test]
fn spiral_ignores_amounts() {
    let c = Point::new(0.0, 0.0);
    let small = spread(&[1.0; 15], c, 1.0, constant_radius);
    let large = spread(&[1000.0; 15], c, 1.0, |a| a);
    assert_eq!(small, large);
}

// =============================================================
// Purity
// =============================================================

#[test]
fn spread_is_idempotent() {
    let c = Point::new(12.0, 34.0);
    let amounts = [5.0, 7.0, 9.0, 11.0];
    let a = spread(&amounts, c, 1.7, constant_radius);
    let b = spread(&amounts, c, 1.7, constant_radius);
    assert_eq!(a, b);
}

#[test]
fn zero_zoom_is_clamped() {
    let points = spread(&[1.0, 2.0], Point::new(0.0, 0.0), 0.0, constant_radius);
    assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}
