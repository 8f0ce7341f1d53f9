#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn inside(p: Point, width: f64, height: f64) -> bool {
    p.x >= -EPSILON && p.x <= width + EPSILON && p.y >= -EPSILON && p.y <= height + EPSILON
}

// =============================================================
// mercator
// =============================================================

#[test]
fn mercator_origin() {
    let p = mercator(0.0, 0.0);
    assert!(approx_eq(p.x, 0.0));
    assert!(approx_eq(p.y, 0.0));
}

#[test]
fn mercator_north_is_positive() {
    assert!(mercator(0.0, 45.0).y > 0.0);
    assert!(mercator(0.0, -45.0).y < 0.0);
}

#[test]
fn mercator_clamps_poles() {
    assert!(mercator(0.0, 90.0).y.is_finite());
    assert_eq!(mercator(0.0, 90.0), mercator(0.0, MAX_LATITUDE));
}

#[test]
fn mercator_longitude_is_linear() {
    assert!(approx_eq(mercator(180.0, 0.0).x, std::f64::consts::PI));
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_of_empty_is_none() {
    assert!(Bounds::of(&[]).is_none());
}

#[test]
fn bounds_cover_all_points() {
    let b = Bounds::of(&[(8.0, 47.0), (-74.0, 40.7), (139.7, 35.7)]).unwrap();
    assert!(approx_eq(b.min.x, (-74.0_f64).to_radians()));
    assert!(approx_eq(b.max.x, 139.7_f64.to_radians()));
    assert!(approx_eq(b.max.y, mercator(0.0, 47.0).y));
    assert!(approx_eq(b.min.y, mercator(0.0, 35.7).y));
}

// =============================================================
// fit
// =============================================================

#[test]
fn fit_keeps_points_inside_viewport() {
    let sets: [&[(f64, f64)]; 4] = [
        &[(8.0, 47.0), (-74.0, 40.7), (139.7, 35.7), (151.2, -33.9)],
        &[(7.4, 46.9), (8.5, 47.4)],
        &[(-179.0, -80.0), (179.0, 84.0)],
        &[(0.0, 0.0), (0.0, 60.0)],
    ];
    for coords in sets {
        for (w, h) in [(800.0, 600.0), (320.0, 640.0), (1920.0, 300.0)] {
            let proj = Projection::fit(coords, w, h);
            for &(lon, lat) in coords {
                let p = proj.project(lon, lat);
                assert!(inside(p, w, h), "({lon}, {lat}) -> {p:?} outside {w}x{h}");
            }
        }
    }
}

#[test]
fn fit_uses_95_percent_of_limiting_axis() {
    // Wide horizontal spread: width is the limiting axis.
    let coords = [(-100.0, 10.0), (100.0, 12.0)];
    let proj = Projection::fit(&coords, 1000.0, 1000.0);
    let a = proj.project(-100.0, 10.0);
    let b = proj.project(100.0, 12.0);
    assert!(approx_eq(b.x - a.x, 950.0));
}

#[test]
fn fit_centers_bounds_midpoint() {
    let coords = [(0.0, 0.0), (20.0, 0.0)];
    let proj = Projection::fit(&coords, 400.0, 200.0);
    let a = proj.project(0.0, 0.0);
    let b = proj.project(20.0, 0.0);
    assert!(approx_eq((a.x + b.x) / 2.0, 200.0));
    assert!(approx_eq(a.y, 100.0));
}

#[test]
fn fit_single_point_is_finite_and_centered() {
    let proj = Projection::fit(&[(8.0, 47.0)], 800.0, 600.0);
    assert!(proj.scale.is_finite());
    assert!(proj.scale > 0.0);
    let p = proj.project(8.0, 47.0);
    assert!(approx_eq(p.x, 400.0));
    assert!(approx_eq(p.y, 300.0));
}

#[test]
fn fit_identical_points_is_finite() {
    let proj = Projection::fit(&[(8.0, 47.0), (8.0, 47.0), (8.0, 47.0)], 800.0, 600.0);
    assert!(proj.scale.is_finite());
    assert_eq!(proj.scale, Projection::fit(&[(8.0, 47.0)], 800.0, 600.0).scale);
}

#[test]
fn fit_empty_covers_world() {
    let proj = Projection::fit(&[], 800.0, 600.0);
    let west = proj.project(-180.0, 0.0);
    let east = proj.project(180.0, 0.0);
    assert!(inside(west, 800.0, 600.0));
    assert!(inside(east, 800.0, 600.0));
}

#[test]
fn fit_zero_viewport_is_clamped() {
    let proj = Projection::fit(&[(0.0, 0.0), (10.0, 10.0)], 0.0, 0.0);
    assert!(proj.scale.is_finite());
    assert!(proj.scale > 0.0);
}

#[test]
fn north_is_up_on_screen() {
    let proj = Projection::fit(&[(0.0, 40.0), (0.0, 50.0)], 500.0, 500.0);
    assert!(proj.project(0.0, 50.0).y < proj.project(0.0, 40.0).y);
}
