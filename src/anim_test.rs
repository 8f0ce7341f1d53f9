#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Easing
// =============================================================

#[test]
fn easing_endpoints_and_midpoint() {
    assert_eq!(ease_cubic_in_out(0.0), 0.0);
    assert_eq!(ease_cubic_in_out(1.0), 1.0);
    assert!(approx_eq(ease_cubic_in_out(0.5), 0.5));
}

#[test]
fn easing_is_monotonic_and_clamped() {
    let mut last = -1.0;
    for i in 0..=20 {
        let v = ease_cubic_in_out(f64::from(i) / 20.0);
        assert!(v >= last);
        last = v;
    }
    assert_eq!(ease_cubic_in_out(-3.0), 0.0);
    assert_eq!(ease_cubic_in_out(7.0), 1.0);
}

// =============================================================
// Tween
// =============================================================

#[test]
fn settled_tween_is_constant() {
    let t = Tween::settled(0.7);
    assert_eq!(t.value_at(0.0), 0.7);
    assert_eq!(t.value_at(1e9), 0.7);
    assert!(!t.is_running(0.0));
}

#[test]
fn retarget_interpolates_and_lands_exactly() {
    let mut t = Tween::settled(0.0);
    t.retarget(1000.0, 10.0, 400.0);
    assert_eq!(t.value_at(1000.0), 0.0);
    assert!(approx_eq(t.value_at(1200.0), 5.0));
    assert_eq!(t.value_at(1400.0), 10.0);
    assert_eq!(t.value_at(5000.0), 10.0);
    assert!(t.is_running(1399.0));
    assert!(!t.is_running(1400.0));
}

#[test]
fn retarget_mid_flight_starts_from_current_value() {
    let mut t = Tween::settled(0.0);
    t.retarget(0.0, 10.0, 400.0);
    let mid = t.value_at(200.0);
    t.retarget(200.0, 0.0, 400.0);
    assert!(approx_eq(t.value_at(200.0), mid));
    assert_eq!(t.value_at(600.0), 0.0);
}

#[test]
fn retarget_same_target_keeps_running_tween() {
    let mut t = Tween::settled(0.0);
    t.retarget(0.0, 1.0, 400.0);
    let before = t;
    t.retarget(300.0, 1.0, 400.0);
    assert_eq!(t, before);
}

#[test]
fn zero_duration_jumps() {
    let mut t = Tween::settled(1.0);
    t.retarget(50.0, 0.05, 0.0);
    assert_eq!(t.value_at(50.0), 0.05);
    assert!(!t.is_running(50.0));
}

#[test]
fn jump_cancels_running_tween() {
    let mut t = Tween::settled(0.0);
    t.retarget(0.0, 10.0, 400.0);
    t.jump(3.0);
    assert_eq!(t.value_at(100.0), 3.0);
    assert_eq!(t.target(), 3.0);
}

// =============================================================
// AnimatedPoint
// =============================================================

#[test]
fn animated_point_moves_and_returns_exactly() {
    let origin = Point::new(123.456_789, -98.765_432_1);
    let mut p = AnimatedPoint::settled(origin, 0.7);
    p.move_to(0.0, Point::new(150.0, -60.0), 400.0);
    assert!(p.is_running(100.0));
    p.move_to(250.0, origin, 400.0);
    assert_eq!(p.position_at(650.0), origin);
    assert!(!p.is_running(650.0));
}

#[test]
fn animated_point_target_and_jump() {
    let mut p = AnimatedPoint::settled(Point::new(0.0, 0.0), 1.0);
    p.move_to(0.0, Point::new(4.0, 8.0), 300.0);
    assert_eq!(p.target_position(), Point::new(4.0, 8.0));
    p.jump_to(Point::new(1.0, 1.0));
    assert_eq!(p.position_at(10.0), Point::new(1.0, 1.0));
}

#[test]
fn animated_point_opacity_counts_as_running() {
    let mut p = AnimatedPoint::settled(Point::new(0.0, 0.0), 0.7);
    p.opacity.retarget(0.0, 0.05, 300.0);
    assert!(p.is_running(100.0));
    assert!(!p.is_running(300.0));
}
