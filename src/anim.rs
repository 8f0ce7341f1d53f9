//! Fire-and-forget tweens.
//!
//! A tween is a value moving from `from` to `to` over a duration. Retargeting
//! starts a new tween from wherever the old one currently is, so interrupted
//! transitions never jump. Nothing waits for a tween to finish; the frame loop
//! simply keeps drawing while any tween is running.

#[cfg(test)]
#[path = "anim_test.rs"]
mod anim_test;

use crate::camera::Point;

/// Cubic ease-in-out on `t` in [0, 1].
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl Tween {
    /// A tween resting at `value`.
    #[must_use]
    pub fn settled(value: f64) -> Self {
        Self { from: value, to: value, start_ms: 0.0, duration_ms: 0.0 }
    }

    /// Value at time `now_ms`. Exactly `to` once the duration has elapsed.
    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.start_ms;
        if self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            return self.to;
        }
        if elapsed <= 0.0 {
            return self.from;
        }
        let k = ease_cubic_in_out(elapsed / self.duration_ms);
        self.from + (self.to - self.from) * k
    }

    /// The value this tween is heading to.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the value is still changing at `now_ms`.
    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        self.from.to_bits() != self.to.to_bits() && now_ms - self.start_ms < self.duration_ms
    }

    /// Head towards `to` over `duration_ms`, starting from the current value.
    ///
    /// Retargeting to the current target leaves a running tween untouched.
    pub fn retarget(&mut self, now_ms: f64, to: f64, duration_ms: f64) {
        if to.to_bits() == self.to.to_bits() {
            return;
        }
        let from = self.value_at(now_ms);
        *self = Self { from, to, start_ms: now_ms, duration_ms };
    }

    /// Jump to `value` without animating.
    pub fn jump(&mut self, value: f64) {
        *self = Self::settled(value);
    }
}

/// Animated position and opacity of one circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedPoint {
    pub x: Tween,
    pub y: Tween,
    pub opacity: Tween,
}

impl AnimatedPoint {
    #[must_use]
    pub fn settled(position: Point, opacity: f64) -> Self {
        Self { x: Tween::settled(position.x), y: Tween::settled(position.y), opacity: Tween::settled(opacity) }
    }

    #[must_use]
    pub fn position_at(&self, now_ms: f64) -> Point {
        Point::new(self.x.value_at(now_ms), self.y.value_at(now_ms))
    }

    #[must_use]
    pub fn target_position(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn move_to(&mut self, now_ms: f64, target: Point, duration_ms: f64) {
        self.x.retarget(now_ms, target.x, duration_ms);
        self.y.retarget(now_ms, target.y, duration_ms);
    }

    pub fn jump_to(&mut self, target: Point) {
        self.x.jump(target.x);
        self.y.jump(target.y);
    }

    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        self.x.is_running(now_ms) || self.y.is_running(now_ms) || self.opacity.is_running(now_ms)
    }
}
