//! Input model: pointer events and the gesture state machine.
//!
//! `InputState` tracks the gesture in progress between pointer-down and
//! pointer-up and turns raw pointer events into [`Gesture`]s: a click, a drag
//! pan, a two-finger pinch, or a hover move. A press only becomes a click if
//! the pointer stays within [`CLICK_SLOP_PX`] of where it went down; anything
//! further is a pan and never a click.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::CLICK_SLOP_PX;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value. Unknown values map to `Secondary`.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            _ => Self::Secondary,
        }
    }
}

/// A pointer event as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// DOM pointer id; distinguishes fingers.
    pub id: i32,
    /// Position relative to the canvas, in CSS pixels.
    pub screen: Point,
    /// Position relative to the page, used to place the tooltip.
    pub page: Point,
    pub button: Button,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// A pointer tracked during a pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedPointer {
    pub id: i32,
    pub screen: Point,
}

/// What a pointer event amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Nothing to do.
    None,
    /// Pointer moved with no button held.
    Hover,
    /// Press and release without dragging.
    Click,
    /// Drag by a screen-space delta.
    Pan { dx: f64, dy: f64 },
    /// Two-finger pinch: pan by the midpoint delta, then zoom by `factor` about `anchor`.
    Pinch { anchor: Point, factor: f64, dx: f64, dy: f64 },
}

/// State of the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No pointer held.
    #[default]
    Idle,
    /// One pointer held.
    Pressed {
        id: i32,
        /// Where the press started; decides click vs. drag.
        origin: Point,
        /// Position at the previous event, for pan deltas.
        last: Point,
        /// Whether the press has moved beyond the click slop.
        dragging: bool,
    },
    /// Two pointers held.
    Pinching { a: TrackedPointer, b: TrackedPointer },
}

impl InputState {
    pub fn pointer_down(&mut self, input: &PointerInput) -> Gesture {
        match *self {
            Self::Idle if input.button == Button::Primary => {
                *self = Self::Pressed { id: input.id, origin: input.screen, last: input.screen, dragging: false };
            }
            Self::Pressed { id, last, .. } if id != input.id => {
                *self = Self::Pinching {
                    a: TrackedPointer { id, screen: last },
                    b: TrackedPointer { id: input.id, screen: input.screen },
                };
            }
            _ => {}
        }
        Gesture::None
    }

    pub fn pointer_move(&mut self, input: &PointerInput) -> Gesture {
        match *self {
            Self::Idle => Gesture::Hover,
            Self::Pressed { id, origin, last, dragging } if id == input.id => {
                let dragging = dragging || input.screen.distance(origin) > CLICK_SLOP_PX;
                if !dragging {
                    return Gesture::None;
                }
                *self = Self::Pressed { id, origin, last: input.screen, dragging };
                Gesture::Pan { dx: input.screen.x - last.x, dy: input.screen.y - last.y }
            }
            Self::Pinching { a, b } => {
                let (new_a, new_b) = if a.id == input.id {
                    (TrackedPointer { id: a.id, screen: input.screen }, b)
                } else if b.id == input.id {
                    (a, TrackedPointer { id: b.id, screen: input.screen })
                } else {
                    return Gesture::None;
                };
                *self = Self::Pinching { a: new_a, b: new_b };

                let old_mid = a.screen.midpoint(b.screen);
                let new_mid = new_a.screen.midpoint(new_b.screen);
                let old_dist = a.screen.distance(b.screen);
                let new_dist = new_a.screen.distance(new_b.screen);
                let factor = if old_dist > 0.0 && new_dist > 0.0 { new_dist / old_dist } else { 1.0 };
                Gesture::Pinch { anchor: new_mid, factor, dx: new_mid.x - old_mid.x, dy: new_mid.y - old_mid.y }
            }
            Self::Pressed { .. } => Gesture::None,
        }
    }

    pub fn pointer_up(&mut self, input: &PointerInput) -> Gesture {
        match *self {
            Self::Pressed { id, dragging, .. } if id == input.id => {
                *self = Self::Idle;
                if dragging { Gesture::None } else { Gesture::Click }
            }
            Self::Pinching { a, b } => {
                let remaining = if a.id == input.id {
                    b
                } else if b.id == input.id {
                    a
                } else {
                    return Gesture::None;
                };
                // The finger left on the glass continues as a drag, never a click.
                *self = Self::Pressed {
                    id: remaining.id,
                    origin: remaining.screen,
                    last: remaining.screen,
                    dragging: true,
                };
                Gesture::None
            }
            _ => Gesture::None,
        }
    }

    /// Abort any gesture (pointer cancel or leaving the canvas).
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
