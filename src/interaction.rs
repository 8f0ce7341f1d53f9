//! Interaction state and the per-device interaction strategies.
//!
//! [`InteractionState`] is the only persistent UI state. It is mutated by an
//! [`InteractionStrategy`] in response to a single tap/click at a time, and
//! everything visible (opacity, visibility, spread positions) is derived from
//! it by pure functions in [`crate::style`] and [`crate::spread`].
//!
//! Pointer devices act on the first click and use hover for previews. Touch
//! devices have no hover, so the first tap previews and a second tap on the
//! same target confirms.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use crate::consts::{TOOLTIP_OPACITY_POINTER, TOOLTIP_OPACITY_TOUCH};
use crate::nest::NestKey;

/// Persistent interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    /// Category filtering visibility.
    pub active_category: Option<String>,
    /// Category highlighted by a first tap (touch only).
    pub preview_category: Option<String>,
    /// Nest currently spread out.
    pub exploded_nest: Option<NestKey>,
    /// Nest selected by a first tap (touch only).
    pub previewed_nest: Option<NestKey>,
    /// Current camera zoom, used to keep spread spacing constant on screen.
    pub zoom_level: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            active_category: None,
            preview_category: None,
            exploded_nest: None,
            previewed_nest: None,
            zoom_level: 1.0,
        }
    }
}

/// Coarse phase of the state machine, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    CategoryActive,
    CategoryPreviewed,
    NestExploded,
    NestPreviewed,
}

impl InteractionState {
    /// The dominant phase. Nest state outranks category state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.exploded_nest.is_some() {
            Phase::NestExploded
        } else if self.previewed_nest.is_some() {
            Phase::NestPreviewed
        } else if self.active_category.is_some() {
            Phase::CategoryActive
        } else if self.preview_category.is_some() {
            Phase::CategoryPreviewed
        } else {
            Phase::Idle
        }
    }

    /// Background click: clear everything except the zoom level.
    pub fn reset(&mut self) {
        *self = Self { zoom_level: self.zoom_level, ..Self::default() };
    }
}

/// What a tap on a point did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointTap {
    /// Nothing changed.
    Ignored,
    /// Show the tapped point's tooltip; layout unchanged.
    ShowTooltip,
    /// The nest was spread out.
    Exploded,
    /// The nest was folded back.
    Collapsed,
}

/// Hover target on pointer devices. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Hover {
    /// Record index under the pointer.
    Point(usize),
    /// Legend category under the pointer.
    Legend(String),
}

/// Device-specific reaction to taps.
pub trait InteractionStrategy {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Whether pointer hover drives tooltips and highlighting.
    fn hover_enabled(&self) -> bool;

    /// Opacity of a shown tooltip.
    fn tooltip_opacity(&self) -> f64;

    /// A legend row for `category` was tapped.
    ///
    /// Implementations may also clear nest state; the engine collapses any
    /// nest that is no longer exploded.
    fn legend_tapped(&self, state: &mut InteractionState, category: &str);

    /// A point belonging to nest `key` of `nest_size` members was tapped.
    fn point_tapped(&self, state: &mut InteractionState, key: NestKey, nest_size: usize) -> PointTap;
}

/// Mouse/trackpad interaction: act on the first click.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerStrategy;

impl InteractionStrategy for PointerStrategy {
    fn name(&self) -> &'static str {
        "pointer"
    }

    fn hover_enabled(&self) -> bool {
        true
    }

    fn tooltip_opacity(&self) -> f64 {
        TOOLTIP_OPACITY_POINTER
    }

    fn legend_tapped(&self, state: &mut InteractionState, category: &str) {
        if state.active_category.as_deref() == Some(category) {
            state.active_category = None;
        } else {
            state.active_category = Some(category.to_string());
        }
        // A legend click also collapses the open nest and drops previews.
        state.exploded_nest = None;
        state.previewed_nest = None;
        state.preview_category = None;
    }

    fn point_tapped(&self, state: &mut InteractionState, key: NestKey, nest_size: usize) -> PointTap {
        if nest_size <= 1 {
            return PointTap::Ignored;
        }
        if state.exploded_nest == Some(key) {
            state.exploded_nest = None;
            PointTap::Collapsed
        } else {
            state.exploded_nest = Some(key);
            PointTap::Exploded
        }
    }
}

/// Touch interaction: first tap previews, second tap on the same target confirms.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchStrategy;

impl InteractionStrategy for TouchStrategy {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn hover_enabled(&self) -> bool {
        false
    }

    fn tooltip_opacity(&self) -> f64 {
        TOOLTIP_OPACITY_TOUCH
    }

    fn legend_tapped(&self, state: &mut InteractionState, category: &str) {
        if state.preview_category.as_deref() == Some(category) {
            state.active_category = Some(category.to_string());
            state.preview_category = None;
        } else {
            state.preview_category = Some(category.to_string());
        }
    }

    fn point_tapped(&self, state: &mut InteractionState, key: NestKey, nest_size: usize) -> PointTap {
        if nest_size <= 1 {
            return PointTap::ShowTooltip;
        }
        if state.previewed_nest == Some(key) {
            state.exploded_nest = Some(key);
            state.previewed_nest = None;
            PointTap::Exploded
        } else {
            state.previewed_nest = Some(key);
            PointTap::ShowTooltip
        }
    }
}
