//! Visibility and opacity derived from interaction state.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::consts::{
    MAP_OPACITY_DEFAULT, MAP_OPACITY_DIMMED, OPACITY_ACTIVE, OPACITY_DEFAULT, OPACITY_HOVER_OTHER,
    OPACITY_HOVER_SECONDARY, OPACITY_NEST_MEMBER, OPACITY_NEST_OTHER, OPACITY_PREVIEW,
};
use crate::interaction::{Hover, InteractionState};
use crate::nest::NestKey;

/// How one point should look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    /// Hidden points are neither drawn nor hit-tested.
    pub visible: bool,
    pub opacity: f64,
}

/// Style of a point with `category` in nest `nest`.
///
/// An exploded nest decides opacity; otherwise a hovered legend row does;
/// otherwise the active, then previewed category.
#[must_use]
pub fn point_style(category: &str, nest: NestKey, state: &InteractionState, hover: Option<&Hover>) -> PointStyle {
    let hovered = match hover {
        Some(Hover::Legend(cat)) => Some(cat.as_str()),
        _ => None,
    };
    let active = state.active_category.as_deref();
    let preview = state.preview_category.as_deref();

    let visible = match (active, hovered, preview) {
        (Some(a), Some(h), _) => category == a || category == h,
        (Some(a), None, _) => category == a,
        (None, Some(_), _) => true,
        (None, None, Some(p)) => category == p,
        (None, None, None) => true,
    };

    let opacity = if let Some(exploded) = state.exploded_nest {
        if exploded == nest { OPACITY_NEST_MEMBER } else { OPACITY_NEST_OTHER }
    } else {
        match (active, hovered, preview) {
            (None, Some(h), _) => {
                if category == h {
                    OPACITY_ACTIVE
                } else {
                    OPACITY_HOVER_OTHER
                }
            }
            (Some(a), Some(_), _) => {
                if category == a {
                    OPACITY_ACTIVE
                } else {
                    OPACITY_HOVER_SECONDARY
                }
            }
            (Some(_), None, _) => OPACITY_ACTIVE,
            (None, None, Some(_)) => OPACITY_PREVIEW,
            (None, None, None) => OPACITY_DEFAULT,
        }
    };

    PointStyle { visible, opacity }
}

/// Opacity of the base map.
#[must_use]
pub fn map_opacity(state: &InteractionState) -> f64 {
    if state.exploded_nest.is_some() { MAP_OPACITY_DIMMED } else { MAP_OPACITY_DEFAULT }
}
