//! Radius, color and bar-width scales.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use std::collections::HashMap;

use crate::consts::{LEGEND_BAR_MAX, LEGEND_BAR_MIN, RADIUS_MAX_PX, RADIUS_MIN_PX};
use crate::record::ExpenseRecord;

/// Square-root scale from amount to circle radius in screen pixels.
///
/// The domain is `[0, max amount]`, the range `[RADIUS_MIN_PX, RADIUS_MAX_PX]`,
/// so circle area grows linearly with amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    max_amount: f64,
}

impl RadiusScale {
    #[must_use]
    pub fn new(max_amount: f64) -> Self {
        Self { max_amount }
    }

    /// Scale fitted to the largest amount in `records`.
    #[must_use]
    pub fn for_records(records: &[ExpenseRecord]) -> Self {
        Self::new(records.iter().map(|r| r.amount).fold(0.0, f64::max))
    }

    /// Radius for `amount`. Negative amounts get the minimum radius.
    ///
    /// A degenerate domain (largest amount zero) maps everything to the range midpoint.
    #[must_use]
    pub fn radius(&self, amount: f64) -> f64 {
        if self.max_amount <= 0.0 {
            return (RADIUS_MIN_PX + RADIUS_MAX_PX) / 2.0;
        }
        let t = (amount.max(0.0) / self.max_amount).sqrt();
        RADIUS_MIN_PX + t * (RADIUS_MAX_PX - RADIUS_MIN_PX)
    }
}

/// Ordinal scale from category to palette color.
///
/// Categories are assigned colors in order of first appearance; the palette
/// repeats when there are more categories than colors.
#[derive(Debug, Clone, Default)]
pub struct ColorScale {
    colors: HashMap<String, String>,
    categories: Vec<String>,
}

impl ColorScale {
    #[must_use]
    pub fn new(records: &[ExpenseRecord], palette: &[String]) -> Self {
        let mut scale = Self::default();
        if palette.is_empty() {
            return scale;
        }
        for record in records {
            if scale.colors.contains_key(&record.category) {
                continue;
            }
            let color = palette[scale.categories.len() % palette.len()].clone();
            scale.colors.insert(record.category.clone(), color);
            scale.categories.push(record.category.clone());
        }
        scale
    }

    /// Color for `category`, or black for a category not seen at construction.
    #[must_use]
    pub fn color(&self, category: &str) -> &str {
        self.colors.get(category).map_or("#000000", String::as_str)
    }
}

/// Linear scale from a category sum to legend bar width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarScale {
    max_sum: f64,
}

impl BarScale {
    #[must_use]
    pub fn new(max_sum: f64) -> Self {
        Self { max_sum }
    }

    #[must_use]
    pub fn width(&self, sum: f64) -> f64 {
        if self.max_sum == 0.0 {
            return (LEGEND_BAR_MIN + LEGEND_BAR_MAX) / 2.0;
        }
        LEGEND_BAR_MIN + (sum / self.max_sum) * (LEGEND_BAR_MAX - LEGEND_BAR_MIN)
    }
}
