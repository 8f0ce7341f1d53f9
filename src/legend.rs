//! Legend: one bar per category, sorted by total amount.
//!
//! The legend is laid out in screen space at a fixed offset and does not move
//! with the camera.

#[cfg(test)]
#[path = "legend_test.rs"]
mod legend_test;

use crate::camera::Point;
use crate::consts::{
    LEGEND_BAR_HEIGHT, LEGEND_GLYPH_WIDTH, LEGEND_LABEL_BASELINE, LEGEND_LABEL_GAP, LEGEND_ROW_HEIGHT, LEGEND_X,
    LEGEND_Y,
};
use crate::record::ExpenseRecord;
use crate::scale::BarScale;

/// One legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub category: String,
    /// Total amount of the category.
    pub sum: f64,
    /// Top-left of the bar in screen pixels.
    pub origin: Point,
    /// Bar width in screen pixels.
    pub bar_width: f64,
}

impl LegendRow {
    /// Left edge of the label text.
    #[must_use]
    pub fn label_x(&self) -> f64 {
        self.origin.x + self.bar_width + LEGEND_LABEL_GAP
    }

    /// Baseline of the label text.
    #[must_use]
    pub fn label_y(&self) -> f64 {
        self.origin.y + LEGEND_LABEL_BASELINE
    }

    /// Whether `screen` lies on the bar or its label.
    ///
    /// The label width is estimated from its character count.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn contains(&self, screen: Point) -> bool {
        let label_width = self.category.chars().count() as f64 * LEGEND_GLYPH_WIDTH;
        let right = self.label_x() + label_width;
        screen.x >= self.origin.x
            && screen.x <= right
            && screen.y >= self.origin.y
            && screen.y <= self.origin.y + LEGEND_BAR_HEIGHT
    }
}

/// The laid-out legend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    pub rows: Vec<LegendRow>,
}

impl Legend {
    /// Sum amounts per category and lay out rows, largest sum first.
    ///
    /// Ties keep first-appearance order.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn build(records: &[ExpenseRecord]) -> Self {
        let mut sums: Vec<(String, f64)> = Vec::new();
        for record in records {
            match sums.iter_mut().find(|(cat, _)| *cat == record.category) {
                Some((_, sum)) => *sum += record.amount,
                None => sums.push((record.category.clone(), record.amount)),
            }
        }
        sums.sort_by(|a, b| b.1.total_cmp(&a.1));

        let bars = BarScale::new(sums.iter().map(|(_, s)| *s).fold(0.0, f64::max));
        let rows = sums
            .into_iter()
            .enumerate()
            .map(|(i, (category, sum))| LegendRow {
                bar_width: bars.width(sum),
                origin: Point::new(LEGEND_X, LEGEND_Y + i as f64 * LEGEND_ROW_HEIGHT),
                category,
                sum,
            })
            .collect();
        Self { rows }
    }

    /// Index of the row under `screen`, if any.
    #[must_use]
    pub fn index_at(&self, screen: Point) -> Option<usize> {
        self.rows.iter().position(|row| row.contains(screen))
    }

    /// The row for `category`, if any.
    #[must_use]
    pub fn row(&self, category: &str) -> Option<&LegendRow> {
        self.rows.iter().find(|row| row.category == category)
    }
}
