//! Tooltip content and placement.
//!
//! The host page owns the tooltip element; the engine only decides what it
//! says, where it sits, and how it fades.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use crate::camera::Point;
use crate::consts::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};
use crate::record::ExpenseRecord;

/// A tooltip to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Inner HTML; all record text is escaped.
    pub html: String,
    /// Top-left corner in page pixels.
    pub position: Point,
    pub opacity: f64,
    pub fade_ms: f64,
}

/// Tooltip position for a pointer at `page`.
#[must_use]
pub fn placement(page: Point) -> Point {
    Point::new(page.x + TOOLTIP_OFFSET_X, page.y + TOOLTIP_OFFSET_Y)
}

/// Tooltip body for one expense.
#[must_use]
pub fn record_html(record: &ExpenseRecord, currency: &str) -> String {
    format!(
        "<strong>{}</strong><br>{}<br><em>{}</em><br>{} {}",
        escape(&record.description),
        escape(&record.location),
        escape(&record.category),
        record.amount,
        escape(currency),
    )
}

/// Tooltip body for a legend category.
#[must_use]
pub fn category_html(category: &str, sum: f64, currency: &str) -> String {
    format!("<strong>{}</strong><br>{sum:.2} {}", escape(category), escape(currency))
}

/// Escape text for inclusion in HTML.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
