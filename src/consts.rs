//! Shared numeric constants and colors for the map.

// ── Projection ──────────────────────────────────────────────────

/// Fraction of the viewport the fitted point bounds may occupy.
pub const FIT_MARGIN: f64 = 0.95;

/// Smallest bounding-box extent (Mercator units) used when fitting.
///
/// A single point, or several points on one meridian or parallel, would
/// otherwise produce an infinite scale.
pub const MIN_FIT_EXTENT: f64 = 0.01;

/// Latitude limit of the Mercator projection in degrees.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

// ── Camera ──────────────────────────────────────────────────────

/// Minimum zoom factor.
pub const ZOOM_MIN: f64 = 0.3;

/// Maximum zoom factor.
pub const ZOOM_MAX: f64 = 10.0;

/// Wheel delta (pixels) to log2 zoom factor.
pub const WHEEL_ZOOM_RATE: f64 = 0.002;

// ── Input ───────────────────────────────────────────────────────

/// Pointer travel in screen pixels before a press becomes a drag.
pub const CLICK_SLOP_PX: f64 = 3.0;

// ── Radius / color scales ───────────────────────────────────────

/// Circle radius for an amount of zero, in screen pixels.
pub const RADIUS_MIN_PX: f64 = 4.0;

/// Circle radius for the largest amount, in screen pixels.
pub const RADIUS_MAX_PX: f64 = 20.0;

/// Default category palette.
pub const PASTEL_COLORS: [&str; 11] = [
    "#AEC6CF", "#FFB347", "#B39EB5", "#77DD77", "#FF6961", "#FDFD96", "#CFCFC4", "#B0E0E6", "#D8BFD8", "#E6E6FA",
    "#F5CBA7",
];

// ── Spread ──────────────────────────────────────────────────────

/// Largest nest laid out on a circle; bigger nests use a spiral.
pub const RING_MAX_POINTS: usize = 10;

/// Gap between the nest center and the ring, added to the largest radius.
pub const RING_BASE_GAP_PX: f64 = 25.0;

/// Spiral radius growth per radian, in screen pixels.
pub const SPIRAL_SPACING_PX: f64 = 12.0;

/// Angle between consecutive spiral points in radians.
pub const SPIRAL_ANGLE_STEP: f64 = 0.5;

/// Smallest zoom the spread divides by.
pub const SPREAD_MIN_ZOOM: f64 = 1e-3;

// ── Opacity ─────────────────────────────────────────────────────

pub const OPACITY_DEFAULT: f64 = 0.7;
pub const OPACITY_ACTIVE: f64 = 0.8;
pub const OPACITY_PREVIEW: f64 = 0.6;
pub const OPACITY_HOVER_OTHER: f64 = 0.1;
pub const OPACITY_HOVER_SECONDARY: f64 = 0.5;
pub const OPACITY_NEST_MEMBER: f64 = 1.0;
pub const OPACITY_NEST_OTHER: f64 = 0.05;
pub const MAP_OPACITY_DEFAULT: f64 = 1.0;
pub const MAP_OPACITY_DIMMED: f64 = 0.1;

// ── Animation durations (ms) ────────────────────────────────────

pub const RESTYLE_MS: f64 = 200.0;
pub const EXPLODE_FADE_MS: f64 = 300.0;
pub const EXPLODE_MOVE_MS: f64 = 400.0;
pub const COLLAPSE_MS: f64 = 400.0;
pub const TOOLTIP_FADE_IN_MS: f64 = 200.0;
pub const TOOLTIP_FADE_OUT_MS: f64 = 300.0;

// ── Tooltip ─────────────────────────────────────────────────────

/// Tooltip offset from the pointer, in page pixels.
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -28.0;

pub const TOOLTIP_OPACITY_POINTER: f64 = 0.8;
pub const TOOLTIP_OPACITY_TOUCH: f64 = 0.9;

// ── Legend ──────────────────────────────────────────────────────

/// Legend origin in screen pixels.
pub const LEGEND_X: f64 = 30.0;
pub const LEGEND_Y: f64 = 30.0;
pub const LEGEND_ROW_HEIGHT: f64 = 30.0;
pub const LEGEND_BAR_HEIGHT: f64 = 20.0;
pub const LEGEND_BAR_MIN: f64 = 5.0;
pub const LEGEND_BAR_MAX: f64 = 200.0;
pub const LEGEND_LABEL_GAP: f64 = 8.0;
pub const LEGEND_LABEL_BASELINE: f64 = 14.0;
pub const LEGEND_FONT_PX: f64 = 13.0;

/// Average glyph advance used to size label hit boxes without a canvas.
pub const LEGEND_GLYPH_WIDTH: f64 = 7.0;

// ── Colors ──────────────────────────────────────────────────────

pub const BACKGROUND_COLOR: &str = "#0A1721";
pub const LAND_FILL: &str = "#142F43";
pub const LAND_STROKE: &str = "#738693";
pub const LAND_STROKE_WIDTH: f64 = 0.4;
pub const LEGEND_LABEL_COLOR: &str = "#c4c4cc";
