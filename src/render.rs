//! Rendering: draws the map scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the engine state at its current clock and never mutates it.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    BACKGROUND_COLOR, LAND_FILL, LAND_STROKE, LAND_STROKE_WIDTH, LEGEND_BAR_HEIGHT, LEGEND_FONT_PX, LEGEND_LABEL_COLOR,
};
use crate::engine::EngineCore;
use crate::legend::Legend;
use crate::scale::ColorScale;
use crate::world::ProjectedShape;

/// Draw the full scene: background, map, circles, legend.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let camera = core.camera();

    // Layer 1: background in screen space.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    // Layer 2: world, under the camera.
    ctx.save();
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    ctx.set_global_alpha(core.map_opacity.value_at(core.now_ms));
    draw_land(ctx, &core.shapes);

    // Layer 3: circles in data order.
    for (index, record) in core.records.iter().enumerate() {
        if !core.style_of(index).visible {
            continue;
        }
        let (Some(center), Some(opacity)) = (core.position(index), core.opacity(index)) else {
            continue;
        };
        let radius = core.radius.radius(record.amount) / camera.zoom;
        ctx.set_global_alpha(opacity);
        ctx.set_fill_style_str(core.colors.color(&record.category));
        ctx.begin_path();
        ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
        ctx.fill();
    }
    ctx.restore();

    // Layer 4: legend, fixed in screen space.
    ctx.set_global_alpha(1.0);
    draw_legend(ctx, &core.legend, &core.colors)?;

    Ok(())
}

// =============================================================
// Map
// =============================================================

fn draw_land(ctx: &CanvasRenderingContext2d, shapes: &[ProjectedShape]) {
    ctx.set_fill_style_str(LAND_FILL);
    ctx.set_stroke_style_str(LAND_STROKE);
    ctx.set_line_width(LAND_STROKE_WIDTH);

    for shape in shapes {
        ctx.begin_path();
        for ring in &shape.rings {
            let mut points = ring.iter();
            let Some(first) = points.next() else {
                continue;
            };
            ctx.move_to(first.x, first.y);
            for p in points {
                ctx.line_to(p.x, p.y);
            }
            ctx.close_path();
        }
        ctx.fill();
        ctx.stroke();
    }
}

// =============================================================
// Legend
// =============================================================

fn draw_legend(ctx: &CanvasRenderingContext2d, legend: &Legend, colors: &ColorScale) -> Result<(), JsValue> {
    ctx.set_font(&format!("{LEGEND_FONT_PX:.0}px sans-serif"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("alphabetic");

    for row in &legend.rows {
        ctx.set_fill_style_str(colors.color(&row.category));
        ctx.fill_rect(row.origin.x, row.origin.y, row.bar_width, LEGEND_BAR_HEIGHT);

        ctx.set_fill_style_str(LEGEND_LABEL_COLOR);
        ctx.fill_text(&row.category, row.label_x(), row.label_y())?;
    }
    Ok(())
}
