use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::anim::{AnimatedPoint, Tween};
use crate::camera::{Camera, Point, wheel_zoom_factor};
use crate::config::MapConfig;
use crate::consts::{COLLAPSE_MS, EXPLODE_FADE_MS, EXPLODE_MOVE_MS, RESTYLE_MS, TOOLTIP_FADE_IN_MS, TOOLTIP_FADE_OUT_MS};
use crate::error::MapError;
use crate::hit::{CircleHitbox, Hit, hit_test};
use crate::input::{Gesture, InputState, PointerInput, WheelDelta};
use crate::interaction::{Hover, InteractionState, InteractionStrategy, PointTap};
use crate::legend::Legend;
use crate::nest::{NestIndex, NestKey};
use crate::projection::Projection;
use crate::record::ExpenseRecord;
use crate::render;
use crate::scale::{ColorScale, RadiusScale};
use crate::spread::spread;
use crate::style::{PointStyle, map_opacity, point_style};
use crate::tooltip::{self, Tooltip};
use crate::world::{ProjectedShape, WorldMap};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCursor(&'static str),
    ShowTooltip(Tooltip),
    /// Move the visible tooltip to a new page position.
    MoveTooltip(Point),
    HideTooltip { fade_ms: f64 },
    /// Start (or keep) the frame loop; something changed or is animating.
    RenderNeeded,
}

/// Everything loaded before the engine starts.
#[derive(Debug, Clone, Default)]
pub struct MapData {
    pub records: Vec<ExpenseRecord>,
    pub world: WorldMap,
}

/// Map state and event handling without the canvas element.
///
/// Input handlers return [`Action`]s; positions and opacities are read back
/// from [`AnimatedPoint`]s at [`EngineCore::now_ms`].
pub struct EngineCore {
    pub records: Vec<ExpenseRecord>,
    world: WorldMap,
    /// World polygons in world pixels for the current projection.
    pub shapes: Vec<ProjectedShape>,
    pub nests: NestIndex,
    pub radius: RadiusScale,
    pub colors: ColorScale,
    pub legend: Legend,
    pub projection: Projection,
    /// Projected position of each record, before any spread.
    pub home: Vec<Point>,
    /// Animated position and opacity of each record's circle.
    pub points: Vec<AnimatedPoint>,
    pub map_opacity: Tween,
    pub camera: Camera,
    pub state: InteractionState,
    pub hover: Option<Hover>,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    /// Clock used for animations, in milliseconds.
    pub now_ms: f64,
    currency: String,
    strategy: Box<dyn InteractionStrategy>,
}

impl EngineCore {
    #[must_use]
    pub fn new(data: MapData, config: &MapConfig, strategy: Box<dyn InteractionStrategy>) -> Self {
        let MapData { records, world } = data;
        let nests = NestIndex::build(&records);
        log::info!(
            "engine: {} records, {} locations, {} nests, {} interaction",
            records.len(),
            nests.len(),
            nests.explodable_count(),
            strategy.name()
        );

        let mut core = Self {
            radius: RadiusScale::for_records(&records),
            colors: ColorScale::new(&records, &config.palette),
            legend: Legend::build(&records),
            projection: Projection::fit(&[], 0.0, 0.0),
            shapes: Vec::new(),
            home: Vec::new(),
            points: Vec::new(),
            map_opacity: Tween::settled(map_opacity(&InteractionState::default())),
            camera: Camera::default(),
            state: InteractionState::default(),
            hover: None,
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            now_ms: 0.0,
            currency: config.currency.clone(),
            strategy,
            nests,
            records,
            world,
        };
        core.refit();
        core
    }

    // --- Viewport / clock ---

    /// Update viewport dimensions and refit the map to them.
    ///
    /// Positions are recomputed for the new projection without animating.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
        self.refit();
        vec![Action::RenderNeeded]
    }

    fn refit(&mut self) {
        let coords: Vec<(f64, f64)> = self.records.iter().map(|r| (r.lon, r.lat)).collect();
        self.projection = Projection::fit(&coords, self.viewport_width, self.viewport_height);
        self.shapes = self.world.project(&self.projection);
        self.home = self.records.iter().map(|r| self.projection.project(r.lon, r.lat)).collect();

        let targets = self.target_positions();
        let styles = self.styles();
        self.points = targets
            .into_iter()
            .zip(styles)
            .map(|(pos, style)| AnimatedPoint::settled(pos, style.opacity))
            .collect();
        self.map_opacity = Tween::settled(map_opacity(&self.state));
    }

    /// Set the animation clock.
    pub fn set_time(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Advance the clock; returns whether anything is still animating.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.set_time(now_ms);
        self.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.map_opacity.is_running(self.now_ms) || self.points.iter().any(|p| p.is_running(self.now_ms))
    }

    // --- Derived layout ---

    /// Current style of record `index`.
    #[must_use]
    pub fn style_of(&self, index: usize) -> PointStyle {
        let record = &self.records[index];
        point_style(&record.category, record.nest_key(), &self.state, self.hover.as_ref())
    }

    fn styles(&self) -> Vec<PointStyle> {
        (0..self.records.len()).map(|i| self.style_of(i)).collect()
    }

    /// Where every record should be: home, or its spread slot if its nest is exploded.
    #[must_use]
    pub fn target_positions(&self) -> Vec<Point> {
        let mut targets = self.home.clone();
        if let Some(key) = self.state.exploded_nest {
            for (index, pos) in self.spread_positions(key) {
                targets[index] = pos;
            }
        }
        targets
    }

    /// Spread slots for the members of nest `key`, by record index.
    #[must_use]
    pub fn spread_positions(&self, key: NestKey) -> Vec<(usize, Point)> {
        let members = self.nests.members(&key);
        let amounts: Vec<f64> = members.iter().map(|&i| self.records[i].amount).collect();
        let center = self.projection.project(key.lon(), key.lat());
        let positions = spread(&amounts, center, self.state.zoom_level, |a| self.radius.radius(a));
        members.iter().copied().zip(positions).collect()
    }

    /// Retarget every circle and the map to the current state.
    ///
    /// A duration of zero jumps without animating.
    fn apply_layout(&mut self, move_ms: f64, fade_ms: f64) {
        let now = self.now_ms;
        let targets = self.target_positions();
        let styles = self.styles();
        for ((point, target), style) in self.points.iter_mut().zip(targets).zip(styles) {
            if point.target_position() != target {
                if move_ms > 0.0 {
                    point.move_to(now, target, move_ms);
                } else {
                    point.jump_to(target);
                }
            }
            point.opacity.retarget(now, style.opacity, fade_ms);
        }
        self.map_opacity.retarget(now, map_opacity(&self.state), fade_ms);
    }

    // --- Hit testing ---

    /// What lies under `screen`, using current animated positions.
    #[must_use]
    pub fn hit(&self, screen: Point) -> Option<Hit> {
        let now = self.now_ms;
        let circles = self
            .points
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.style_of(i).visible)
            .map(|(i, p)| CircleHitbox {
                index: i,
                center: p.position_at(now),
                radius_px: self.radius.radius(self.records[i].amount),
            })
            .collect::<Vec<_>>();
        hit_test(screen, &self.legend, &self.camera, circles.into_iter())
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, input: &PointerInput) -> Vec<Action> {
        self.input.pointer_down(input);
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, input: &PointerInput) -> Vec<Action> {
        match self.input.pointer_move(input) {
            Gesture::Hover if self.strategy.hover_enabled() => self.update_hover(input),
            Gesture::Pan { dx, dy } => {
                self.camera.pan_by(dx, dy);
                vec![Action::RenderNeeded]
            }
            Gesture::Pinch { anchor, factor, dx, dy } => {
                self.camera.pan_by(dx, dy);
                self.camera.zoom_about(anchor, factor);
                self.after_zoom();
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_pointer_up(&mut self, input: &PointerInput) -> Vec<Action> {
        match self.input.pointer_up(input) {
            Gesture::Click => self.click(input),
            _ => Vec::new(),
        }
    }

    /// Pointer cancelled or left the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.input.cancel();
        let Some(old) = self.hover.take() else {
            return Vec::new();
        };
        let mut actions = vec![Action::SetCursor("default"), Action::HideTooltip { fade_ms: TOOLTIP_FADE_OUT_MS }];
        if matches!(old, Hover::Legend(_)) {
            self.apply_layout(0.0, RESTYLE_MS);
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        if !self.camera.zoom_about(screen_pt, wheel_zoom_factor(delta.dy)) {
            return Vec::new();
        }
        self.after_zoom();
        vec![Action::RenderNeeded]
    }

    /// Keep the spread spacing constant on screen after a zoom change.
    fn after_zoom(&mut self) {
        self.state.zoom_level = self.camera.zoom;
        if let Some(key) = self.state.exploded_nest {
            for (index, pos) in self.spread_positions(key) {
                self.points[index].jump_to(pos);
            }
        }
    }

    fn click(&mut self, input: &PointerInput) -> Vec<Action> {
        match self.hit(input.screen) {
            Some(Hit::Legend(row)) => {
                let category = self.legend.rows[row].category.clone();
                let was_exploded = self.state.exploded_nest.is_some();
                self.strategy.legend_tapped(&mut self.state, &category);
                log::debug!("legend {category:?} tapped, now {:?}", self.state.phase());
                if was_exploded && self.state.exploded_nest.is_none() {
                    self.apply_layout(COLLAPSE_MS, COLLAPSE_MS);
                } else {
                    self.apply_layout(0.0, RESTYLE_MS);
                }
                vec![Action::RenderNeeded]
            }
            Some(Hit::Point(index)) => {
                let key = self.records[index].nest_key();
                let size = self.nests.size(&key);
                let tap = self.strategy.point_tapped(&mut self.state, key, size);
                log::debug!("nest {key} ({size}) tapped: {tap:?}, now {:?}", self.state.phase());
                match tap {
                    PointTap::Ignored => Vec::new(),
                    PointTap::ShowTooltip => vec![Action::ShowTooltip(self.record_tooltip(index, input.page))],
                    PointTap::Exploded => {
                        self.apply_layout(EXPLODE_MOVE_MS, EXPLODE_FADE_MS);
                        vec![Action::RenderNeeded]
                    }
                    PointTap::Collapsed => {
                        self.apply_layout(COLLAPSE_MS, COLLAPSE_MS);
                        vec![Action::RenderNeeded]
                    }
                }
            }
            None => {
                self.state.reset();
                log::debug!("background tapped, state reset");
                self.apply_layout(COLLAPSE_MS, COLLAPSE_MS);
                vec![Action::HideTooltip { fade_ms: RESTYLE_MS }, Action::RenderNeeded]
            }
        }
    }

    fn update_hover(&mut self, input: &PointerInput) -> Vec<Action> {
        let next = match self.hit(input.screen) {
            Some(Hit::Legend(row)) => Some(Hover::Legend(self.legend.rows[row].category.clone())),
            Some(Hit::Point(index)) => Some(Hover::Point(index)),
            None => None,
        };
        if next == self.hover {
            return match next {
                Some(_) => vec![Action::MoveTooltip(tooltip::placement(input.page))],
                None => Vec::new(),
            };
        }

        let restyle = matches!(self.hover, Some(Hover::Legend(_))) || matches!(next, Some(Hover::Legend(_)));
        self.hover = next;

        let mut actions = match &self.hover {
            Some(Hover::Point(index)) => {
                vec![Action::SetCursor("pointer"), Action::ShowTooltip(self.record_tooltip(*index, input.page))]
            }
            Some(Hover::Legend(category)) => {
                let sum = self.legend.row(category).map_or(0.0, |row| row.sum);
                let tip = Tooltip {
                    html: tooltip::category_html(category, sum, &self.currency),
                    position: tooltip::placement(input.page),
                    opacity: self.strategy.tooltip_opacity(),
                    fade_ms: TOOLTIP_FADE_IN_MS,
                };
                vec![Action::SetCursor("pointer"), Action::ShowTooltip(tip)]
            }
            None => vec![Action::SetCursor("default"), Action::HideTooltip { fade_ms: TOOLTIP_FADE_OUT_MS }],
        };
        if restyle {
            self.apply_layout(0.0, RESTYLE_MS);
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn record_tooltip(&self, index: usize, page: Point) -> Tooltip {
        Tooltip {
            html: tooltip::record_html(&self.records[index], &self.currency),
            position: tooltip::placement(page),
            opacity: self.strategy.tooltip_opacity(),
            fade_ms: TOOLTIP_FADE_IN_MS,
        }
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Current position of record `index`'s circle, in world pixels.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Point> {
        self.points.get(index).map(|p| p.position_at(self.now_ms))
    }

    /// Current opacity of record `index`'s circle.
    #[must_use]
    pub fn opacity(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|p| p.opacity.value_at(self.now_ms))
    }
}

/// The full map engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Dom`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, core: EngineCore) -> Result<Self, MapError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| MapError::dom(&e))?
            .ok_or_else(|| MapError::Dom("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| MapError::dom(&e))?;
        Ok(Self { canvas, ctx, core })
    }

    // --- Viewport / clock ---

    /// Resize the backing store to the CSS size times the device pixel ratio and refit.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.canvas.set_width((width_css * dpr).round().max(1.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(1.0) as u32);
        self.core.set_viewport(width_css, height_css, dpr)
    }

    pub fn set_time(&mut self, now_ms: f64) {
        self.core.set_time(now_ms);
    }

    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.core.tick(now_ms)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, input: &PointerInput) -> Vec<Action> {
        self.core.on_pointer_down(input)
    }

    pub fn on_pointer_move(&mut self, input: &PointerInput) -> Vec<Action> {
        self.core.on_pointer_move(input)
    }

    pub fn on_pointer_up(&mut self, input: &PointerInput) -> Vec<Action> {
        self.core.on_pointer_up(input)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    pub fn render(&self) {
        if let Err(e) = render::draw(&self.ctx, &self.core) {
            log::error!("render failed: {e:?}");
        }
    }
}
