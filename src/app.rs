//! Browser entry point.
//!
//! Loads the expense CSV and the world GeoJSON concurrently, mounts an
//! [`Engine`] on the map canvas and forwards DOM events to it. Engine
//! [`Action`]s are applied to the DOM here: cursor changes, the tooltip
//! element and frame scheduling. Frames are only requested while something
//! changed or a tween is running.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, EventTarget, HtmlCanvasElement, HtmlElement, PointerEvent, WheelEvent, Window};

use crate::camera::Point;
use crate::config::{CONFIG_ATTRIBUTE, MapConfig};
use crate::engine::{Action, Engine, EngineCore, MapData};
use crate::error::MapError;
use crate::input::{Button, PointerInput, WheelDelta};
use crate::interaction::{InteractionStrategy, PointerStrategy, TouchStrategy};
use crate::record::parse_csv;
use crate::world::WorldMap;

/// WASM start hook: install logging and start loading in the background.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            log::error!("expense map failed to start: {e}");
        }
    });
}

async fn run() -> Result<(), MapError> {
    let window = web_sys::window().ok_or_else(|| MapError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| MapError::Dom("no document".into()))?;

    let raw_config = document
        .query_selector(&format!("[{CONFIG_ATTRIBUTE}]"))
        .map_err(|e| MapError::dom(&e))?
        .and_then(|el| el.get_attribute(CONFIG_ATTRIBUTE));
    let config = MapConfig::from_attribute(raw_config.as_deref())?;

    let canvas = document
        .get_element_by_id(&config.map_element_id)
        .ok_or_else(|| MapError::Dom(format!("no element #{}", config.map_element_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MapError::Dom(format!("#{} is not a canvas", config.map_element_id)))?;
    let tooltip = document
        .get_element_by_id(&config.tooltip_element_id)
        .ok_or_else(|| MapError::Dom(format!("no element #{}", config.tooltip_element_id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MapError::Dom(format!("#{} is not an html element", config.tooltip_element_id)))?;

    let (csv_text, geojson_text) =
        futures::try_join!(fetch_text(&config.csv_url), fetch_text(&config.geojson_url))?;
    let records = parse_csv(&csv_text)?.records;
    let world = WorldMap::parse(&geojson_text)?;

    let strategy: Box<dyn InteractionStrategy> = if has_touch(&window) {
        Box::new(TouchStrategy)
    } else {
        Box::new(PointerStrategy)
    };
    let core = EngineCore::new(MapData { records, world }, &config, strategy);
    let engine = Engine::new(canvas.clone(), core)?;

    let host = Rc::new(Host { window, canvas, tooltip, engine: RefCell::new(engine), frame_pending: Cell::new(false) });
    host.init_styles();
    host.sync_viewport();
    host.wire_events()?;
    Ok(())
}

/// GET `url` as text; any non-2xx status is an error.
async fn fetch_text(url: &str) -> Result<String, MapError> {
    let fetch_err = |e: gloo_net::Error| MapError::Fetch { url: url.to_string(), reason: e.to_string() };
    let resp = Request::get(url).send().await.map_err(fetch_err)?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(MapError::Status { url: url.to_string(), status });
    }
    let text = resp.text().await.map_err(fetch_err)?;
    log::info!("fetched {url} ({} bytes)", text.len());
    Ok(text)
}

fn has_touch(window: &Window) -> bool {
    matches!(js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")), Ok(true))
}

fn pointer_input(ev: &PointerEvent) -> PointerInput {
    PointerInput {
        id: ev.pointer_id(),
        screen: Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y())),
        page: Point::new(f64::from(ev.page_x()), f64::from(ev.page_y())),
        button: Button::from_dom(ev.button()),
    }
}

fn set_style(el: &HtmlElement, name: &str, value: &str) {
    if let Err(e) = el.style().set_property(name, value) {
        log::warn!("failed to set style {name}: {e:?}");
    }
}

/// Register `handler` for `event` on `target` for the page's lifetime.
fn listen<E>(target: &EventTarget, event: &str, passive: bool, handler: impl FnMut(E) + 'static) -> Result<(), MapError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| MapError::dom(&e))?;
    closure.forget();
    Ok(())
}

/// The mounted map: engine plus the DOM it drives.
struct Host {
    window: Window,
    canvas: HtmlCanvasElement,
    tooltip: HtmlElement,
    engine: RefCell<Engine>,
    frame_pending: Cell<bool>,
}

impl Host {
    fn now_ms(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    fn init_styles(&self) {
        set_style(&self.canvas, "touch-action", "none");
        set_style(&self.tooltip, "position", "absolute");
        set_style(&self.tooltip, "pointer-events", "none");
        set_style(&self.tooltip, "opacity", "0");
    }

    fn sync_viewport(self: &Rc<Self>) {
        let width = f64::from(self.canvas.client_width()).max(1.0);
        let height = f64::from(self.canvas.client_height()).max(1.0);
        let dpr = self.window.device_pixel_ratio().max(1.0);
        let actions = self.engine.borrow_mut().set_viewport(width, height, dpr);
        log::debug!("viewport {width}x{height} @{dpr}");
        self.apply(actions);
    }

    /// Run `f` against the engine at the current time and apply what it returns.
    fn dispatch(self: &Rc<Self>, f: impl FnOnce(&mut Engine) -> Vec<Action>) {
        let now = self.now_ms();
        let actions = {
            let mut engine = self.engine.borrow_mut();
            engine.set_time(now);
            f(&mut engine)
        };
        self.apply(actions);
    }

    fn wire_events(self: &Rc<Self>) -> Result<(), MapError> {
        let canvas: &EventTarget = self.canvas.as_ref();

        let host = Rc::clone(self);
        listen(canvas, "pointerdown", false, move |ev: PointerEvent| {
            ev.prevent_default();
            if let Err(e) = host.canvas.set_pointer_capture(ev.pointer_id()) {
                log::debug!("pointer capture failed: {e:?}");
            }
            let input = pointer_input(&ev);
            host.dispatch(|engine| engine.on_pointer_down(&input));
        })?;

        let host = Rc::clone(self);
        listen(canvas, "pointermove", true, move |ev: PointerEvent| {
            let input = pointer_input(&ev);
            host.dispatch(|engine| engine.on_pointer_move(&input));
        })?;

        let host = Rc::clone(self);
        listen(canvas, "pointerup", true, move |ev: PointerEvent| {
            let input = pointer_input(&ev);
            host.dispatch(|engine| engine.on_pointer_up(&input));
        })?;

        for event in ["pointercancel", "pointerleave"] {
            let host = Rc::clone(self);
            listen(canvas, event, true, move |_ev: PointerEvent| {
                host.dispatch(Engine::on_pointer_leave);
            })?;
        }

        let host = Rc::clone(self);
        listen(canvas, "wheel", false, move |ev: WheelEvent| {
            ev.prevent_default();
            let screen = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
            let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
            host.dispatch(|engine| engine.on_wheel(screen, delta));
        })?;

        let host = Rc::clone(self);
        listen(self.window.as_ref(), "resize", true, move |_ev: web_sys::Event| {
            host.sync_viewport();
        })?;

        Ok(())
    }

    fn apply(self: &Rc<Self>, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::SetCursor(cursor) => set_style(&self.canvas, "cursor", cursor),
                Action::ShowTooltip(tip) => {
                    self.tooltip.set_inner_html(&tip.html);
                    self.place_tooltip(tip.position);
                    self.fade_tooltip(tip.opacity, tip.fade_ms);
                }
                Action::MoveTooltip(position) => self.place_tooltip(position),
                Action::HideTooltip { fade_ms } => self.fade_tooltip(0.0, fade_ms),
                Action::RenderNeeded => self.request_frame(),
            }
        }
    }

    fn place_tooltip(&self, position: Point) {
        set_style(&self.tooltip, "left", &format!("{}px", position.x));
        set_style(&self.tooltip, "top", &format!("{}px", position.y));
    }

    fn fade_tooltip(&self, opacity: f64, fade_ms: f64) {
        set_style(&self.tooltip, "transition", &format!("opacity {fade_ms}ms"));
        set_style(&self.tooltip, "opacity", &opacity.to_string());
    }

    /// Schedule one frame unless one is already pending.
    fn request_frame(self: &Rc<Self>) {
        if self.frame_pending.replace(true) {
            return;
        }

        let host = Rc::clone(self);
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |now_ms: f64| {
            host.frame_pending.set(false);
            host.frame(now_ms);
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => *holder.borrow_mut() = Some(cb),
            Err(e) => {
                self.frame_pending.set(false);
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }

    fn frame(self: &Rc<Self>, now_ms: f64) {
        let animating = {
            let mut engine = self.engine.borrow_mut();
            let animating = engine.tick(now_ms);
            engine.render();
            animating
        };
        if animating {
            self.request_frame();
        }
    }
}
