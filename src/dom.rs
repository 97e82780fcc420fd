use crate::constants::{MAX_DEVICE_PIXEL_RATIO, REDUCED_MOTION_QUERY};
use crate::engine::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(1.0)
        .min(MAX_DEVICE_PIXEL_RATIO)
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Size the canvas backing store to the viewport at the current pixel ratio
/// and pin its CSS size to the viewport. Returns the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let dpr = device_pixel_ratio();
    let vp = viewport();
    canvas.set_width(((vp.width as f64 * dpr) as u32).max(1));
    canvas.set_height(((vp.height as f64 * dpr) as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", vp.width));
    _ = style.set_property("height", &format!("{}px", vp.height));
    dpr
}

/// `data-*` overrides declared on the canvas element.
pub fn canvas_overrides(canvas: &web::HtmlCanvasElement) -> Vec<(&'static str, String)> {
    let dataset = canvas.dataset();
    ["maxSplashes", "mobileBreakpoint", "seed"]
        .into_iter()
        .filter_map(|key| dataset.get(key).map(|v| (key, v)))
        .collect()
}

/// Whether the event target is, or sits inside, an element matching `selector`.
pub fn event_within(ev: &web::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// A DOM listener that stays registered for as long as this value lives.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Like `new`, registered as passive so scrolling is never held up.
    pub fn new_passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| anyhow::anyhow!("add passive {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, callback);
    }
}
