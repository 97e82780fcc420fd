#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, TOGGLE_ID};
use crate::dom::EventListener;
use crate::engine::{SplashParams, SplashPool};
use crate::frame::{FrameLoop, SplashState};
use crate::input::{SplashToggle, TouchClickFilter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
pub mod engine;
mod events;
mod frame;
mod input;
mod render;

thread_local! {
    static AUTO_MOUNT: RefCell<Option<SplashHandle>> = RefCell::new(None);
    static ANCHOR_LINKS: RefCell<Option<EventListener>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sparkz-splash starting");

    let Some(document) = dom::window_document() else {
        log::warn!("no document; nothing to mount");
        return Ok(());
    };
    let reduced_motion = dom::prefers_reduced_motion();

    match events::wire_anchor_links(&document, !reduced_motion) {
        Ok(l) => ANCHOR_LINKS.with(|a| *a.borrow_mut() = Some(l)),
        Err(e) => log::warn!("anchor links: {:#}", e),
    }

    if document.get_element_by_id(CANVAS_ID).is_none() {
        return Ok(());
    }
    if reduced_motion {
        log::info!("[mount] reduced motion requested; splashes stay off");
        return Ok(());
    }
    match mount(CANVAS_ID, Some(TOGGLE_ID)) {
        Ok(handle) => AUTO_MOUNT.with(|m| *m.borrow_mut() = Some(handle)),
        Err(e) => log::error!("[mount] {:#}", e),
    }
    Ok(())
}

/// Mount on `canvas_id`, optionally wiring the `toggle_id` button.
#[wasm_bindgen(js_name = mountSplash)]
pub fn mount_splash(canvas_id: &str, toggle_id: Option<String>) -> Result<SplashHandle, JsValue> {
    mount(canvas_id, toggle_id.as_deref()).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Tear down the engine `start` mounted on the default canvas, if any.
#[wasm_bindgen(js_name = unmountAutoSplash)]
pub fn unmount_auto_splash() {
    AUTO_MOUNT.with(|m| m.borrow_mut().take());
}

struct Mounted {
    state: Rc<RefCell<SplashState>>,
    frame_loop: Rc<FrameLoop>,
    toggle_button: Option<web::Element>,
    _listeners: Vec<EventListener>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        self.state.borrow_mut().pool.clear();
        self.frame_loop.clear_canvas();
        log::info!("[mount] splash engine unmounted");
    }
}

/// Live engine. Dropping it (or calling `unmount`) removes every listener,
/// cancels the pending frame and clears the canvas.
#[wasm_bindgen]
pub struct SplashHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl SplashHandle {
    #[wasm_bindgen(js_name = setEnabled)]
    pub fn set_enabled(&self, enabled: bool) {
        if let Some(m) = &self.inner {
            let toggle = {
                let mut st = m.state.borrow_mut();
                st.toggle.enabled = enabled;
                st.toggle
            };
            if let Some(btn) = &m.toggle_button {
                events::apply_toggle_state(btn, toggle);
            }
        }
    }

    pub fn enabled(&self) -> bool {
        self.inner
            .as_ref()
            .map(|m| m.state.borrow().toggle.enabled)
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = liveCount)]
    pub fn live_count(&self) -> usize {
        self.inner
            .as_ref()
            .map(|m| m.state.borrow().pool.len())
            .unwrap_or(0)
    }

    pub fn unmount(&mut self) {
        self.inner.take();
    }
}

fn mount(canvas_id: &str, toggle_id: Option<&str>) -> anyhow::Result<SplashHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", canvas_id, e))?;

    let overrides = dom::canvas_overrides(&canvas);
    let (params, errors) = SplashParams::default()
        .with_overrides(overrides.iter().map(|(k, v)| (*k, v.as_str())));
    for e in errors {
        log::warn!("[mount] ignoring override: {}", e);
    }
    let max_splashes = params.max_splashes;

    let dpr = dom::sync_canvas_backing_size(&canvas);
    let state = Rc::new(RefCell::new(SplashState {
        pool: SplashPool::new(params),
        toggle: SplashToggle::default(),
        touch_filter: TouchClickFilter::default(),
        dpr,
    }));
    let frame_loop = FrameLoop::new(state.clone(), canvas.clone());

    let mut listeners = events::wire_spawn_listeners(&state, &frame_loop, toggle_id)?;
    listeners.push(events::wire_resize(&canvas, &state)?);

    let toggle_button = toggle_id.and_then(|id| document.get_element_by_id(id));
    match (&toggle_button, toggle_id) {
        (Some(btn), _) => {
            events::apply_toggle_state(btn, SplashToggle::default());
            listeners.push(events::wire_toggle(btn, &state)?);
        }
        (None, Some(id)) => log::warn!("[mount] toggle #{} not found; splashes always on", id),
        (None, None) => {}
    }

    log::info!(
        "[mount] splash engine on #{} (max {} splashes, dpr {:.2})",
        canvas_id,
        max_splashes,
        dpr
    );
    Ok(SplashHandle {
        inner: Some(Mounted {
            state,
            frame_loop,
            toggle_button,
            _listeners: listeners,
        }),
    })
}
