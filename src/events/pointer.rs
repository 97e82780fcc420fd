use crate::dom::{self, EventListener};
use crate::frame::{FrameLoop, SplashState};
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-wide click and touchstart listeners that spawn splashes. Events
/// landing on the `toggle_id` button never spawn.
pub fn wire_spawn_listeners(
    state: &Rc<RefCell<SplashState>>,
    frame_loop: &Rc<FrameLoop>,
    toggle_id: Option<&str>,
) -> anyhow::Result<Vec<EventListener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let toggle_selector = toggle_id.map(|id| format!("#{}", id));
    Ok(vec![
        wire_click(&window, state, frame_loop, toggle_selector.clone())?,
        wire_touchstart(&window, state, frame_loop, toggle_selector)?,
    ])
}

fn on_toggle(ev: &web::Event, selector: Option<&str>) -> bool {
    selector.is_some_and(|s| dom::event_within(ev, s))
}

fn wire_click(
    window: &web::Window,
    state: &Rc<RefCell<SplashState>>,
    frame_loop: &Rc<FrameLoop>,
    toggle_selector: Option<String>,
) -> anyhow::Result<EventListener> {
    let state = state.clone();
    let frame_loop = frame_loop.clone();
    EventListener::new(window, "click", move |ev: web::Event| {
        let toggled = on_toggle(&ev, toggle_selector.as_deref());
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let now = instant::now();
        if !state.borrow().touch_filter.accept_click(now) {
            return;
        }
        let point = input::click_spawn_point(input::mouse_point(ev), ev.detail(), toggled);
        spawn_at(&state, &frame_loop, point, now);
    })
}

fn wire_touchstart(
    window: &web::Window,
    state: &Rc<RefCell<SplashState>>,
    frame_loop: &Rc<FrameLoop>,
    toggle_selector: Option<String>,
) -> anyhow::Result<EventListener> {
    let state = state.clone();
    let frame_loop = frame_loop.clone();
    EventListener::new_passive(window, "touchstart", move |ev: web::Event| {
        let toggled = on_toggle(&ev, toggle_selector.as_deref());
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let now = instant::now();
        let point = input::touch_point(ev);
        if point.is_some() {
            state.borrow_mut().touch_filter.on_touch(now);
        }
        spawn_at(&state, &frame_loop, input::touch_spawn_point(point, toggled), now);
    })
}

fn spawn_at(
    state: &Rc<RefCell<SplashState>>,
    frame_loop: &Rc<FrameLoop>,
    point: Option<Vec2>,
    now: f64,
) {
    {
        let mut st = state.borrow_mut();
        let Some(p) = st.toggle.gate(point) else {
            return;
        };
        st.pool.spawn(p, dom::viewport(), dom::scroll_y(), now);
    }
    frame_loop.ensure_running();
}

/// Keep the backing store in step with the window. Splash coordinates are
/// CSS pixels, so live splashes are unaffected.
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<SplashState>>,
) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas = canvas.clone();
    let state = state.clone();
    EventListener::new(&window, "resize", move |_ev: web::Event| {
        let dpr = dom::sync_canvas_backing_size(&canvas);
        state.borrow_mut().dpr = dpr;
    })
}
