use crate::dom;
use crate::engine::SplashPool;
use crate::input::{SplashToggle, TouchClickFilter};
use crate::render::{self, CanvasSurface};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a mounted engine mutates from event and frame callbacks.
pub struct SplashState {
    pub pool: SplashPool,
    pub toggle: SplashToggle,
    pub touch_filter: TouchClickFilter,
    pub dpr: f64,
}

/// The one requestAnimationFrame loop shared by every splash.
///
/// Runs only while the pool has live splashes: a frame that leaves the pool
/// empty does not schedule another, and `ensure_running` after a spawn starts
/// it again.
pub struct FrameLoop {
    state: Rc<RefCell<SplashState>>,
    canvas: web::HtmlCanvasElement,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    pub fn new(state: Rc<RefCell<SplashState>>, canvas: web::HtmlCanvasElement) -> Rc<Self> {
        let this = Rc::new(Self {
            state,
            canvas,
            running: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        // Weak so the closure does not keep the loop alive after unmount.
        let weak: Weak<FrameLoop> = Rc::downgrade(&this);
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(lp) = weak.upgrade() {
                lp.frame();
            }
        }) as Box<dyn FnMut(f64)>));
        this
    }

    pub fn ensure_running(&self) {
        if self.running.replace(true) {
            return;
        }
        self.request();
    }

    fn request(&self) {
        let Some(w) = web::window() else {
            self.running.set(false);
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            self.running.set(false);
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }

    fn frame(&self) {
        self.pending.set(None);
        let Some(ctx) = render::context_2d(&self.canvas) else {
            log::warn!("[frame] no 2d context; stopping");
            self.running.set(false);
            return;
        };
        let now = instant::now();
        let scroll_y = dom::scroll_y();

        let active = {
            let mut st = self.state.borrow_mut();
            let dpr = st.dpr;
            render::clear(&ctx, &self.canvas, dpr);
            let css_height = (self.canvas.height() as f64 / dpr) as f32;
            let mut surface = CanvasSurface::new(&ctx, css_height);
            st.pool.tick(now, scroll_y, &mut surface);
            st.pool.is_active()
        };

        if active {
            self.request();
        } else {
            self.running.set(false);
        }
    }

    /// Drop any pending frame and stop.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.running.set(false);
    }

    /// Blank the canvas once, outside the loop.
    pub fn clear_canvas(&self) {
        if let Some(ctx) = render::context_2d(&self.canvas) {
            render::clear(&ctx, &self.canvas, self.state.borrow().dpr);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
