use glam::Vec2;
use web_sys as web;

/// Whether clicks and taps currently spawn splashes. Flipping it never
/// touches splashes already on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashToggle {
    pub enabled: bool,
}

impl Default for SplashToggle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SplashToggle {
    pub fn flip(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Pass a spawn point through only while enabled and finite.
    #[inline]
    pub fn gate(&self, point: Option<Vec2>) -> Option<Vec2> {
        point.filter(|p| self.enabled && p.is_finite())
    }

    pub fn aria_label(&self) -> &'static str {
        if self.enabled {
            "Disable Holi Effect"
        } else {
            "Enable Holi Effect"
        }
    }

    pub fn title(&self) -> &'static str {
        if self.enabled {
            "Holi: ON - Click to turn off"
        } else {
            "Holi: OFF - Click to turn on"
        }
    }
}

/// Touch screens fire a synthetic `click` right after `touchstart`; this drops
/// that click so one tap makes one splash.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchClickFilter {
    last_touch_ms: Option<f64>,
}

impl TouchClickFilter {
    pub const WINDOW_MS: f64 = 600.0;

    pub fn on_touch(&mut self, now_ms: f64) {
        self.last_touch_ms = Some(now_ms);
    }

    pub fn accept_click(&self, now_ms: f64) -> bool {
        match self.last_touch_ms {
            Some(t) => !(now_ms >= t && now_ms - t < Self::WINDOW_MS),
            None => true,
        }
    }
}

// ---------------- Spawn filtering ----------------
/// Splash point for a window `click`. Keyboard activations report
/// `detail == 0` and no real pointer position; presses on the toggle
/// button belong to the toggle.
#[inline]
pub fn click_spawn_point(point: Vec2, detail: i32, on_toggle: bool) -> Option<Vec2> {
    (detail > 0 && !on_toggle).then_some(point)
}

/// Splash point for a `touchstart`, dropping taps on the toggle button.
#[inline]
pub fn touch_spawn_point(point: Option<Vec2>, on_toggle: bool) -> Option<Vec2> {
    point.filter(|_| !on_toggle)
}

// ---------------- Event coordinates ----------------
#[inline]
pub fn mouse_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First touch point of a touch event, if any.
#[inline]
pub fn touch_point(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

// ---------------- Anchor scrolling ----------------
/// Element id targeted by an in-page link (`#id`), or `None` for bare `#`,
/// empty hrefs and links elsewhere.
#[inline]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Page-space scroll destination for an element whose bounding rect top is
/// `rect_top` (viewport-relative) when the page is scrolled to `scroll_y`.
#[inline]
pub fn anchor_scroll_top(rect_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (rect_top + scroll_y + offset).max(0.0)
}
