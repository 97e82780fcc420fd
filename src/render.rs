use crate::engine::SplashSurface;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `SplashSurface` over a 2D canvas context whose transform already maps
/// CSS pixels to the backing store.
pub struct CanvasSurface<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    height: f32,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d, height: f32) -> Self {
        Self { ctx, height }
    }
}

#[inline]
fn rgba(c: [u8; 3], a: f32) -> String {
    format!("rgba({},{},{},{:.3})", c[0], c[1], c[2], a)
}

#[inline]
fn rgb(c: [u8; 3]) -> String {
    format!("rgb({},{},{})", c[0], c[1], c[2])
}

impl SplashSurface for CanvasSurface<'_> {
    fn height(&self) -> f32 {
        self.height
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        let ctx = self.ctx;
        ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        ctx.set_fill_style_str(&rgb(color));
        ctx.begin_path();
        if ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            ctx.fill();
        }
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, inner: [u8; 3], outer: [u8; 3], alpha: f32) {
        let ctx = self.ctx;
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, "rgba(255,255,255,0.95)");
        _ = gradient.add_color_stop(0.35, &rgba(inner, 0.8));
        _ = gradient.add_color_stop(1.0, &rgba(outer, 0.0));
        ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        if ctx.arc(x, y, r, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

/// The canvas' 2D context, or `None` when the browser will not provide one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Wipe the whole backing store, then scale so later drawing is in CSS px.
pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, dpr: f64) {
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.set_global_alpha(1.0);
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}
