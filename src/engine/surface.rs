use glam::Vec2;

/// Visible page area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Drawing target for splash effects, in CSS-pixel viewport coordinates.
///
/// The browser implementation wraps a `CanvasRenderingContext2d`; tests use a
/// recorder. Implementations never fail: a surface that cannot draw drops the
/// call.
pub trait SplashSurface {
    /// Visible height in CSS pixels, used for culling.
    fn height(&self) -> f32;

    /// Solid disc.
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);

    /// Radial glow fading from `inner` at the center to transparent `outer`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, inner: [u8; 3], outer: [u8; 3], alpha: f32);
}
