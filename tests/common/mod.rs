// Recording surface shared by the host-side engine tests.

use crate::engine::SplashSurface;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Circle {
        center: Vec2,
        radius: f32,
        rgb: [u8; 3],
        alpha: f32,
    },
    Glow {
        center: Vec2,
        radius: f32,
        alpha: f32,
    },
}

impl DrawCall {
    pub fn center(&self) -> Vec2 {
        match self {
            DrawCall::Circle { center, .. } | DrawCall::Glow { center, .. } => *center,
        }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            DrawCall::Circle { alpha, .. } | DrawCall::Glow { alpha, .. } => *alpha,
        }
    }
}

pub struct RecordingSurface {
    pub height: f32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            calls: Vec::new(),
        }
    }
}

impl SplashSurface for RecordingSurface {
    fn height(&self) -> f32 {
        self.height
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            rgb,
            alpha,
        });
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, _inner: [u8; 3], _outer: [u8; 3], alpha: f32) {
        self.calls.push(DrawCall::Glow {
            center,
            radius,
            alpha,
        });
    }
}
