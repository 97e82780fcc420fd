//! Randomised initial state for the four particle populations of a splash.
//!
//! Generators are pure apart from the random draws, which all go through the
//! caller's `Rng` so a seeded generator pins the output.

use super::constants::*;
use super::surface::Viewport;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// One free-flying particle: a center-cluster blob, a grain or a splatter drop.
#[derive(Clone, Debug)]
pub struct Particle {
    pub offset: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color_mix: f32,
    pub drag: f32,
    pub gravity: f32,
    pub delay_ms: f32,
}

impl Particle {
    #[inline]
    pub fn step(&mut self) {
        self.velocity *= self.drag;
        self.velocity.y += self.gravity;
        self.offset += self.velocity;
    }

    /// Center-cluster motion: one damping factor, no gravity.
    #[inline]
    pub fn step_damped(&mut self, damping: f32) {
        self.velocity *= damping;
        self.offset += self.velocity;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[derive(Clone, Debug)]
pub struct StreakDot {
    /// Position along the streak, 0 at the impact point and 1 at the tip.
    pub along: f32,
    pub lateral: f32,
    pub radius: f32,
    pub color_mix: f32,
    pub delay_ms: f32,
    pub offset: Vec2,
}

/// A line of dots thrown out along one fixed angle. The line grows with an
/// eased extent and its tip sags under gravity, bending the line into an arc.
#[derive(Clone, Debug)]
pub struct Streak {
    pub direction: Vec2,
    pub reach: f32,
    pub extent: f32,
    pub sag: f32,
    pub sag_velocity: f32,
    pub sag_gravity: f32,
    pub dots: SmallVec<[StreakDot; 18]>,
}

impl Streak {
    pub fn step(&mut self) {
        self.extent += (1.0 - self.extent) * STREAK_EASE;
        self.sag_velocity = self.sag_velocity * STREAK_SAG_DRAG + self.sag_gravity;
        self.sag += self.sag_velocity;
        self.place_dots();
    }

    fn place_dots(&mut self) {
        let normal = self.direction.perp();
        for dot in &mut self.dots {
            let along = dot.along * self.reach * self.extent;
            dot.offset = self.direction * along
                + normal * dot.lateral
                + Vec2::new(0.0, self.sag * dot.along * dot.along);
        }
    }
}

/// Count and speed multipliers for one spawn, derived from the viewport and
/// where in it the splash landed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnScale {
    pub mobile: bool,
    pub count: f32,
    pub speed: f32,
}

impl SpawnScale {
    pub const DESKTOP: SpawnScale = SpawnScale {
        mobile: false,
        count: 1.0,
        speed: 1.0,
    };

    /// Narrow viewports get fewer, slower particles; splashes near the edge
    /// are up to 30% weaker than ones in the middle. Zero, negative or
    /// non-finite sizes clamp to the smallest scale instead of producing NaN.
    pub fn new(origin: Vec2, viewport: Viewport, mobile_breakpoint: f32) -> Self {
        let width = sanitize(viewport.width);
        let height = sanitize(viewport.height);
        let breakpoint = sanitize(mobile_breakpoint);

        let mut scale = if width < breakpoint {
            SpawnScale {
                mobile: true,
                count: MOBILE_COUNT_SCALE,
                speed: MOBILE_SPEED_SCALE * (width / breakpoint).clamp(MIN_WIDTH_SCALE, 1.0),
            }
        } else {
            SpawnScale::DESKTOP
        };
        scale.speed *= edge_intensity(origin, width, height);
        scale
    }

    pub fn count_range(&self, range: (usize, usize)) -> (usize, usize) {
        if !self.mobile {
            return range;
        }
        let lo = ((range.0 as f32 * self.count).round() as usize).max(1);
        let hi = ((range.1 as f32 * self.count).round() as usize).max(lo);
        (lo, hi)
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

fn edge_intensity(origin: Vec2, width: f32, height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 || !origin.is_finite() {
        return 1.0;
    }
    let dx = ((origin.x - width / 2.0).abs() / (width / 2.0)).min(1.0);
    let dy = ((origin.y - height / 2.0).abs() / (height / 2.0)).min(1.0);
    1.0 - dx.max(dy) * 0.3
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, range: (f32, f32)) -> f32 {
    if range.1 > range.0 {
        rng.gen_range(range.0..range.1)
    } else {
        range.0
    }
}

#[inline]
fn count<R: Rng + ?Sized>(rng: &mut R, range: (usize, usize)) -> usize {
    rng.gen_range(range.0..=range.1.max(range.0))
}

#[inline]
fn direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..TAU))
}

pub fn center_cluster<R: Rng + ?Sized>(rng: &mut R, scale: &SpawnScale) -> Vec<Particle> {
    let n = count(rng, scale.count_range(CENTER_COUNT));
    (0..n)
        .map(|_| {
            // Squared draw packs blobs toward the middle.
            let spread = CENTER_SPREAD.0
                + (CENTER_SPREAD.1 - CENTER_SPREAD.0) * rng.gen::<f32>().powi(2);
            let dir = direction(rng);
            Particle {
                offset: dir * spread * scale.count.sqrt(),
                velocity: dir * uniform(rng, CENTER_SPEED) * scale.speed,
                radius: uniform(rng, CENTER_RADIUS) * scale.count.sqrt(),
                color_mix: uniform(rng, (0.25, 0.55)),
                drag: CENTER_DAMPING,
                gravity: 0.0,
                delay_ms: 0.0,
            }
        })
        .collect()
}

pub fn streaks<R: Rng + ?Sized>(rng: &mut R, scale: &SpawnScale) -> Vec<Streak> {
    let n = count(rng, scale.count_range(STREAK_COUNT));
    (0..n)
        .map(|_| {
            let dots_n = count(rng, scale.count_range(STREAK_DOTS));
            let dots = (0..dots_n)
                .map(|i| {
                    let along = (i as f32 + rng.gen::<f32>()) / dots_n as f32;
                    StreakDot {
                        along,
                        lateral: uniform(rng, (-STREAK_JITTER, STREAK_JITTER)) * along,
                        // Dots thin out toward the tip.
                        radius: uniform(rng, STREAK_DOT_RADIUS) * (1.0 - 0.5 * along),
                        color_mix: uniform(rng, (0.3, 0.9)),
                        delay_ms: along * STREAK_STAGGER_MS,
                        offset: Vec2::ZERO,
                    }
                })
                .collect();
            Streak {
                direction: direction(rng),
                reach: uniform(rng, STREAK_REACH) * scale.speed,
                extent: 0.0,
                sag: 0.0,
                sag_velocity: 0.0,
                sag_gravity: uniform(rng, STREAK_SAG),
                dots,
            }
        })
        .collect()
}

pub fn grains<R: Rng + ?Sized>(rng: &mut R, scale: &SpawnScale) -> Vec<Particle> {
    let n = count(rng, scale.count_range(GRAIN_COUNT));
    (0..n)
        .map(|_| {
            let skew = rng.gen::<f32>().powi(GRAIN_SPEED_SKEW);
            let speed = GRAIN_SPEED.0 + (GRAIN_SPEED.1 - GRAIN_SPEED.0) * skew;
            Particle {
                offset: Vec2::ZERO,
                velocity: direction(rng) * speed * scale.speed,
                radius: uniform(rng, GRAIN_RADIUS),
                color_mix: rng.gen::<f32>(),
                drag: uniform(rng, GRAIN_DRAG),
                gravity: uniform(rng, GRAIN_GRAVITY),
                delay_ms: uniform(rng, GRAIN_DELAY_MS),
            }
        })
        .collect()
}

pub fn splatter<R: Rng + ?Sized>(rng: &mut R, scale: &SpawnScale) -> Vec<Particle> {
    let n = count(rng, scale.count_range(SPLATTER_COUNT));
    (0..n)
        .map(|_| Particle {
            offset: Vec2::ZERO,
            velocity: direction(rng) * uniform(rng, SPLATTER_SPEED) * scale.speed,
            radius: uniform(rng, SPLATTER_RADIUS),
            color_mix: uniform(rng, (0.1, 0.6)),
            drag: uniform(rng, SPLATTER_DRAG),
            gravity: uniform(rng, SPLATTER_GRAVITY),
            delay_ms: uniform(rng, SPLATTER_DELAY_MS),
        })
        .collect()
}
