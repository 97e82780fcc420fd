use super::constants::*;
use super::easing::{ease_in_quad, ease_out_cubic};
use super::palette::Palette;
use super::particles::{self, Particle, SpawnScale, Streak};
use super::surface::{SplashSurface, Viewport};
use glam::Vec2;
use rand::Rng;

/// One impact: every particle thrown by a single click or tap.
///
/// Coordinates are CSS pixels. `origin` is where the event landed in the
/// viewport and `spawn_scroll_y` the page scroll at that moment, so the
/// splash stays attached to page content while the page scrolls.
#[derive(Clone, Debug)]
pub struct SplashEffect {
    pub id: u64,
    pub origin: Vec2,
    pub spawn_scroll_y: f32,
    pub created_at: f64,
    pub palette: Palette,
    pub bloom_radius: f32,
    pub center: Vec<Particle>,
    pub streaks: Vec<Streak>,
    pub grains: Vec<Particle>,
    pub splatter: Vec<Particle>,
    frozen: bool,
    dead: bool,
    age_ms: f64,
    simulated_ms: f64,
}

impl SplashEffect {
    pub fn new<R: Rng + ?Sized>(
        id: u64,
        origin: Vec2,
        viewport: Viewport,
        scroll_y: f32,
        now: f64,
        mobile_breakpoint: f32,
        rng: &mut R,
    ) -> Self {
        let scale = SpawnScale::new(origin, viewport, mobile_breakpoint);
        let palette = Palette::pick(rng);
        let bloom_radius = rng.gen_range(BLOOM_RADIUS.0..BLOOM_RADIUS.1) * scale.speed;
        let center = particles::center_cluster(rng, &scale);
        let streaks = particles::streaks(rng, &scale);
        let grains = particles::grains(rng, &scale);
        let splatter = particles::splatter(rng, &scale);
        Self {
            id,
            origin,
            spawn_scroll_y: if scroll_y.is_finite() { scroll_y } else { 0.0 },
            created_at: now,
            palette,
            bloom_radius,
            center,
            streaks,
            grains,
            splatter,
            frozen: false,
            dead: false,
            age_ms: 0.0,
            simulated_ms: 0.0,
        }
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Age as of the last `update`.
    #[inline]
    pub fn age_ms(&self) -> f64 {
        self.age_ms
    }

    /// Particle counts per population: center, streak dots, grains, splatter.
    pub fn particle_counts(&self) -> [usize; 4] {
        [
            self.center.len(),
            self.streaks.iter().map(|s| s.dots.len()).sum(),
            self.grains.len(),
            self.splatter.len(),
        ]
    }

    /// Advance the simulation to `now` (ms on the same clock as `created_at`).
    pub fn update(&mut self, now: f64) {
        if self.dead {
            return;
        }
        let age = (now - self.created_at).max(0.0);
        self.age_ms = age;
        if age > SPLASH_LIFETIME_MS {
            self.dead = true;
            return;
        }

        let steps = ((age - self.simulated_ms) / STEP_MS).floor();
        if steps >= 1.0 {
            for _ in 0..(steps as u32).min(MAX_STEPS_PER_UPDATE) {
                self.step();
            }
            self.simulated_ms += steps * STEP_MS;
        }

        if !self.frozen && age >= FREEZE_AT_MS {
            self.freeze();
        }
    }

    fn step(&mut self) {
        for p in &mut self.center {
            p.step_damped(CENTER_DAMPING);
        }
        for s in &mut self.streaks {
            s.step();
        }
        for p in self.grains.iter_mut().chain(self.splatter.iter_mut()) {
            p.step();
        }
    }

    // One-shot: powder sticks, sideways motion dies, the drip keeps going.
    fn freeze(&mut self) {
        for p in self.grains.iter_mut().chain(self.splatter.iter_mut()) {
            p.velocity.x *= FREEZE_HORIZONTAL_DAMP;
        }
        self.frozen = true;
    }

    /// Viewport position of the impact point at the given page scroll.
    #[inline]
    pub fn draw_origin(&self, scroll_y: f32) -> Vec2 {
        Vec2::new(self.origin.x, self.origin.y + self.spawn_scroll_y - scroll_y)
    }

    /// Render back to front: bloom, center, streaks, grains, splatter.
    pub fn draw<S: SplashSurface + ?Sized>(&self, surface: &mut S, scroll_y: f32) {
        if self.dead {
            return;
        }
        let master = master_alpha(self.age_ms);
        if master <= ALPHA_EPSILON {
            return;
        }
        let at = self.draw_origin(scroll_y);
        if !at.is_finite()
            || at.y < -CULL_MARGIN_PX
            || at.y > surface.height() + CULL_MARGIN_PX
        {
            return;
        }
        let age = self.age_ms as f32;
        let pal = &self.palette;

        if self.age_ms < BLOOM_MS {
            let t = (self.age_ms / BLOOM_MS) as f32;
            let radius = self.bloom_radius * ease_out_cubic(t);
            let alpha = (1.0 - t) * BLOOM_ALPHA * master;
            if alpha > ALPHA_EPSILON && radius > 0.0 {
                surface.fill_glow(at, radius, pal.highlight, pal.base, alpha);
            }
        }

        for p in &self.center {
            surface.fill_circle(at + p.offset, p.radius, pal.sample(p.color_mix), master);
        }

        for s in &self.streaks {
            for d in &s.dots {
                let alpha = master * activation(age, d.delay_ms) * (1.0 - 0.35 * d.along);
                if alpha <= ALPHA_EPSILON {
                    continue;
                }
                surface.fill_circle(at + d.offset, d.radius, pal.sample(d.color_mix), alpha);
            }
        }

        for p in &self.grains {
            let alpha = master * GRAIN_ALPHA * activation(age, p.delay_ms);
            if alpha <= ALPHA_EPSILON {
                continue;
            }
            surface.fill_circle(at + p.offset, p.radius, pal.sample(p.color_mix), alpha);
        }

        // Splatter thins out over the whole lifetime on top of the master fade.
        let splatter_fade =
            1.0 - 0.4 * ease_in_quad((self.age_ms / SPLASH_LIFETIME_MS) as f32);
        for p in &self.splatter {
            let alpha = master * SPLATTER_ALPHA * splatter_fade * activation(age, p.delay_ms);
            if alpha <= ALPHA_EPSILON {
                continue;
            }
            surface.fill_circle(at + p.offset, p.radius, pal.sample(p.color_mix), alpha);
        }
    }
}

/// Whole-splash opacity at `age_ms`: full during the splash phase, a held
/// stain plateau, then an ease-in fade to zero at the end of the lifetime.
pub fn master_alpha(age_ms: f64) -> f32 {
    if age_ms.is_nan() || age_ms < 0.0 || age_ms > SPLASH_LIFETIME_MS {
        return 0.0;
    }
    if age_ms < SPLASH_PHASE_MS {
        return 1.0;
    }
    let u = (age_ms - SPLASH_PHASE_MS) / STAIN_PHASE_MS;
    if u < STAIN_PLATEAU_FRACTION {
        return STAIN_ALPHA;
    }
    let fade = ((u - STAIN_PLATEAU_FRACTION) / (1.0 - STAIN_PLATEAU_FRACTION)) as f32;
    (STAIN_ALPHA * (1.0 - ease_in_quad(fade))).max(0.0)
}

/// 0 before `delay_ms`, then a short linear fade-in to 1.
#[inline]
fn activation(age_ms: f32, delay_ms: f32) -> f32 {
    if age_ms < delay_ms {
        0.0
    } else {
        ((age_ms - delay_ms) / ACTIVATION_FADE_MS).min(1.0)
    }
}
