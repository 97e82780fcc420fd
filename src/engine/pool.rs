use super::constants::MAX_SPLASHES_LIMIT;
use super::effect::SplashEffect;
use super::params::SplashParams;
use super::surface::{SplashSurface, Viewport};
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;

/// Bounded, creation-ordered set of live splashes.
///
/// Spawning past the limit evicts the oldest splash on the spot. The pool
/// owns the random source so a fixed seed reproduces every splash.
pub struct SplashPool {
    effects: VecDeque<SplashEffect>,
    params: SplashParams,
    rng: StdRng,
    next_id: u64,
}

impl SplashPool {
    pub fn new(params: SplashParams) -> Self {
        let capacity = params.max_splashes.clamp(1, MAX_SPLASHES_LIMIT);
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            effects: VecDeque::with_capacity(capacity),
            params,
            rng,
            next_id: 0,
        }
    }

    pub fn params(&self) -> &SplashParams {
        &self.params
    }

    /// Effective limit: `max_splashes` clamped to `1..=MAX_SPLASHES_LIMIT`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.params.max_splashes.clamp(1, MAX_SPLASHES_LIMIT)
    }

    /// Start a splash at `point` (viewport CSS px). Always succeeds; returns
    /// the new splash id.
    pub fn spawn(&mut self, point: Vec2, viewport: Viewport, scroll_y: f32, now: f64) -> u64 {
        while self.effects.len() >= self.capacity() {
            if let Some(old) = self.effects.pop_front() {
                log::debug!("[splash] evict #{} (pool full)", old.id);
            }
        }
        let id = self.next_id;
        self.next_id += 1;
        let effect = SplashEffect::new(
            id,
            point,
            viewport,
            scroll_y,
            now,
            self.params.mobile_breakpoint,
            &mut self.rng,
        );
        log::debug!(
            "[splash] spawn #{} at ({:.0},{:.0}) palette={} counts={:?}",
            id,
            point.x,
            point.y,
            effect.palette.name,
            effect.particle_counts()
        );
        self.effects.push_back(effect);
        id
    }

    /// Update and draw every splash in creation order, dropping the ones
    /// whose lifetime ran out.
    pub fn tick<S: SplashSurface + ?Sized>(&mut self, now: f64, scroll_y: f32, surface: &mut S) {
        self.effects.retain_mut(|effect| {
            effect.update(now);
            if effect.is_dead() {
                log::debug!("[splash] expire #{}", effect.id);
                return false;
            }
            effect.draw(surface, scroll_y);
            true
        });
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.effects.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Live splash ids, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.effects.iter().map(|e| e.id)
    }

    pub fn get(&self, id: u64) -> Option<&SplashEffect> {
        self.effects.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SplashEffect> {
        self.effects.iter()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
