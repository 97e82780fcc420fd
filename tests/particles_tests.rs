// Host-side tests for the particle population generators and spawn scaling.
// The main crate is wasm-only, so we load the pure engine modules directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;

use engine::constants::*;
use engine::particles::{center_cluster, grains, splatter, streaks};
use engine::{SpawnScale, Viewport};
use glam::Vec2;
use rand::prelude::*;

fn desktop() -> SpawnScale {
    SpawnScale::new(
        Vec2::new(512.0, 384.0),
        Viewport::new(1024.0, 768.0),
        MOBILE_BREAKPOINT_PX,
    )
}

#[test]
fn centered_desktop_spawn_is_full_scale() {
    assert_eq!(desktop(), SpawnScale::DESKTOP);
}

#[test]
fn edge_spawn_is_weaker_but_not_below_seventy_percent() {
    let edge = SpawnScale::new(
        Vec2::new(0.0, 384.0),
        Viewport::new(1024.0, 768.0),
        MOBILE_BREAKPOINT_PX,
    );
    assert!(!edge.mobile);
    assert!((edge.speed - 0.7).abs() < 1e-6);
    assert_eq!(edge.count, 1.0);
}

#[test]
fn narrow_viewport_scales_counts_and_speeds_down() {
    let s = SpawnScale::new(
        Vec2::new(187.0, 400.0),
        Viewport::new(375.0, 800.0),
        MOBILE_BREAKPOINT_PX,
    );
    assert!(s.mobile);
    assert!(s.speed < 1.0 && s.speed > 0.0);
    assert_eq!(s.count_range(GRAIN_COUNT), (210, 300));
    assert_eq!(s.count_range(CENTER_COUNT), (24, 42));
}

#[test]
fn degenerate_viewports_never_produce_nan_scales() {
    for vp in [
        Viewport::new(0.0, 0.0),
        Viewport::new(-50.0, 300.0),
        Viewport::new(f32::NAN, f32::INFINITY),
    ] {
        let s = SpawnScale::new(Vec2::new(10.0, 10.0), vp, MOBILE_BREAKPOINT_PX);
        assert!(s.speed.is_finite() && s.speed > 0.0, "{vp:?} -> {s:?}");
        assert!(s.count.is_finite() && s.count > 0.0, "{vp:?} -> {s:?}");
    }
}

#[test]
fn zero_width_generators_are_finite_with_non_negative_speeds() {
    let scale = SpawnScale::new(Vec2::new(0.0, 0.0), Viewport::new(0.0, 0.0), MOBILE_BREAKPOINT_PX);
    let mut rng = StdRng::seed_from_u64(5);
    let all = center_cluster(&mut rng, &scale)
        .into_iter()
        .chain(grains(&mut rng, &scale))
        .chain(splatter(&mut rng, &scale));
    let mut n = 0;
    for p in all {
        n += 1;
        assert!(p.offset.is_finite() && p.velocity.is_finite());
        assert!(p.radius.is_finite() && p.radius > 0.0);
        assert!(p.speed() >= 0.0);
    }
    assert!(n > 0);
    for s in streaks(&mut rng, &scale) {
        assert!(s.reach.is_finite() && s.reach >= 0.0);
    }
}

#[test]
fn desktop_counts_stay_in_documented_ranges() {
    let scale = desktop();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = center_cluster(&mut rng, &scale).len();
        assert!((CENTER_COUNT.0..=CENTER_COUNT.1).contains(&c), "center {c}");

        let st = streaks(&mut rng, &scale);
        assert!((STREAK_COUNT.0..=STREAK_COUNT.1).contains(&st.len()));
        for s in &st {
            assert!((STREAK_DOTS.0..=STREAK_DOTS.1).contains(&s.dots.len()));
        }

        let g = grains(&mut rng, &scale).len();
        assert!((GRAIN_COUNT.0..=GRAIN_COUNT.1).contains(&g), "grains {g}");

        let sp = splatter(&mut rng, &scale).len();
        assert!((SPLATTER_COUNT.0..=SPLATTER_COUNT.1).contains(&sp), "splatter {sp}");
    }
}

#[test]
fn grain_speeds_are_skewed_toward_slow() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut speeds: Vec<f32> = grains(&mut rng, &desktop()).iter().map(|p| p.speed()).collect();
    speeds.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let median = speeds[speeds.len() / 2];
    let midpoint = (GRAIN_SPEED.0 + GRAIN_SPEED.1) / 2.0;
    assert!(median < midpoint, "median {median} not below {midpoint}");
    for s in &speeds {
        assert!(*s >= GRAIN_SPEED.0 - 1e-3 && *s <= GRAIN_SPEED.1 + 1e-3);
    }
}

#[test]
fn generated_parameters_respect_ranges() {
    let mut rng = StdRng::seed_from_u64(12);
    for p in grains(&mut rng, &desktop()) {
        assert!(p.drag >= GRAIN_DRAG.0 && p.drag < GRAIN_DRAG.1);
        assert!(p.gravity >= GRAIN_GRAVITY.0 && p.gravity < GRAIN_GRAVITY.1);
        assert!((0.0..=1.0).contains(&p.color_mix));
        assert!(p.delay_ms >= GRAIN_DELAY_MS.0 && p.delay_ms < GRAIN_DELAY_MS.1);
        assert_eq!(p.offset, Vec2::ZERO);
    }
    for p in splatter(&mut rng, &desktop()) {
        assert!(p.gravity >= SPLATTER_GRAVITY.0 && p.gravity < SPLATTER_GRAVITY.1);
        assert!(p.speed() >= SPLATTER_SPEED.0 - 1e-3 && p.speed() <= SPLATTER_SPEED.1 + 1e-3);
    }
    for p in center_cluster(&mut rng, &desktop()) {
        assert_eq!(p.gravity, 0.0);
        assert!(p.offset.length() <= CENTER_SPREAD.1 + 1e-3);
    }
}

#[test]
fn streak_dots_run_root_to_tip_and_grow_outward() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut st = streaks(&mut rng, &desktop());
    for s in &st {
        let along: Vec<f32> = s.dots.iter().map(|d| d.along).collect();
        assert!(along.windows(2).all(|w| w[0] <= w[1]));
        assert!(along.iter().all(|a| (0.0..=1.0).contains(a)));
    }
    let s = &mut st[0];
    s.step();
    let early = s.extent;
    for _ in 0..30 {
        s.step();
    }
    assert!(s.extent > early && s.extent <= 1.0);
    let tip = s.dots.last().unwrap();
    assert!(tip.offset.length() > 0.0);
}

#[test]
fn same_seed_same_population() {
    let a = grains(&mut StdRng::seed_from_u64(99), &desktop());
    let b = grains(&mut StdRng::seed_from_u64(99), &desktop());
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.velocity, pb.velocity);
        assert_eq!(pa.radius, pb.radius);
    }
}
