// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/engine/mod.rs"]
mod engine;

use constants::*;
use engine::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lifecycle_phases_add_up() {
    assert_eq!(SPLASH_LIFETIME_MS, SPLASH_PHASE_MS + STAIN_PHASE_MS);
    assert!(FREEZE_AT_MS > 0.0 && FREEZE_AT_MS < SPLASH_LIFETIME_MS);
    assert!(BLOOM_MS < SPLASH_PHASE_MS);
    assert!(STAIN_PLATEAU_FRACTION > 0.0 && STAIN_PLATEAU_FRACTION < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphas_are_fractions_above_epsilon() {
    for a in [STAIN_ALPHA, BLOOM_ALPHA, GRAIN_ALPHA, SPLATTER_ALPHA] {
        assert!(a > ALPHA_EPSILON && a <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    for (lo, hi) in [CENTER_COUNT, STREAK_COUNT, STREAK_DOTS, GRAIN_COUNT, SPLATTER_COUNT] {
        assert!(lo > 0 && lo <= hi);
    }
    for (lo, hi) in [
        CENTER_SPEED,
        STREAK_REACH,
        GRAIN_SPEED,
        GRAIN_GRAVITY,
        SPLATTER_SPEED,
        SPLATTER_GRAVITY,
        GRAIN_DELAY_MS,
        SPLATTER_DELAY_MS,
    ] {
        assert!(lo >= 0.0 && lo < hi);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drags_and_scales_stay_below_one() {
    for (lo, hi) in [GRAIN_DRAG, SPLATTER_DRAG] {
        assert!(lo > 0.0 && hi < 1.0);
    }
    assert!(CENTER_DAMPING < 1.0);
    assert!(FREEZE_HORIZONTAL_DAMP > 0.0 && FREEZE_HORIZONTAL_DAMP < 1.0);
    assert!(MOBILE_COUNT_SCALE < 1.0 && MOBILE_SPEED_SCALE < 1.0);
    assert!(MIN_WIDTH_SCALE > 0.0);
    // Splatter is the heavy population.
    assert!(SPLATTER_GRAVITY.0 >= GRAIN_GRAVITY.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_wiring_constants_are_sane() {
    assert!(!CANVAS_ID.is_empty() && !TOGGLE_ID.is_empty());
    assert_ne!(CANVAS_ID, TOGGLE_ID);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(ANCHOR_SCROLL_OFFSET_PX <= 0.0);
    assert!(REDUCED_MOTION_QUERY.contains("reduce"));
    assert!(MAX_SPLASHES >= 1 && MAX_SPLASHES <= MAX_SPLASHES_LIMIT);
}
