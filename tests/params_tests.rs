// Host-side tests for runtime parameter overrides.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;

use engine::constants::{MAX_SPLASHES, MAX_SPLASHES_LIMIT, MOBILE_BREAKPOINT_PX};
use engine::{ParamsError, SplashParams};

#[test]
fn defaults_match_constants() {
    let p = SplashParams::default();
    assert_eq!(p.max_splashes, MAX_SPLASHES);
    assert_eq!(p.mobile_breakpoint, MOBILE_BREAKPOINT_PX);
    assert_eq!(p.seed, None);
}

#[test]
fn apply_accepts_known_keys() {
    let mut p = SplashParams::default();
    p.apply("maxSplashes", "3").unwrap();
    p.apply("mobileBreakpoint", " 640.5 ").unwrap();
    p.apply("seed", "42").unwrap();
    assert_eq!(p.max_splashes, 3);
    assert_eq!(p.mobile_breakpoint, 640.5);
    assert_eq!(p.seed, Some(42));
}

#[test]
fn apply_rejects_bad_values_and_keeps_previous() {
    let mut p = SplashParams::default();
    for (k, v) in [
        ("maxSplashes", "0"),
        ("maxSplashes", "-2"),
        ("maxSplashes", "many"),
        ("maxSplashes", "65"),
        ("maxSplashes", "18446744073709551615"),
        ("mobileBreakpoint", "NaN"),
        ("mobileBreakpoint", "-1"),
        ("seed", "abc"),
    ] {
        let err = p.apply(k, v).unwrap_err();
        assert_eq!(
            err,
            ParamsError::InvalidValue {
                key: k.to_string(),
                value: v.to_string()
            }
        );
    }
    assert_eq!(p, SplashParams::default());
}

#[test]
fn apply_rejects_unknown_keys() {
    let mut p = SplashParams::default();
    assert_eq!(
        p.apply("gravity", "1"),
        Err(ParamsError::UnknownKey("gravity".into()))
    );
}

#[test]
fn overrides_keep_valid_entries_and_report_the_rest() {
    let (p, errors) = SplashParams::default().with_overrides([
        ("maxSplashes", "4"),
        ("colour", "red"),
        ("seed", "x"),
        ("mobileBreakpoint", "500"),
    ]);
    assert_eq!(p.max_splashes, 4);
    assert_eq!(p.mobile_breakpoint, 500.0);
    assert_eq!(p.seed, None);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].to_string().contains("colour"));
    assert!(errors[1].to_string().contains("seed"));
}

#[test]
fn oversized_splash_limit_is_rejected() {
    let (p, errors) = SplashParams::default()
        .with_overrides([("maxSplashes", "4294967295"), ("seed", "3")]);
    assert_eq!(p.max_splashes, MAX_SPLASHES);
    assert_eq!(p.seed, Some(3));
    assert_eq!(errors.len(), 1);

    let mut p = SplashParams::default();
    let limit = MAX_SPLASHES_LIMIT.to_string();
    p.apply("maxSplashes", &limit).unwrap();
    assert_eq!(p.max_splashes, MAX_SPLASHES_LIMIT);
}
