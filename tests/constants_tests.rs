// Host-side tests for the browser crate's constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use starfield_core::constants as core;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dpr_range_is_sane() {
    assert!(MIN_DPR >= 1.0);
    assert!(MAX_DPR >= MIN_DPR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wheel_units_grow_with_mode() {
    assert!(WHEEL_LINE_HEIGHT_PX > 1.0);
    assert!(WHEEL_PAGE_HEIGHT_PX > WHEEL_LINE_HEIGHT_PX);
}

#[test]
fn event_names_are_non_empty() {
    assert_eq!(LENIS_SCROLL_EVENT, "lenis-scroll");
    assert!(!LENIS_SCROLL_FIELD.is_empty());
    assert!(!HIDDEN_CLASS.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_tuning_has_logical_relationships() {
    // Ambient streaks must stay shorter than warp streaks.
    assert!(core::AMBIENT_MAX_TAIL < core::WARP_MAX_TAIL);
    // The warp phase must be reachable from the acceleration ceiling.
    assert!(core::WARP_FAST_THRESHOLD < core::WARP_CEILING);
    assert!(core::WARP_CEILING <= core::WARP_MAX_SPEED);
    assert!(core::AMBIENT_SPEED_MIN < core::AMBIENT_SPEED_MAX);
    assert!(core::VIGNETTE_RADIUS_MIN < core::VIGNETTE_RADIUS_MAX);
    assert!(GLOW_ALPHA > 0.0 && GLOW_ALPHA <= 1.0);
    assert!(core::TRANSITION_FALLBACK_SECS > 0.0);
}
