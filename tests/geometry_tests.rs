// Host-side tests for pure coordinate helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}

use geometry::*;

#[test]
fn backing_store_scales_with_clamped_dpr() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    // 3x screens are capped at 2x
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 0.5), (800, 600));
}

#[test]
fn backing_store_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 5.0, 1.0), (1, 5));
}

#[test]
fn non_finite_dpr_falls_back_to_one() {
    assert_eq!(clamp_dpr(f64::NAN), 1.0);
    assert_eq!(clamp_dpr(f64::INFINITY), 1.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
}

#[test]
fn client_points_become_canvas_local() {
    let p = to_local(150.0, 80.0, 100.0, 20.0);
    assert_eq!(p, glam::Vec2::new(50.0, 60.0));
}

#[test]
fn wheel_modes_convert_to_pixels() {
    assert_eq!(wheel_delta_px(120.0, 0), 120.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2), -800.0);
}

#[test]
fn touch_drag_up_scrolls_down() {
    assert_eq!(touch_delta(None, 300.0), 0.0);
    assert_eq!(touch_delta(Some(300.0), 250.0), 50.0);
    assert_eq!(touch_delta(Some(250.0), 300.0), -50.0);
    assert_eq!(touch_delta(Some(f32::NAN), 300.0), 0.0);
}
