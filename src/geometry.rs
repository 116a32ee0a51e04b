// Pure coordinate helpers shared by the DOM listeners and the canvas surface.
use glam::Vec2;

use crate::constants::{MAX_DPR, MIN_DPR, WHEEL_LINE_HEIGHT_PX, WHEEL_PAGE_HEIGHT_PX};

#[inline]
pub fn clamp_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(MIN_DPR, MAX_DPR)
    } else {
        MIN_DPR
    }
}

/// Backing-store size in device pixels for a canvas of `css_w × css_h`.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_dpr(dpr);
    let w = (css_w.max(0.0) * dpr).round() as u32;
    let h = (css_h.max(0.0) * dpr).round() as u32;
    (w.max(1), h.max(1))
}

/// Client coordinates to canvas-local CSS pixels.
#[inline]
pub fn to_local(client_x: f64, client_y: f64, left: f64, top: f64) -> Vec2 {
    Vec2::new((client_x - left) as f32, (client_y - top) as f32)
}

/// Normalize a `WheelEvent.deltaY` to pixels according to its `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        1 => WHEEL_LINE_HEIGHT_PX,
        2 => WHEEL_PAGE_HEIGHT_PX,
        _ => 1.0,
    };
    delta_y as f32 * scale
}

/// Scroll delta implied by a finger moving from `previous` to `current`.
///
/// Dragging up scrolls the page down, hence the sign flip.
#[inline]
pub fn touch_delta(previous: Option<f32>, current: f32) -> f32 {
    match previous {
        Some(prev) if prev.is_finite() && current.is_finite() => prev - current,
        _ => 0.0,
    }
}
