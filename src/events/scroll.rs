use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use super::{with_input, Listener, SharedInput};
use crate::constants::{LENIS_SCROLL_EVENT, LENIS_SCROLL_FIELD};
use crate::dom;
use crate::geometry::{touch_delta, wheel_delta_px};

/// `detail.scroll` of a smooth-scroll event, if present and finite.
fn lenis_scroll(ev: &web::Event) -> Option<f32> {
    let detail = ev.dyn_ref::<web::CustomEvent>()?.detail();
    let value = js_sys::Reflect::get(&detail, &JsValue::from_str(LENIS_SCROLL_FIELD)).ok()?;
    value.as_f64().map(|v| v as f32).filter(|v| v.is_finite())
}

/// Absolute scroll position from native scrolling and the smooth-scroll signal.
pub fn wire_scroll_position(input: &SharedInput) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(2);

    let input_native = input.clone();
    listeners.push(Listener::on_window("scroll", move |_ev: web::Event| {
        if let Some(y) = dom::window_scroll_y() {
            with_input(&input_native, |s| {
                s.scrolled_to(y);
            });
        }
    })?);

    let input_lenis = input.clone();
    listeners.push(Listener::on_window(LENIS_SCROLL_EVENT, move |ev: web::Event| {
        match lenis_scroll(&ev) {
            Some(y) => with_input(&input_lenis, |s| {
                s.scrolled_to(y);
            }),
            None => log::debug!("[scroll] ignoring malformed {} payload", LENIS_SCROLL_EVENT),
        }
    })?);

    Ok(listeners)
}

/// Scroll intent from wheel and touch gestures, counted even when the page cannot move.
pub fn wire_scroll_travel(input: &SharedInput) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(3);

    let input_wheel = input.clone();
    listeners.push(Listener::on_window("wheel", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::WheelEvent>() {
            let delta = wheel_delta_px(ev.delta_y(), ev.delta_mode());
            with_input(&input_wheel, |s| {
                s.scrolled_by(delta);
            });
        }
    })?);

    let last_touch: Rc<Cell<Option<f32>>> = Rc::new(Cell::new(None));
    let input_touch = input.clone();
    let touch_move = last_touch.clone();
    listeners.push(Listener::on_window("touchmove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let y = touch.client_y() as f32;
        let delta = touch_delta(touch_move.replace(Some(y)), y);
        if delta != 0.0 {
            with_input(&input_touch, |s| {
                s.scrolled_by(delta);
            });
        }
    })?);

    listeners.push(Listener::on_window("touchend", move |_ev: web::Event| {
        last_touch.set(None);
    })?);

    Ok(listeners)
}
