use wasm_bindgen::JsCast;
use web_sys as web;

use super::{with_input, Listener, SharedInput};
use crate::dom;
use crate::geometry::to_local;

fn local_point(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    to_local(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

/// Pointer position in canvas-local CSS pixels; leaving the document parks
/// the pointer on the off-canvas sentinel.
pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    input: &SharedInput,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(2);

    let canvas_move = canvas.clone();
    let input_move = input.clone();
    listeners.push(Listener::on_window("pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            let p = local_point(ev, &canvas_move);
            with_input(&input_move, |s| s.pointer_moved(p.x, p.y));
        }
    })?);

    // `pointerleave` does not bubble and never reaches `Document` itself.
    let root = dom::window_document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;
    let input_leave = input.clone();
    listeners.push(Listener::new(
        root.as_ref(),
        "pointerleave",
        move |_ev: web::Event| with_input(&input_leave, |s| s.pointer_left()),
    )?);

    Ok(listeners)
}

pub fn wire_clicks(
    canvas: &web::HtmlCanvasElement,
    input: &SharedInput,
) -> anyhow::Result<Listener> {
    let canvas = canvas.clone();
    let input = input.clone();
    Listener::on_window("click", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let p = local_point(ev, &canvas);
            with_input(&input, |s| s.clicked(p.x, p.y));
        }
    })
}

/// Window resizes update the simulation viewport; the surface follows on the next frame.
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    input: &SharedInput,
) -> anyhow::Result<Listener> {
    let canvas = canvas.clone();
    let input = input.clone();
    Listener::on_window("resize", move |_ev: web::Event| {
        let (w, h) = dom::css_size(&canvas);
        with_input(&input, |s| s.resized(w as f32, h as f32));
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use starfield_core::{InputState, Viewport};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> web::HtmlCanvasElement {
        dom::window_document()
            .and_then(|d| d.create_element("canvas").ok())
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn leaving_the_page_parks_the_pointer_off_canvas() {
        let input: SharedInput =
            Rc::new(RefCell::new(InputState::new(Viewport::new(800.0, 600.0))));
        let _listeners = wire_pointer(&canvas(), &input).unwrap();
        input.borrow_mut().pointer_moved(120.0, 80.0);
        assert!(input.borrow().pointer().is_some());

        let root = dom::window_document()
            .and_then(|d| d.document_element())
            .unwrap();
        let leave = web::Event::new("pointerleave").unwrap();
        root.dispatch_event(&leave).unwrap();
        assert_eq!(input.borrow().pointer(), None);
    }

    #[wasm_bindgen_test]
    fn pointer_events_move_the_pointer() {
        let input: SharedInput =
            Rc::new(RefCell::new(InputState::new(Viewport::new(800.0, 600.0))));
        let _listeners = wire_pointer(&canvas(), &input).unwrap();
        assert_eq!(input.borrow().pointer(), None);

        let window = web::window().unwrap();
        let moved = web::PointerEvent::new("pointermove").unwrap();
        window.dispatch_event(&moved).unwrap();
        assert_eq!(input.borrow().pointer(), Some(glam::Vec2::ZERO));
    }

    #[wasm_bindgen_test]
    fn dropped_listeners_stop_tracking_leave() {
        let input: SharedInput =
            Rc::new(RefCell::new(InputState::new(Viewport::new(800.0, 600.0))));
        drop(wire_pointer(&canvas(), &input).unwrap());
        input.borrow_mut().pointer_moved(10.0, 10.0);
        let root = dom::window_document()
            .and_then(|d| d.document_element())
            .unwrap();
        root.dispatch_event(&web::Event::new("pointerleave").unwrap()).unwrap();
        assert_eq!(input.borrow().pointer(), Some(glam::Vec2::new(10.0, 10.0)));
    }
}
