//! DOM listeners feeding per-instance [`InputState`].
//!
//! Each listener is owned by a [`Listener`] guard and detached when the guard
//! is dropped, so deactivating a component removes every handler it added.

use std::cell::RefCell;
use std::rc::Rc;

use starfield_core::InputState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;
mod scroll;

pub use pointer::{wire_clicks, wire_pointer, wire_resize};
pub use scroll::{wire_scroll_position, wire_scroll_travel};

pub type SharedInput = Rc<RefCell<InputState>>;

pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listener on `window`.
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Self::new(window.as_ref(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Run `f` on the input state unless a frame is reading it right now.
#[inline]
fn with_input(input: &SharedInput, f: impl FnOnce(&mut InputState)) {
    match input.try_borrow_mut() {
        Ok(mut state) => f(&mut state),
        Err(_) => log::debug!("[events] input busy, event dropped"),
    }
}
