//! `requestAnimationFrame` plumbing: the browser side of the core's
//! `FrameScheduler` seam and the per-canvas mount that owns one animation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use instant::Instant;
use starfield_core::{Animation, Animator, FrameScheduler, InputState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::events::{Listener, SharedInput};
use crate::render::CanvasSurface;

pub struct RafScheduler {
    tick: Closure<dyn FnMut()>,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web::window()?;
        match window.request_animation_frame(self.tick.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle);
        }
    }
}

struct Runner<A: Animation> {
    animator: Animator<A, RafScheduler>,
    surface: CanvasSurface,
    input: SharedInput,
    generation: u32,
    last_instant: Option<Instant>,
}

impl<A: Animation> Runner<A> {
    fn tick(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_instant
            .map(|prev| now.duration_since(prev))
            .unwrap_or(Duration::ZERO);
        self.last_instant = Some(now);

        let mut input = self.input.borrow_mut();
        if input.viewport_generation() != self.generation {
            self.generation = input.viewport_generation();
            self.surface.resize(input.viewport());
        }
        self.animator.frame(dt, &mut input, &mut self.surface);
    }
}

/// Called after every frame with whether the loop is still running, outside
/// any borrow of the mount, so it may call back into JS freely.
pub type AfterFrame = Box<dyn FnMut(bool)>;

/// Attaches a component's listeners on activation.
pub type Wiring = Box<dyn Fn(&web::HtmlCanvasElement, &SharedInput) -> anyhow::Result<Vec<Listener>>>;

pub fn wiring(
    f: impl Fn(&web::HtmlCanvasElement, &SharedInput) -> anyhow::Result<Vec<Listener>> + 'static,
) -> Wiring {
    Box::new(f)
}

/// One animation bound to one canvas: surface, input, frame loop and listeners.
pub struct Mount<A: Animation + 'static> {
    runner: Rc<RefCell<Runner<A>>>,
    input: SharedInput,
    canvas: web::HtmlCanvasElement,
    wiring: Wiring,
    listeners: Vec<Listener>,
}

impl<A: Animation + 'static> Mount<A> {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        build: impl FnOnce(&InputState) -> anyhow::Result<A>,
        wiring: Wiring,
        after_frame: Option<AfterFrame>,
    ) -> anyhow::Result<Self> {
        let surface = CanvasSurface::new(canvas.clone())?;
        let mut initial = InputState::new(surface.size());
        if let Some(y) = dom::window_scroll_y() {
            initial.scrolled_to(y);
        }
        let animation = build(&initial)?;
        let input: SharedInput = Rc::new(RefCell::new(initial));

        let runner = Rc::new_cyclic(|weak: &Weak<RefCell<Runner<A>>>| {
            let weak = weak.clone();
            let mut after_frame = after_frame;
            let tick = Closure::wrap(Box::new(move || {
                let Some(runner) = weak.upgrade() else {
                    return;
                };
                let running = match runner.try_borrow_mut() {
                    Ok(mut r) => {
                        r.tick();
                        r.animator.is_running()
                    }
                    Err(_) => {
                        log::warn!("[frame] re-entrant frame skipped");
                        return;
                    }
                };
                if let Some(f) = after_frame.as_mut() {
                    f(running);
                }
            }) as Box<dyn FnMut()>);
            RefCell::new(Runner {
                animator: Animator::new(animation, RafScheduler { tick }),
                surface,
                input: input.clone(),
                generation: 0,
                last_instant: None,
            })
        });

        Ok(Self {
            runner,
            input,
            canvas,
            wiring,
            listeners: Vec::new(),
        })
    }

    pub fn activate(&mut self) -> anyhow::Result<()> {
        if self.listeners.is_empty() {
            self.listeners = (self.wiring)(&self.canvas, &self.input)?;
        }
        let (w, h) = dom::css_size(&self.canvas);
        self.input.borrow_mut().resized(w as f32, h as f32);

        let mut runner = self
            .runner
            .try_borrow_mut()
            .map_err(|_| anyhow::anyhow!("activate during a frame"))?;
        runner.last_instant = None;
        runner.animator.activate();
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.listeners.clear();
        match self.runner.try_borrow_mut() {
            Ok(mut runner) => runner.animator.deactivate(),
            Err(_) => log::warn!("[frame] deactivate during a frame ignored"),
        }
    }

    pub fn input(&self) -> &SharedInput {
        &self.input
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn handle(&self) -> MountHandle<A> {
        MountHandle {
            runner: Rc::downgrade(&self.runner),
        }
    }

    pub fn with_animation<R>(&self, f: impl FnOnce(&mut A) -> R) -> Option<R> {
        self.handle().with_animation(f)
    }
}

impl<A: Animation + 'static> Drop for Mount<A> {
    fn drop(&mut self) {
        // A pending frame must not reach a dropped closure.
        self.deactivate();
    }
}

/// Weak reference to a mount's animation for timers and callbacks.
pub struct MountHandle<A: Animation> {
    runner: Weak<RefCell<Runner<A>>>,
}

impl<A: Animation> MountHandle<A> {
    pub fn with_animation<R>(&self, f: impl FnOnce(&mut A) -> R) -> Option<R> {
        let runner = self.runner.upgrade()?;
        let mut runner = runner.try_borrow_mut().ok()?;
        Some(f(runner.animator.animation_mut()))
    }
}

/// `setTimeout` registration cleared on drop.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay: Duration, f: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay.as_millis().min(i32::MAX as u128) as i32,
            )
            .map_err(|e| anyhow::anyhow!("setTimeout failed: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
