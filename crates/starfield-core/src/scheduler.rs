//! Host-agnostic frame scheduling.
//!
//! The browser's `requestAnimationFrame` (or a test harness) sits behind
//! [`FrameScheduler`]. [`Animator`] keeps at most one registration pending,
//! cancels it on deactivation and stops writing to the surface once stopped.

use crate::clock::{FrameTime, SimClock};
use crate::input::InputState;
use crate::surface::Surface;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub trait FrameScheduler {
    type Handle: Copy + std::fmt::Debug;

    /// Ask the host for one future frame; `None` if the host cannot schedule.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

pub trait Animation {
    /// Simulate and paint one frame.
    fn frame(
        &mut self,
        time: FrameTime,
        input: &mut InputState,
        surface: &mut dyn Surface,
    ) -> LoopControl;

    /// Release per-run state; called when the loop stops for any reason.
    fn deactivate(&mut self) {}
}

/// Tracks the single outstanding frame registration of one component.
#[derive(Debug)]
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    running: bool,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.schedule();
    }

    /// Mark the pending registration as consumed by the host; returns whether the loop runs.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Register the next frame unless one is already pending.
    pub fn schedule(&mut self) {
        if self.running && self.pending.is_none() {
            self.pending = self.scheduler.request_frame();
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

/// Drives one [`Animation`] through a [`FrameScheduler`].
pub struct Animator<A: Animation, S: FrameScheduler> {
    animation: A,
    frames: FrameLoop<S>,
    clock: SimClock,
}

impl<A: Animation, S: FrameScheduler> Animator<A, S> {
    pub fn new(animation: A, scheduler: S) -> Self {
        Self {
            animation,
            frames: FrameLoop::new(scheduler),
            clock: SimClock::new(),
        }
    }

    pub fn activate(&mut self) {
        if self.frames.is_running() {
            return;
        }
        self.clock.reset();
        self.frames.start();
    }

    pub fn deactivate(&mut self) {
        if !self.frames.is_running() {
            return;
        }
        self.frames.stop();
        self.animation.deactivate();
    }

    /// Host frame callback. `dt` is the wall-clock gap since the previous
    /// callback (zero when unknown). Does nothing once deactivated.
    pub fn frame(&mut self, dt: Duration, input: &mut InputState, surface: &mut dyn Surface) {
        if !self.frames.on_frame() {
            return;
        }
        let time = self.clock.tick(dt);
        match self.animation.frame(time, input, surface) {
            LoopControl::Continue => self.frames.schedule(),
            LoopControl::Stop => {
                self.frames.stop();
                self.animation.deactivate();
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    pub fn frame_loop(&self) -> &FrameLoop<S> {
        &self.frames
    }
}
