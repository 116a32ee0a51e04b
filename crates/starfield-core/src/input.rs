//! Per-instance input state.
//!
//! Event listeners write here; the next frame reads it. Each running
//! animation owns its own `InputState` so instances never see each other's
//! pointer or scroll.

use crate::constants::OFF_CANVAS;
use crate::surface::Viewport;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct InputState {
    pointer: Vec2,
    scroll_position: f32,
    scroll_travel: f32,
    clicks: SmallVec<[Vec2; 4]>,
    viewport: Viewport,
    viewport_generation: u32,
}

impl InputState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: Vec2::from(OFF_CANVAS),
            scroll_position: 0.0,
            scroll_travel: 0.0,
            clicks: SmallVec::new(),
            viewport,
            viewport_generation: 0,
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Vec2::new(x, y);
        }
    }

    pub fn pointer_left(&mut self) {
        self.pointer = Vec2::from(OFF_CANVAS);
    }

    /// Pointer position, or `None` while it rests on the off-canvas sentinel.
    pub fn pointer(&self) -> Option<Vec2> {
        (self.pointer != Vec2::from(OFF_CANVAS)).then_some(self.pointer)
    }

    /// Raw pointer value including the sentinel.
    pub fn raw_pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Absolute scroll position update (native scroll or smooth-scroll signal).
    ///
    /// Returns `false` and leaves state untouched for non-finite payloads.
    pub fn scrolled_to(&mut self, position: f32) -> bool {
        if !position.is_finite() {
            return false;
        }
        self.scroll_travel += (position - self.scroll_position).abs();
        self.scroll_position = position;
        true
    }

    /// Relative scroll (wheel or touch delta) that does not move the page position.
    pub fn scrolled_by(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        self.scroll_travel += delta.abs();
        true
    }

    pub fn scroll_position(&self) -> f32 {
        self.scroll_position
    }

    /// Sum of absolute scroll movement since creation.
    pub fn scroll_travel(&self) -> f32 {
        self.scroll_travel
    }

    pub fn clicked(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.clicks.push(Vec2::new(x, y));
        }
    }

    pub fn take_clicks(&mut self) -> SmallVec<[Vec2; 4]> {
        std::mem::take(&mut self.clicks)
    }

    pub fn resized(&mut self, width: f32, height: f32) {
        let next = Viewport::new(width, height);
        if next.is_empty() || next == self.viewport {
            return;
        }
        self.viewport = next;
        self.viewport_generation = self.viewport_generation.wrapping_add(1);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Bumped on every effective resize; simulations compare it to know when to rebuild.
    pub fn viewport_generation(&self) -> u32 {
        self.viewport_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_leave_restores_sentinel() {
        let mut input = InputState::new(Viewport::new(800.0, 600.0));
        input.pointer_moved(10.0, 20.0);
        assert_eq!(input.pointer(), Some(Vec2::new(10.0, 20.0)));
        input.pointer_left();
        assert_eq!(input.pointer(), None);
        assert_eq!(input.raw_pointer(), Vec2::new(-10000.0, -10000.0));
    }

    #[test]
    fn malformed_scroll_is_ignored() {
        let mut input = InputState::new(Viewport::new(800.0, 600.0));
        assert!(input.scrolled_to(100.0));
        assert!(!input.scrolled_to(f32::NAN));
        assert!(!input.scrolled_by(f32::INFINITY));
        assert_eq!(input.scroll_position(), 100.0);
        assert_eq!(input.scroll_travel(), 100.0);
    }

    #[test]
    fn travel_accumulates_absolute_deltas() {
        let mut input = InputState::new(Viewport::new(800.0, 600.0));
        input.scrolled_to(300.0);
        input.scrolled_to(100.0);
        input.scrolled_by(-50.0);
        assert_eq!(input.scroll_travel(), 550.0);
    }

    #[test]
    fn resize_bumps_generation_only_on_change() {
        let mut input = InputState::new(Viewport::new(800.0, 600.0));
        input.resized(800.0, 600.0);
        assert_eq!(input.viewport_generation(), 0);
        input.resized(0.0, 600.0);
        assert_eq!(input.viewport_generation(), 0);
        input.resized(1600.0, 900.0);
        assert_eq!(input.viewport_generation(), 1);
        assert_eq!(input.viewport(), Viewport::new(1600.0, 900.0));
    }

    #[test]
    fn clicks_drain_once() {
        let mut input = InputState::new(Viewport::new(800.0, 600.0));
        input.clicked(1.0, 2.0);
        input.clicked(3.0, 4.0);
        assert_eq!(input.take_clicks().len(), 2);
        assert!(input.take_clicks().is_empty());
    }
}
