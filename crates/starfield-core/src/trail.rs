//! Pointer trail: a short history of pointer positions drawn as a smoothed
//! curve, plus transient click ripples.

use crate::clock::FrameTime;
use crate::config::TrailConfig;
use crate::constants::RIPPLE_WIDTH;
use crate::input::InputState;
use crate::scheduler::{Animation, LoopControl};
use crate::surface::{PathCommand, Surface};
use glam::Vec2;
use smallvec::SmallVec;

pub type TrailPath = SmallVec<[PathCommand; 24]>;

/// Most-recent-first point history with a fixed capacity.
#[derive(Clone, Debug)]
pub struct Trail {
    points: SmallVec<[Vec2; 24]>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: SmallVec::new(),
            capacity: capacity.max(2),
        }
    }

    /// Insert at the front, evicting from the back past capacity.
    pub fn push(&mut self, point: Vec2) {
        self.points.insert(0, point);
        self.points.truncate(self.capacity);
    }

    /// Drop the oldest point; used while the pointer is away so the trail decays.
    pub fn decay(&mut self) {
        self.points.pop();
    }

    /// Move every stored point vertically, e.g. by `-scroll_delta` to stay pinned to content.
    pub fn shift_y(&mut self, dy: f32) {
        for p in &mut self.points {
            p.y += dy;
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Smoothed path through the points: each interior point is a quadratic
    /// control point ending at the midpoint to its successor, closed by a
    /// straight line to the oldest point. Empty for fewer than two points.
    pub fn path(&self) -> TrailPath {
        let mut path = TrailPath::new();
        let pts = &self.points;
        if pts.len() < 2 {
            return path;
        }
        path.push(PathCommand::MoveTo(pts[0]));
        for i in 1..pts.len() - 1 {
            let ctrl = pts[i];
            let to = (pts[i] + pts[i + 1]) * 0.5;
            path.push(PathCommand::QuadTo { ctrl, to });
        }
        path.push(PathCommand::LineTo(pts[pts.len() - 1]));
        path
    }
}

/// Expanding, fading ring spawned by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub center: Vec2,
    pub born: f32,
}

impl Ripple {
    /// Fraction of the lifetime used, in `[0, 1]`.
    pub fn progress(&self, now: f32, lifetime: f32) -> f32 {
        ((now - self.born) / lifetime).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self, now: f32, lifetime: f32) -> bool {
        now - self.born >= lifetime
    }
}

/// The trail animation: one instance per overlay canvas.
pub struct CursorTrail {
    config: TrailConfig,
    trail: Trail,
    ripples: SmallVec<[Ripple; 8]>,
    last_scroll: Option<f32>,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> Self {
        let trail = Trail::new(config.capacity);
        Self {
            config,
            trail,
            ripples: SmallVec::new(),
            last_scroll: None,
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Advance the point history and ripples without drawing.
    pub fn step(&mut self, time: FrameTime, input: &mut InputState) {
        if self.config.attach_to_scroll {
            let scroll = input.scroll_position();
            if let Some(last) = self.last_scroll {
                let delta = scroll - last;
                if delta != 0.0 {
                    self.trail.shift_y(-delta);
                }
            }
            self.last_scroll = Some(scroll);
        }

        match input.pointer() {
            Some(p) => self.trail.push(p),
            None => self.trail.decay(),
        }

        for center in input.take_clicks() {
            self.ripples.push(Ripple {
                center,
                born: time.elapsed,
            });
        }
        let lifetime = self.config.ripple_lifetime;
        self.ripples.retain(|r| !r.is_expired(time.elapsed, lifetime));
    }

    fn draw(&self, now: f32, surface: &mut dyn Surface) {
        surface.clear();
        let cfg = &self.config;
        let path = self.trail.path();
        if !path.is_empty() {
            surface.stroke_fading_path(&path, cfg.width, cfg.color, cfg.opacity, cfg.glow);
        }
        for r in &self.ripples {
            let t = r.progress(now, cfg.ripple_lifetime);
            surface.stroke_circle(
                r.center,
                cfg.ripple_max_radius * t,
                RIPPLE_WIDTH,
                cfg.color,
                1.0 - t,
            );
        }
    }
}

impl Animation for CursorTrail {
    fn frame(
        &mut self,
        time: FrameTime,
        input: &mut InputState,
        surface: &mut dyn Surface,
    ) -> LoopControl {
        self.step(time, input);
        self.draw(time.elapsed, surface);
        LoopControl::Continue
    }

    fn deactivate(&mut self) {
        self.trail.clear();
        self.ripples.clear();
        self.last_scroll = None;
    }
}
