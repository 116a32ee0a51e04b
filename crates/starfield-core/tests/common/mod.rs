// Shared test doubles: a surface that counts draw calls and a scheduler
// driven by hand.
#![allow(dead_code)]

use glam::Vec2;
use starfield_core::{Color, FrameScheduler, PathCommand, Surface, Viewport};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Debug)]
pub struct Recording {
    pub backgrounds: usize,
    pub clears: usize,
    pub segments: usize,
    pub circles: usize,
    pub rings: usize,
    pub vignettes: Vec<(Vec2, f32)>,
    pub paths: Vec<Vec<PathCommand>>,
    pub polylines: usize,
    pub out_of_bounds: usize,
}

impl Recording {
    pub fn writes(&self) -> usize {
        self.backgrounds
            + self.clears
            + self.segments
            + self.circles
            + self.rings
            + self.vignettes.len()
            + self.paths.len()
            + self.polylines
    }
}

pub struct RecordingSurface {
    pub size: Viewport,
    pub log: Recording,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Viewport::new(width, height),
            log: Recording::default(),
        }
    }

    fn check(&mut self, p: Vec2) {
        if !self.size.contains(p) {
            self.log.out_of_bounds += 1;
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn fill_background(&mut self, _color: Color, _alpha: f32) {
        self.log.backgrounds += 1;
    }

    fn clear(&mut self) {
        self.log.clears += 1;
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, _width: f32, _color: Color, _alpha: f32) {
        self.check(from);
        self.check(to);
        self.log.segments += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _alpha: f32) {
        self.log.circles += 1;
    }

    fn stroke_circle(&mut self, _c: Vec2, _r: f32, _w: f32, _color: Color, _alpha: f32) {
        self.log.rings += 1;
    }

    fn vignette(&mut self, center: Vec2, radius: f32, _strength: f32) {
        self.log.vignettes.push((center, radius));
    }

    fn stroke_fading_path(
        &mut self,
        path: &[PathCommand],
        _width: f32,
        _color: Color,
        _alpha: f32,
        _glow: f32,
    ) {
        self.log.paths.push(path.to_vec());
    }

    fn stroke_polyline(&mut self, _points: &[Vec2], _width: f32, _color: Color, _alpha: f32) {
        self.log.polylines += 1;
    }
}

#[derive(Default, Debug)]
pub struct SchedulerLog {
    pub requested: u32,
    pub cancelled: Vec<u32>,
}

/// Hands out increasing ids and records cancellations.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pub log: Rc<RefCell<SchedulerLog>>,
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        let mut log = self.log.borrow_mut();
        log.requested += 1;
        Some(log.requested)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.log.borrow_mut().cancelled.push(handle);
    }
}
