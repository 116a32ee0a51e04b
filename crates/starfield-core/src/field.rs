//! Fixed-size particle pool advancing along the view axis.

use crate::surface::Viewport;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in the plane perpendicular to the view axis, centred on 0.
    pub position: Vec2,
    /// Distance from the viewer, always in `(0, max_depth]`.
    pub depth: f32,
    /// Index into the palette.
    pub tint: u8,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    max_depth: f32,
    spread: f32,
    tints: u8,
    /// Half extents of the sampling rectangle (already scaled by spread).
    extent: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(
        count: usize,
        bounds: Viewport,
        max_depth: f32,
        spread: f32,
        tints: usize,
        seed: u64,
    ) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            max_depth,
            spread,
            tints: tints.clamp(1, u8::MAX as usize) as u8,
            extent: Vec2::ZERO,
            rng: StdRng::seed_from_u64(seed),
        };
        field.initialize(count, bounds);
        field
    }

    /// Refill the pool for `bounds`, discarding every existing particle.
    pub fn initialize(&mut self, count: usize, bounds: Viewport) {
        self.extent = bounds.half_extents() * self.spread;
        self.particles.clear();
        self.particles.reserve_exact(count);
        for i in 0..count {
            let position = self.sample_position();
            // (0, max_depth]: 1 - [0, 1) is (0, 1]
            let depth = self.max_depth * (1.0 - self.rng.gen::<f32>());
            let tint = (i % self.tints as usize) as u8;
            self.particles.push(Particle {
                position,
                depth,
                tint,
            });
        }
        log::debug!(
            "[field] initialized {} particles for {}x{}",
            count,
            bounds.width,
            bounds.height
        );
    }

    /// Rebuild for a new viewport while keeping the particle count.
    pub fn resize(&mut self, bounds: Viewport) {
        let count = self.particles.len();
        self.initialize(count, bounds);
    }

    /// Move every particle `speed` units toward the viewer, recycling those that pass it.
    pub fn advance(&mut self, speed: f32) {
        let max_depth = self.max_depth;
        let extent = self.extent;
        for p in &mut self.particles {
            p.depth -= speed;
            if p.depth <= 0.0 {
                p.depth = max_depth;
                p.position = Vec2::new(
                    self.rng.gen_range(-1.0_f32..=1.0) * extent.x,
                    self.rng.gen_range(-1.0_f32..=1.0) * extent.y,
                );
            } else if p.depth > max_depth {
                p.depth = max_depth;
            }
        }
    }

    fn sample_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(-1.0_f32..=1.0) * self.extent.x,
            self.rng.gen_range(-1.0_f32..=1.0) * self.extent.y,
        )
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn max_depth(&self) -> f32 {
        self.max_depth
    }

    /// Half extents positions are sampled from (viewport half size × spread).
    pub fn extent(&self) -> Vec2 {
        self.extent
    }
}
