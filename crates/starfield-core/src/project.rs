//! Perspective projection of the particle field and its 2D rendering.

use crate::config::FieldConfig;
use crate::constants::*;
use crate::field::{Particle, ParticleField};
use crate::surface::{Color, Surface, Viewport};
use glam::Vec2;

/// What a single particle turns into on screen this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StarMark {
    Streak { from: Vec2, to: Vec2, alpha: f32 },
    Dot { at: Vec2, radius: f32, alpha: f32 },
}

#[derive(Clone, Debug)]
pub struct Projector {
    pub focal_length: f32,
    pub safe_radius: f32,
    pub fade_range: f32,
    pub slow_threshold: f32,
    pub max_depth: f32,
}

impl Projector {
    pub fn from_config(cfg: &FieldConfig) -> Self {
        Self {
            focal_length: cfg.focal_length,
            safe_radius: cfg.safe_radius,
            fade_range: cfg.fade_range,
            slow_threshold: cfg.slow_threshold,
            max_depth: cfg.max_depth,
        }
    }

    /// Screen position of a point at `depth` with perspective divide `focal / depth`.
    #[inline]
    pub fn project(&self, position: Vec2, depth: f32, center: Vec2) -> Vec2 {
        let k = self.focal_length / depth;
        center + position * k
    }

    /// Decide how particle `index` is drawn, or `None` if it is hidden.
    pub fn mark(
        &self,
        index: usize,
        p: &Particle,
        speed: f32,
        tail: f32,
        time: f32,
        viewport: Viewport,
    ) -> Option<StarMark> {
        let center = viewport.center();
        let head = self.project(p.position, p.depth, center);
        if !viewport.contains(head) {
            return None;
        }
        let dist = head.distance(center);
        if dist < self.safe_radius {
            return None;
        }
        let proximity = if self.fade_range > 0.0 {
            ((dist - self.safe_radius) / self.fade_range).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let nearness = (1.0 - p.depth / self.max_depth).clamp(0.0, 1.0);

        if speed > self.slow_threshold {
            let from = viewport.clamp(self.project(p.position, p.depth + tail, center));
            let alpha = nearness * proximity;
            (alpha > 0.0).then_some(StarMark::Streak {
                from,
                to: head,
                alpha,
            })
        } else {
            let twinkle = 0.6
                + 0.4
                    * (p.depth * TWINKLE_DEPTH_FREQ + time * TWINKLE_TIME_FREQ + index as f32)
                        .sin();
            let alpha = (twinkle * proximity * (0.3 + 0.7 * nearness)).clamp(0.0, 1.0);
            let radius = STAR_RADIUS_MIN + STAR_RADIUS_SPAN * nearness;
            (alpha > 0.0).then_some(StarMark::Dot {
                at: head,
                radius,
                alpha,
            })
        }
    }

    /// Paint one frame: optional opaque background, stars, then the pointer vignette.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        field: &ParticleField,
        palette: &[Color],
        background: Option<Color>,
        speed: f32,
        tail: f32,
        time: f32,
        pointer: Option<Vec2>,
        surface: &mut dyn Surface,
    ) {
        let viewport = surface.size();
        if let Some(background) = background {
            surface.fill_background(background, 1.0);
        }
        if viewport.is_empty() || palette.is_empty() {
            return;
        }
        for (i, p) in field.particles().iter().enumerate() {
            let color = palette[p.tint as usize % palette.len()];
            match self.mark(i, p, speed, tail, time, viewport) {
                Some(StarMark::Streak { from, to, alpha }) => {
                    surface.stroke_segment(from, to, STREAK_WIDTH, color, alpha);
                }
                Some(StarMark::Dot { at, radius, alpha }) => {
                    surface.fill_circle(at, radius, color, alpha);
                }
                None => {}
            }
        }
        if let Some(pointer) = pointer {
            surface.vignette(pointer, vignette_radius(viewport), VIGNETTE_STRENGTH);
        }
    }
}

/// Vignette radius scaled to the viewport diagonal, clamped to `[120, 420]` px.
#[inline]
pub fn vignette_radius(viewport: Viewport) -> f32 {
    (viewport.diagonal() * VIGNETTE_DIAGONAL_FRACTION).clamp(VIGNETTE_RADIUS_MIN, VIGNETTE_RADIUS_MAX)
}
