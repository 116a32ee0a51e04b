//! Drawing seam between the simulations and a concrete 2D surface.
//!
//! Everything the engine paints goes through [`Surface`]. The web front-end
//! implements it over a canvas 2D context; tests implement it with a recorder.

use glam::Vec2;

/// Size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn diagonal(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Half extents, i.e. the `[-w, w] × [-h, h]` plane particles live in.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Opaque RGB colour; alpha is passed per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

/// One step of a 2D path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    LineTo(Vec2),
}

pub trait Surface {
    /// Current pixel size; may lag behind the simulation's viewport during a resize.
    fn size(&self) -> Viewport;

    /// Repaint the whole surface with a solid colour.
    fn fill_background(&mut self, color: Color, alpha: f32);

    /// Make the whole surface transparent.
    fn clear(&mut self);

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, alpha: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color, alpha: f32);

    /// Soft radial darkening: `strength` at the centre fading to nothing at `radius`.
    fn vignette(&mut self, center: Vec2, radius: f32, strength: f32);

    /// Stroke a path whose opacity fades linearly from `alpha` at its first
    /// point to 0 at its last; `glow` > 0 adds a blur of that radius.
    fn stroke_fading_path(
        &mut self,
        path: &[PathCommand],
        width: f32,
        color: Color,
        alpha: f32,
        glow: f32,
    );

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color, alpha: f32);
}
