//! `Surface` over a `CanvasRenderingContext2d`.
//!
//! Drawing happens in CSS pixels; the context transform scales to the
//! device-pixel backing store.

use glam::Vec2;
use starfield_core::{Color, PathCommand, Surface, Viewport};
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::GLOW_ALPHA;
use crate::dom;
use crate::style::StyleCache;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: Viewport,
    styles: StyleCache,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        let (w, h) = dom::css_size(&canvas);
        let mut surface = Self {
            canvas,
            ctx,
            size: Viewport::new(w as f32, h as f32),
            styles: StyleCache::new(),
        };
        surface.resize(surface.size);
        Ok(surface)
    }

    /// Resize the backing store for a new CSS viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        let dpr = dom::sync_canvas_backing_size(
            &self.canvas,
            viewport.width as f64,
            viewport.height as f64,
        );
        // Assigning width/height resets the transform.
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.size = viewport;
        log::debug!(
            "[render] canvas {}x{} css @ {:.2}x",
            viewport.width,
            viewport.height,
            dpr
        );
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn set_stroke(&mut self, color: Color, alpha: f32) {
        let style = self.styles.get(color, alpha);
        self.ctx.set_stroke_style(&JsValue::from_str(style));
    }

    fn set_fill(&mut self, color: Color, alpha: f32) {
        let style = self.styles.get(color, alpha);
        self.ctx.set_fill_style(&JsValue::from_str(style));
    }

    fn trace(&self, path: &[PathCommand]) {
        self.ctx.begin_path();
        for cmd in path {
            match *cmd {
                PathCommand::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCommand::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCommand::LineTo(p) => self.ctx.line_to(p.x as f64, p.y as f64),
            }
        }
    }
}

fn endpoints(path: &[PathCommand]) -> Option<(Vec2, Vec2)> {
    let point = |cmd: &PathCommand| match *cmd {
        PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        PathCommand::QuadTo { to, .. } => to,
    };
    Some((point(path.first()?), point(path.last()?)))
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn fill_background(&mut self, color: Color, alpha: f32) {
        self.set_fill(color, alpha);
        self.ctx
            .fill_rect(0.0, 0.0, self.size.width as f64, self.size.height as f64);
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.width as f64, self.size.height as f64);
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, alpha: f32) {
        self.set_stroke(color, alpha);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        self.set_fill(color, alpha);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color, alpha: f32) {
        self.set_stroke(color, alpha);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.stroke();
        }
    }

    fn vignette(&mut self, center: Vec2, radius: f32, strength: f32) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(1.0) as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[render] radial gradient failed: {:?}", e);
                return;
            }
        };
        let inner = self.styles.get(Color::BLACK, strength).to_owned();
        let outer = self.styles.get(Color::BLACK, 0.0).to_owned();
        _ = gradient.add_color_stop(0.0, &inner);
        _ = gradient.add_color_stop(1.0, &outer);
        self.ctx.set_fill_style(&gradient);
        self.ctx.fill_rect(x - r, y - r, 2.0 * r, 2.0 * r);
    }

    fn stroke_fading_path(
        &mut self,
        path: &[PathCommand],
        width: f32,
        color: Color,
        alpha: f32,
        glow: f32,
    ) {
        let Some((head, tail)) = endpoints(path) else {
            return;
        };
        let gradient = self.ctx.create_linear_gradient(
            head.x as f64,
            head.y as f64,
            tail.x as f64,
            tail.y as f64,
        );
        let solid = self.styles.get(color, alpha).to_owned();
        let clear = self.styles.get(color, 0.0).to_owned();
        _ = gradient.add_color_stop(0.0, &solid);
        _ = gradient.add_color_stop(1.0, &clear);

        self.ctx.save();
        self.trace(path);
        self.ctx.set_stroke_style(&gradient);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        if glow > 0.0 {
            self.ctx.set_shadow_blur(glow as f64);
            let shadow = self.styles.get(color, GLOW_ALPHA).to_owned();
            self.ctx.set_shadow_color(&shadow);
        }
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color, alpha: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_stroke(color, alpha);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }
}
