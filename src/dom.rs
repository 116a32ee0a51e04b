use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::geometry::{backing_size, clamp_dpr};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(canvas_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow!("no document"))?;
    let el = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("missing #{}", canvas_id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{} is not a canvas", canvas_id))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected context type"))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| clamp_dpr(w.device_pixel_ratio()))
        .unwrap_or(1.0)
}

/// CSS size of the canvas as laid out by the page.
#[inline]
pub fn css_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width(), rect.height())
}

/// Match the backing store to CSS size × devicePixelRatio; returns the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css_w: f64, css_h: f64) -> f64 {
    let dpr = device_pixel_ratio();
    let (w_px, h_px) = backing_size(css_w, css_h, dpr);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    dpr
}

#[inline]
pub fn window_scroll_y() -> Option<f32> {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .map(|y| y as f32)
}
