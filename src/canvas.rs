//! Overlay canvases and the 2D-context implementation of [`fx_core::Surface`].

use crate::constants::overlay_canvas_style;
use crate::dom;
use fx_core::{Glow, Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba, glow: Option<Glow>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_global_alpha(color.alpha.clamp(0.0, 1.0) as f64);
        self.ctx.set_fill_style_str(&color.rgb.css());
        self.ctx.fill();
        // second pass with the shadow on for the glow
        if let Some(g) = glow {
            self.ctx.set_shadow_color(&g.color.css());
            self.ctx.set_shadow_blur(g.blur as f64);
            self.ctx.fill();
        }
        self.ctx.restore();
    }
}

/// Find the overlay canvas `id`, creating and appending it to `<body>` when
/// absent. Returns `None` if the page has no body to attach to.
pub fn overlay_canvas(
    document: &web::Document,
    id: &str,
    z_index: u32,
    opacity: Option<f32>,
) -> Option<web::HtmlCanvasElement> {
    if let Some(existing) = document.get_element_by_id(id) {
        return existing.dyn_into::<web::HtmlCanvasElement>().ok();
    }
    let body = document.body()?;
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    canvas.set_id(id);
    _ = canvas.set_attribute("style", &overlay_canvas_style(z_index, opacity));
    _ = body.append_child(&canvas);
    log::debug!("[canvas] created #{}", id);
    Some(canvas)
}

/// Overlay that only needs to track the viewport size, ready to draw on.
pub fn overlay_surface(id: &str, z_index: u32) -> Option<CanvasSurface> {
    let document = dom::window_document()?;
    let canvas = overlay_canvas(&document, id, z_index, None)?;
    dom::sync_canvas_to_viewport(&canvas);
    dom::wire_canvas_resize(&canvas, |_, _| {});
    CanvasSurface::new(canvas)
}
