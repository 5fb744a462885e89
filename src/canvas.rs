use crate::constants::DATA_LAYER;
use crate::core::{LayerKind, Pen, Rgba, SurfaceConfig};
use crate::sprites::SpriteSheet;
use glam::Vec2;
use std::f64::consts::TAU;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("could not create the layer canvas: {0}")]
    CreateFailed(String),
    #[error("2D canvas context unavailable")]
    ContextUnavailable,
}

/// Appends a transparent full-viewport canvas for `kind` to `root`.
pub fn create_layer_canvas(
    document: &web::Document,
    root: &web::Element,
    kind: LayerKind,
) -> Result<web::HtmlCanvasElement, SurfaceError> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| SurfaceError::CreateFailed(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| SurfaceError::CreateFailed("element is not a canvas".into()))?;
    _ = canvas.set_attribute(DATA_LAYER, kind.name());
    _ = canvas.set_attribute("aria-hidden", "true");
    let style = canvas.style();
    for (name, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("pointer-events", "none"),
    ] {
        _ = style.set_property(name, value);
    }
    _ = style.set_property("z-index", &kind.z_index().to_string());
    root.append_child(&canvas)
        .map_err(|e| SurfaceError::CreateFailed(format!("{:?}", e)))?;
    Ok(canvas)
}

/// [`Pen`] over a `CanvasRenderingContext2d`.
pub struct CanvasPen {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    sprites: Option<Rc<SpriteSheet>>,
}

impl CanvasPen {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        sprites: Option<Rc<SpriteSheet>>,
    ) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::ContextUnavailable)?;
        Ok(Self {
            canvas,
            ctx,
            sprites,
        })
    }
}

impl Pen for CanvasPen {
    fn configure(&mut self, config: &SurfaceConfig) {
        self.canvas.set_width(config.backing_width);
        self.canvas.set_height(config.backing_height);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", config.css_width));
        _ = style.set_property("height", &format!("{}px", config.css_height));
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        let r = ratio as f64;
        _ = self.ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
    }

    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_stroke(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.css());
    }

    fn set_fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
    }

    fn set_glow(&mut self, color: Rgba, blur: f32) {
        if blur > 0.0 {
            self.ctx.set_shadow_color(&color.css());
            self.ctx.set_shadow_blur(blur as f64);
        } else {
            self.ctx.set_shadow_blur(0.0);
        }
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x as f64, p.y as f64);
    }

    fn quad_to(&mut self, ctrl: Vec2, p: Vec2) {
        self.ctx
            .quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, p.x as f64, p.y as f64);
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        let (x, y) = (center.x as f64, center.y as f64);
        self.ctx.move_to(x + radius as f64, y);
        _ = self.ctx.arc(x, y, radius.max(0.0) as f64, 0.0, TAU);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_gradient(&mut self, from: Vec2, to: Vec2, start: Rgba, end: Rgba) {
        let g = self
            .ctx
            .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        _ = g.add_color_stop(0.0, &start.css());
        _ = g.add_color_stop(1.0, &end.css());
        self.ctx.set_stroke_style_canvas_gradient(&g);
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[(f32, Rgba)]) {
        let (x, y) = (center.x as f64, center.y as f64);
        let Ok(g) = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)
        else {
            return;
        };
        for &(offset, color) in stops {
            _ = g.add_color_stop(offset.clamp(0.0, 1.0), &color.css());
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
    }

    fn sprite(&mut self, index: usize, center: Vec2, size: f32, rotation: f32) -> bool {
        let Some(img) = self.sprites.as_ref().and_then(|s| s.get(index)) else {
            return false;
        };
        let half = size as f64 * 0.5;
        self.ctx.save();
        _ = self.ctx.translate(center.x as f64, center.y as f64);
        _ = self.ctx.rotate(rotation as f64);
        let drawn = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                &img,
                -half,
                -half,
                size as f64,
                size as f64,
            )
            .is_ok();
        self.ctx.restore();
        drawn
    }
}
