use crate::core::color::Rgba;
use crate::core::surface::SurfaceConfig;
use glam::Vec2;

/// Minimal 2D drawing surface the layers paint through.
///
/// Coordinates are logical (CSS) pixels; the device-pixel scale is owned by
/// the surface and applied with [`Pen::set_pixel_ratio`], never by layers.
pub trait Pen {
    /// Resize the backing store to match `config`.
    fn configure(&mut self, config: &SurfaceConfig);
    /// Replace (not multiply) the current transform with a uniform scale.
    fn set_pixel_ratio(&mut self, ratio: f32);
    fn clear(&mut self, size: Vec2);

    fn save(&mut self);
    fn restore(&mut self);
    fn set_alpha(&mut self, alpha: f32);
    fn set_line_width(&mut self, width: f32);
    fn set_stroke(&mut self, color: Rgba);
    fn set_fill(&mut self, color: Rgba);
    /// Shadow glow around subsequent strokes and fills; `blur == 0` disables it.
    fn set_glow(&mut self, color: Rgba, blur: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn quad_to(&mut self, ctrl: Vec2, p: Vec2);
    /// Adds a full circle as a closed sub-path.
    fn circle(&mut self, center: Vec2, radius: f32);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2);

    /// Stroke style becomes a linear gradient from `start` to `end`.
    fn stroke_gradient(&mut self, from: Vec2, to: Vec2, start: Rgba, end: Rgba);
    /// Fill style becomes a radial gradient with `(offset, colour)` stops.
    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[(f32, Rgba)]);

    /// Draws sprite `index` centred at `center`. Returns false when the sprite
    /// is not available (still loading, or unknown).
    fn sprite(&mut self, index: usize, center: Vec2, size: f32, rotation: f32) -> bool;
}

#[inline]
pub fn stroke_line(pen: &mut dyn Pen, from: Vec2, to: Vec2) {
    pen.begin_path();
    pen.move_to(from);
    pen.line_to(to);
    pen.stroke();
}

#[inline]
pub fn fill_circle(pen: &mut dyn Pen, center: Vec2, radius: f32, color: Rgba) {
    pen.begin_path();
    pen.circle(center, radius);
    pen.set_fill(color);
    pen.fill();
}
