// Shared test pen: records every call instead of drawing.

use crate::core::{Pen, Rgba, SurfaceConfig};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Configure(SurfaceConfig),
    PixelRatio(f32),
    Clear(Vec2),
    Save,
    Restore,
    Alpha(f32),
    LineWidth(f32),
    Stroke(Rgba),
    Fill(Rgba),
    Glow(Rgba, f32),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo(Vec2, Vec2),
    Circle(Vec2, f32),
    StrokePath,
    FillPath,
    FillRect(Vec2, Vec2),
    StrokeGradient,
    FillRadial(Vec2, f32),
    Sprite(usize, Vec2, f32),
}

#[derive(Default)]
pub struct RecordingPen {
    pub ops: Vec<Op>,
    /// Sprite indices that report as loaded.
    pub loaded: Vec<usize>,
}

impl RecordingPen {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Pen for RecordingPen {
    fn configure(&mut self, config: &SurfaceConfig) {
        self.ops.push(Op::Configure(*config));
    }
    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.ops.push(Op::PixelRatio(ratio));
    }
    fn clear(&mut self, size: Vec2) {
        self.ops.push(Op::Clear(size));
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(Op::Alpha(alpha));
    }
    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_stroke(&mut self, color: Rgba) {
        self.ops.push(Op::Stroke(color));
    }
    fn set_fill(&mut self, color: Rgba) {
        self.ops.push(Op::Fill(color));
    }
    fn set_glow(&mut self, color: Rgba, blur: f32) {
        self.ops.push(Op::Glow(color, blur));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, p: Vec2) {
        self.ops.push(Op::MoveTo(p));
    }
    fn line_to(&mut self, p: Vec2) {
        self.ops.push(Op::LineTo(p));
    }
    fn quad_to(&mut self, ctrl: Vec2, p: Vec2) {
        self.ops.push(Op::QuadTo(ctrl, p));
    }
    fn circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(Op::Circle(center, radius));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::StrokePath);
    }
    fn fill(&mut self) {
        self.ops.push(Op::FillPath);
    }
    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ops.push(Op::FillRect(origin, size));
    }
    fn stroke_gradient(&mut self, _from: Vec2, _to: Vec2, _start: Rgba, _end: Rgba) {
        self.ops.push(Op::StrokeGradient);
    }
    fn fill_radial(&mut self, center: Vec2, radius: f32, _stops: &[(f32, Rgba)]) {
        self.ops.push(Op::FillRadial(center, radius));
    }
    fn sprite(&mut self, index: usize, center: Vec2, size: f32, _rotation: f32) -> bool {
        if self.loaded.contains(&index) {
            self.ops.push(Op::Sprite(index, center, size));
            true
        } else {
            false
        }
    }
}
