use crate::core::pen::Pen;
use glam::Vec2;

/// Logical and backing-store geometry of one layer canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f32,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceConfig {
    pub fn new(css_width: f32, css_height: f32, pixel_ratio: f32) -> Self {
        let ratio = sanitize_ratio(pixel_ratio);
        let css_width = sanitize_len(css_width);
        let css_height = sanitize_len(css_height);
        Self {
            css_width,
            css_height,
            pixel_ratio: ratio,
            backing_width: backing_len(css_width, ratio),
            backing_height: backing_len(css_height, ratio),
        }
    }

    #[inline]
    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.css_width, self.css_height)
    }
}

#[inline]
fn sanitize_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

#[inline]
fn sanitize_len(len: f32) -> f32 {
    if len.is_finite() && len > 0.0 {
        len
    } else {
        0.0
    }
}

#[inline]
fn backing_len(css: f32, ratio: f32) -> u32 {
    ((css * ratio).round() as u32).max(1)
}

/// A pen plus the configuration last applied to it.
pub struct Surface<P: Pen> {
    pen: P,
    config: Option<SurfaceConfig>,
}

impl<P: Pen> Surface<P> {
    pub fn new(pen: P) -> Self {
        Self { pen, config: None }
    }

    pub fn config(&self) -> Option<&SurfaceConfig> {
        self.config.as_ref()
    }

    /// Applies the latest window geometry. Returns false (and touches nothing)
    /// when the resulting configuration equals the current one.
    pub fn resize(&mut self, css_width: f32, css_height: f32, pixel_ratio: f32) -> bool {
        let next = SurfaceConfig::new(css_width, css_height, pixel_ratio);
        if self.config == Some(next) {
            return false;
        }
        self.pen.configure(&next);
        self.pen.set_pixel_ratio(next.pixel_ratio);
        self.config = Some(next);
        true
    }

    /// Resets the absolute device-pixel transform and wipes the last frame.
    pub fn begin_frame(&mut self) {
        if let Some(cfg) = self.config {
            self.pen.set_pixel_ratio(cfg.pixel_ratio);
            self.pen.clear(cfg.logical_size());
        }
    }

    pub fn pen(&self) -> &P {
        &self.pen
    }

    pub fn pen_mut(&mut self) -> &mut P {
        &mut self.pen
    }
}
