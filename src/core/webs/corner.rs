use super::{draw_sketch, sketch, Sweep, WebParams, WebStyle};
use crate::core::color::Rgba;
use crate::core::constants::{CORNER_THREAD, DEW_COLORS, NEON_PINK};
use crate::core::pen::{fill_circle, stroke_line, Pen};
use crate::core::profile::CornerWebProfile;
use crate::core::stage::Layer;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Glowing bead resting on the corner web.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dewdrop {
    pub rest: Vec2,
    pub size: f32,
    pub color: Rgba,
    pub phase: f32,
}

/// Quarter-circle web hanging from the top-right corner of the viewport.
pub struct CornerWeb {
    profile: CornerWebProfile,
    viewport: Vec2,
    frame: u64,
    seed: u64,
    dew: Vec<Dewdrop>,
    rng: StdRng,
}

impl CornerWeb {
    pub fn new(profile: CornerWebProfile, seed: u64) -> Self {
        Self {
            profile,
            viewport: Vec2::ZERO,
            frame: 0,
            seed,
            dew: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn corner(&self) -> Vec2 {
        Vec2::new(self.viewport.x, 0.0)
    }

    pub fn web_size(&self) -> f32 {
        self.viewport.x.min(self.viewport.y).max(0.0) * self.profile.size_frac
    }

    pub fn dew(&self) -> &[Dewdrop] {
        &self.dew
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn params(&self) -> WebParams {
        let p = &self.profile;
        WebParams {
            center: self.corner(),
            radius: self.web_size(),
            sweep: Sweep::Arc {
                start: FRAC_PI_2,
                sweep: FRAC_PI_2,
            },
            spokes: p.spokes,
            rings: p.rings,
            inner_frac: p.inner_frac,
            distortion: p.distortion,
            time_rate: p.time_rate,
            angle_jitter: 0.0,
            length_jitter: 0.0,
            spoke_bend: 0.0,
            ring_bulge: p.ring_bulge,
            chords: 0,
            chord_sag: 0.0,
        }
    }

    /// Where `drop` sits on the current frame.
    pub fn dew_position(&self, drop: &Dewdrop) -> Vec2 {
        let swing = (self.frame as f32 * self.profile.dew_rate + drop.phase).sin()
            * self.profile.dew_swing;
        drop.rest + Vec2::new(swing, swing * 0.5)
    }

    fn lay_dew(&mut self) {
        let size = self.web_size();
        let corner = self.corner();
        let rng = &mut self.rng;
        self.dew = (0..self.profile.dew_count)
            .map(|_| Dewdrop {
                rest: corner + Vec2::new(-rng.gen::<f32>(), rng.gen::<f32>()) * size * 0.8,
                size: rng.gen_range(1.0..4.0),
                color: DEW_COLORS[rng.gen_range(0..DEW_COLORS.len())],
                phase: rng.gen::<f32>() * TAU,
            })
            .collect();
    }
}

impl Layer for CornerWeb {
    fn name(&self) -> &'static str {
        "corner"
    }

    fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.rng = StdRng::seed_from_u64(self.seed);
        self.lay_dew();
    }

    fn update(&mut self, _now: f64) {
        self.frame = self.frame.wrapping_add(1);
    }

    fn draw(&mut self, pen: &mut dyn Pen) {
        let size = self.web_size();
        if size <= 0.0 {
            return;
        }
        let corner = self.corner();
        let p = &self.profile;
        let glow = (NEON_PINK, p.glow_blur);

        pen.save();
        pen.set_stroke(CORNER_THREAD);
        pen.set_line_width(p.line_width);
        pen.set_glow(glow.0, glow.1);
        stroke_line(pen, corner, corner + Vec2::new(-0.9, 0.1) * size);
        stroke_line(pen, corner, corner + Vec2::new(-0.1, 0.9) * size);
        pen.restore();

        // corner params carry no jitter; the fixed seed keeps the sketch stable anyway
        let mut rng = StdRng::seed_from_u64(self.seed);
        let web = sketch(&self.params(), self.frame as f32, &mut rng);
        draw_sketch(
            pen,
            &web,
            &WebStyle {
                thread: CORNER_THREAD,
                line_width: p.line_width,
                glow: Some(glow),
                shine: true,
            },
        );

        let highlight = if p.dew_scale > 1.0 { 0.6 } else { 0.4 };
        let blur = if p.dew_scale > 1.0 { 8.0 } else { 5.0 };
        for drop in &self.dew {
            let at = self.dew_position(drop);
            pen.save();
            pen.set_glow(drop.color, blur);
            fill_circle(pen, at, drop.size * p.dew_scale, drop.color);
            fill_circle(
                pen,
                at - Vec2::splat(drop.size * 0.3),
                drop.size * highlight,
                Rgba::WHITE.with_alpha(0.9),
            );
            pen.restore();
        }
    }
}
