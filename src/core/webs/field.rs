use super::{draw_sketch, sketch, Sweep, WebParams, WebStyle};
use crate::core::constants::FIELD_THREAD;
use crate::core::jitter;
use crate::core::pen::Pen;
use crate::core::profile::WebFieldProfile;
use crate::core::stage::Layer;
use glam::Vec2;
use rand::prelude::*;

/// Placement of one background web. The seed fixes its irregular shape
/// until the next re-roll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldWeb {
    pub center: Vec2,
    pub radius: f32,
    pub seed: u64,
}

/// Faint irregular webs scattered over the viewport, re-rolled on a
/// throttle rather than every frame.
pub struct WebField {
    profile: WebFieldProfile,
    viewport: Vec2,
    webs: Vec<FieldWeb>,
    last_roll: Option<f64>,
    frame: u64,
    rng: StdRng,
}

impl WebField {
    pub fn new(profile: WebFieldProfile, seed: u64) -> Self {
        Self {
            profile,
            viewport: Vec2::ZERO,
            webs: Vec::new(),
            last_roll: None,
            frame: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn webs(&self) -> &[FieldWeb] {
        &self.webs
    }

    pub fn last_roll(&self) -> Option<f64> {
        self.last_roll
    }

    /// Returns true when this call produced a new set of webs.
    pub fn update(&mut self, now: f64) -> bool {
        self.frame = self.frame.wrapping_add(1);
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return false;
        }
        let due = self
            .last_roll
            .map_or(true, |t| now - t >= self.profile.reroll_interval_ms);
        if due {
            self.reroll();
            self.last_roll = Some(now);
        }
        due
    }

    fn reroll(&mut self) {
        let (lo, hi) = self.profile.web_count;
        let count = self.rng.gen_range(lo..=hi.max(lo));
        let viewport = self.viewport;
        let radius = self.profile.radius;
        let rng = &mut self.rng;
        self.webs = (0..count)
            .map(|_| FieldWeb {
                center: Vec2::new(rng.gen(), rng.gen()) * viewport,
                radius: radius.sample(rng),
                seed: rng.gen(),
            })
            .collect();
    }

    pub fn params(&self, web: &FieldWeb, rng: &mut StdRng) -> WebParams {
        let center = web.center + Vec2::new(jitter(rng, 10.0), jitter(rng, 10.0));
        WebParams {
            center,
            radius: web.radius,
            sweep: Sweep::Full,
            spokes: rng.gen_range(6..=10),
            rings: rng.gen_range(8..=15),
            inner_frac: 0.2,
            distortion: self.profile.distortion,
            time_rate: self.profile.time_rate,
            angle_jitter: 0.1,
            length_jitter: 0.2,
            spoke_bend: 10.0,
            ring_bulge: web.radius * 0.05,
            chords: rng.gen_range(5..=14),
            chord_sag: 15.0,
        }
    }
}

impl Layer for WebField {
    fn name(&self) -> &'static str {
        "web-field"
    }

    fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.last_roll = None;
    }

    fn update(&mut self, now: f64) {
        WebField::update(self, now);
    }

    fn draw(&mut self, pen: &mut dyn Pen) {
        let style = WebStyle {
            thread: FIELD_THREAD,
            line_width: self.profile.line_width,
            glow: None,
            shine: false,
        };
        for web in &self.webs {
            let mut rng = StdRng::seed_from_u64(web.seed);
            let params = self.params(web, &mut rng);
            let shape = sketch(&params, self.frame as f32, &mut rng);
            draw_sketch(pen, &shape, &style);
        }
    }
}
