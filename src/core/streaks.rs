use crate::core::color::Rgba;
use crate::core::constants::*;
use crate::core::pen::Pen;
use crate::core::profile::StreakProfile;
use crate::core::stage::Layer;
use glam::Vec2;
use rand::prelude::*;

/// Per-line distortion state. `ticks` counts down the frames left in an
/// active glitch; once it runs out, offset and shift ease back to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Glitch {
    pub ticks: u32,
    pub active: bool,
    pub offset: f32,
    pub rgb_shift: f32,
}

impl Glitch {
    fn step<R: Rng + ?Sized>(&mut self, trigger: bool, rng: &mut R) {
        if trigger {
            self.ticks = STREAK_GLITCH_TICKS;
            self.offset = rng.gen_range(-STREAK_GLITCH_OFFSET..STREAK_GLITCH_OFFSET);
            self.rgb_shift = rng.gen_range(STREAK_RGB_SHIFT_MIN..STREAK_RGB_SHIFT_MAX);
        }
        if self.ticks > 0 {
            self.ticks -= 1;
            self.active = true;
        } else {
            self.active = false;
            self.offset *= STREAK_GLITCH_DAMPING;
            self.rgb_shift *= STREAK_GLITCH_DAMPING;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedLine {
    pub position: Vec2,
    pub length: f32,
    pub thickness: f32,
    /// Pixels per tick; the sign is the direction of travel.
    pub velocity: f32,
    pub color: Rgba,
    pub glitch: Glitch,
    initial_opacity: f32,
    decay: f32,
    age: u32,
}

impl SpeedLine {
    pub fn new(position: Vec2, length: f32, thickness: f32, velocity: f32, color: Rgba) -> Self {
        Self {
            position,
            length,
            thickness,
            velocity,
            color,
            glitch: Glitch::default(),
            initial_opacity: 1.0,
            decay: STREAK_OPACITY_DECAY,
            age: 0,
        }
    }

    pub fn with_fade(mut self, initial_opacity: f32, decay: f32) -> Self {
        self.initial_opacity = initial_opacity;
        self.decay = decay;
        self
    }

    /// Derived from the tick count so rounding never accumulates.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.initial_opacity - self.decay * self.age as f32
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn moving_right(&self) -> bool {
        self.velocity >= 0.0
    }

    pub fn advance(&mut self) {
        self.position.x += self.velocity;
        self.age += 1;
    }

    /// Faded out, or fully past the viewport edge it is heading for.
    pub fn is_spent(&self, viewport_width: f32) -> bool {
        if self.opacity() <= 0.0 {
            return true;
        }
        if self.moving_right() {
            self.position.x > viewport_width
        } else {
            self.position.x + self.length < 0.0
        }
    }
}

/// Horizontal speed lines with per-line and screen-wide glitches.
pub struct Streamer {
    profile: StreakProfile,
    lines: Vec<SpeedLine>,
    viewport: Vec2,
    glitch_until: Option<f64>,
    seeded: bool,
    rng: StdRng,
}

impl Streamer {
    pub fn new(profile: StreakProfile, seed: u64) -> Self {
        Self {
            profile,
            lines: Vec::new(),
            viewport: Vec2::ZERO,
            glitch_until: None,
            seeded: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn lines(&self) -> &[SpeedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn insert(&mut self, line: SpeedLine) {
        self.lines.push(line);
    }

    pub fn global_glitch_active(&self) -> bool {
        self.glitch_until.is_some()
    }

    /// Forces every line into a glitch until `now + duration_ms`.
    pub fn trigger_global_glitch(&mut self, now: f64, duration_ms: f64) {
        self.glitch_until = Some(now + duration_ms);
        log::debug!("[streaks] global glitch for {:.0}ms", duration_ms);
    }

    pub fn update(&mut self, now: f64) {
        if self.profile.glitch {
            if self.glitch_until.is_some_and(|t| now >= t) {
                self.glitch_until = None;
            }
            if self.rng.gen::<f32>() < GLOBAL_GLITCH_CHANCE {
                let duration = self.rng.gen_range(GLOBAL_GLITCH_MIN_MS..GLOBAL_GLITCH_MAX_MS);
                self.trigger_global_glitch(now, duration);
            }
        }
        let forced = self.glitch_until.is_some();
        let glitchy = self.profile.glitch;
        let width = self.viewport.x;

        let Self { lines, rng, .. } = self;
        for line in lines.iter_mut() {
            line.advance();
            if glitchy {
                let trigger = forced || rng.gen::<f32>() < STREAK_GLITCH_CHANCE;
                line.glitch.step(trigger, rng);
            }
        }
        lines.retain(|l| !l.is_spent(width));

        if self.lines.len() < self.profile.soft_cap
            && self.rng.gen::<f32>() < self.profile.spawn_chance
        {
            if let Some(line) = self.spawn() {
                self.lines.push(line);
            }
        }
    }

    fn spawn(&mut self) -> Option<SpeedLine> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }
        let rng = &mut self.rng;
        let rightward = rng.gen_bool(0.5);
        let length = self.profile.length.sample(rng);
        let thickness = self.profile.thickness.sample(rng);
        let speed = self.profile.speed.sample(rng);
        let x = if rightward { -length } else { self.viewport.x };
        let y = rng.gen::<f32>() * self.viewport.y;
        let color = STREAK_COLORS[rng.gen_range(0..STREAK_COLORS.len())];
        let velocity = if rightward { speed } else { -speed };
        Some(
            SpeedLine::new(Vec2::new(x, y), length, thickness, velocity, color)
                .with_fade(self.profile.opacity, self.profile.decay),
        )
    }
}

fn draw_pass<R: Rng + ?Sized>(
    pen: &mut dyn Pen,
    line: &SpeedLine,
    shift: f32,
    color: Rgba,
    alpha: f32,
    rng: &mut R,
) {
    let active = line.glitch.active;
    let mut origin = Vec2::new(line.position.x + line.glitch.offset + shift, line.position.y);
    if active {
        origin.x += rng.gen_range(-5.0..5.0);
        origin.y += rng.gen_range(-2.5..2.5);
    }
    let width = if active {
        line.length * rng.gen_range(0.8..1.2)
    } else {
        line.length
    };

    pen.save();
    pen.set_alpha(alpha.max(0.0));
    pen.set_fill(color);
    pen.set_glow(color, if active { 8.0 } else { 5.0 });
    pen.fill_rect(origin, Vec2::new(width, line.thickness));

    if active && rng.gen::<f32>() < STREAK_TEAR_CHANCE {
        let tear = line.length * rng.gen::<f32>() * 0.3;
        let at = Vec2::new(
            origin.x + rng.gen::<f32>() * (line.length - tear),
            origin.y + rng.gen_range(-5.0..5.0),
        );
        pen.fill_rect(at, Vec2::new(tear, line.thickness * rng.gen_range(0.5..1.5)));
    }
    pen.restore();
}

impl Layer for Streamer {
    fn name(&self) -> &'static str {
        "streaks"
    }

    fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        if !self.seeded {
            self.seeded = true;
            for _ in 0..self.profile.initial_lines {
                if let Some(line) = self.spawn() {
                    self.lines.push(line);
                }
            }
        }
    }

    fn update(&mut self, now: f64) {
        Streamer::update(self, now);
    }

    fn draw(&mut self, pen: &mut dyn Pen) {
        let Self { lines, rng, .. } = self;
        for line in lines.iter() {
            let opacity = line.opacity();
            draw_pass(pen, line, 0.0, line.color, opacity, rng);
            let shift = line.glitch.rgb_shift;
            if shift > STREAK_SHIFT_VISIBLE {
                draw_pass(pen, line, shift, SIGNAL_RED, opacity * 0.5, rng);
                draw_pass(pen, line, -shift, NEON_CYAN, opacity * 0.5, rng);
            }
        }
    }
}
