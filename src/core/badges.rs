use crate::core::constants::*;
use crate::core::jitter;
use crate::core::pen::Pen;
use crate::core::profile::{BadgeLayout, BadgeProfile};
use crate::core::stage::Layer;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Centered box that scattered badges must not start inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExclusionZone {
    pub center: Vec2,
    pub half_extent: Vec2,
}

impl ExclusionZone {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let d = (p - self.center).abs();
        d.x < self.half_extent.x && d.y < self.half_extent.y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    pub sprite: usize,
    pub anchor: Vec2,
    pub size: f32,
    pub angular_velocity: f32,
    pub rotation: f32,
    pub orbit_phase: f32,
    pub orbit_speed: f32,
    pub scale: f32,
    pub glitch_offset: Vec2,
    /// Where the badge is drawn this frame.
    pub position: Vec2,
}

/// Tech badges drifting on small orbits, with occasional simultaneous
/// glitch pulses that snap back after a short delay.
pub struct BadgeField {
    profile: BadgeProfile,
    sprite_count: usize,
    badges: Vec<Badge>,
    zone: Option<ExclusionZone>,
    next_glitch_roll: Option<f64>,
    revert_at: Option<f64>,
    rng: StdRng,
}

impl BadgeField {
    pub fn new(profile: BadgeProfile, sprite_count: usize, seed: u64) -> Self {
        Self {
            profile,
            sprite_count,
            badges: Vec::new(),
            zone: None,
            next_glitch_roll: None,
            revert_at: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn exclusion_zone(&self) -> Option<ExclusionZone> {
        self.zone
    }

    pub fn pending_revert(&self) -> Option<f64> {
        self.revert_at
    }

    /// Fresh placement for a container of the given size.
    pub fn initialize(&mut self, width: f32, height: f32) {
        let viewport = Vec2::new(width.max(0.0), height.max(0.0));
        let count = self.profile.count.min(self.sprite_count);
        let anchors = match self.profile.layout {
            BadgeLayout::Scatter => {
                let zone = ExclusionZone {
                    center: viewport * 0.5,
                    half_extent: Vec2::splat(BADGE_EXCLUSION_HALF),
                };
                self.zone = Some(zone);
                (0..count)
                    .map(|_| scatter_anchor(&mut self.rng, viewport, zone))
                    .collect::<Vec<_>>()
            }
            BadgeLayout::Grid => {
                self.zone = None;
                grid_anchors(viewport, count)
            }
        };

        let profile = &self.profile;
        let rng = &mut self.rng;
        self.badges = anchors
            .into_iter()
            .enumerate()
            .map(|(i, anchor)| Badge {
                sprite: i,
                anchor,
                size: profile.size.sample(rng),
                angular_velocity: profile.spin.sample(rng),
                rotation: rng.gen::<f32>() * TAU,
                orbit_phase: rng.gen::<f32>() * TAU,
                orbit_speed: profile.orbit_speed.sample(rng),
                scale: 1.0,
                glitch_offset: Vec2::ZERO,
                position: anchor,
            })
            .collect();
        self.revert_at = None;
        log::debug!(
            "[badges] placed {} badges in {:.0}x{:.0}",
            self.badges.len(),
            viewport.x,
            viewport.y
        );
    }

    /// Jolts every badge at once; any pending revert is replaced.
    pub fn pulse(&mut self, now: f64) {
        for b in &mut self.badges {
            b.glitch_offset = Vec2::new(
                jitter(&mut self.rng, BADGE_GLITCH_OFFSET),
                jitter(&mut self.rng, BADGE_GLITCH_OFFSET),
            );
            b.scale = self
                .rng
                .gen_range(BADGE_GLITCH_SCALE_MIN..BADGE_GLITCH_SCALE_MAX);
        }
        self.revert_at = Some(now + BADGE_GLITCH_REVERT_MS);
        log::debug!("[badges] glitch pulse, revert at {:.0}", now + BADGE_GLITCH_REVERT_MS);
    }

    fn revert(&mut self) {
        for b in &mut self.badges {
            b.glitch_offset = Vec2::ZERO;
            b.scale = 1.0;
        }
        self.revert_at = None;
    }

    pub fn update(&mut self, now: f64) {
        if self.revert_at.is_some_and(|t| now >= t) {
            self.revert();
        }
        if self.profile.glitch {
            match self.next_glitch_roll {
                None => self.next_glitch_roll = Some(now + BADGE_GLITCH_PERIOD_MS),
                Some(t) if now >= t => {
                    self.next_glitch_roll = Some(now + BADGE_GLITCH_PERIOD_MS);
                    if self.rng.gen::<f32>() < self.profile.glitch_chance {
                        self.pulse(now);
                    }
                }
                Some(_) => {}
            }
        }

        let secs = now / 1000.0;
        let drift = self.profile.drift;
        for b in &mut self.badges {
            let phase = (secs * b.orbit_speed as f64 + b.orbit_phase as f64) as f32;
            let orbit = Vec2::new(phase.sin(), phase.cos()) * drift;
            b.position = b.anchor + orbit + b.glitch_offset;
            b.rotation = (b.rotation + b.angular_velocity).rem_euclid(TAU);
        }
    }
}

fn scatter_anchor<R: Rng + ?Sized>(rng: &mut R, viewport: Vec2, zone: ExclusionZone) -> Vec2 {
    let inset = Vec2::splat(BADGE_MARGIN);
    let room = (viewport - inset * 2.0).max(Vec2::ZERO);
    let mut candidate = inset;
    for _ in 0..BADGE_PLACEMENT_ATTEMPTS {
        candidate = inset + room * Vec2::new(rng.gen(), rng.gen());
        if !zone.contains(candidate) {
            return candidate;
        }
    }
    // The inset rectangle is mostly covered by the zone: push out sideways.
    let side = if candidate.x < zone.center.x { -1.0 } else { 1.0 };
    Vec2::new(zone.center.x + side * (zone.half_extent.x + 1.0), candidate.y)
}

fn grid_anchors(viewport: Vec2, count: usize) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let cols = (if viewport.x >= viewport.y { 3 } else { 2 }).min(count);
    let rows = count.div_ceil(cols);
    let cell = Vec2::new(viewport.x / cols as f32, viewport.y / rows as f32);
    (0..count)
        .map(|i| {
            let (r, c) = (i / cols, i % cols);
            Vec2::new((c as f32 + 0.5) * cell.x, (r as f32 + 0.5) * cell.y)
        })
        .collect()
}

impl Layer for BadgeField {
    fn name(&self) -> &'static str {
        "badges"
    }

    fn resize(&mut self, viewport: Vec2) {
        self.initialize(viewport.x, viewport.y);
    }

    fn update(&mut self, now: f64) {
        BadgeField::update(self, now);
    }

    fn draw(&mut self, pen: &mut dyn Pen) {
        for (i, b) in self.badges.iter().enumerate() {
            let glow = BADGE_GLOWS[i % BADGE_GLOWS.len()];
            pen.save();
            pen.set_glow(glow.with_alpha(0.25), BADGE_GLOW_BLUR);
            // unloaded sprites are simply skipped
            pen.sprite(b.sprite, b.position, b.size * b.scale, b.rotation);
            pen.restore();
        }
    }
}
