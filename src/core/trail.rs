use crate::core::color::Rgba;
use crate::core::constants::*;
use crate::core::heading;
use crate::core::pen::{fill_circle, stroke_line, Pen};
use crate::core::profile::TrailProfile;
use crate::core::stage::Layer;
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub created_at: f64,
    pub color: Rgba,
}

/// Radial burst left behind by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebShot {
    pub position: Vec2,
    pub angle: f32,
    pub created_at: f64,
}

/// A fading connection between two live trail points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Pointer-driven particle web: points appear along the pointer path, link
/// to their neighbours and fade out after the profile's TTL.
pub struct TrailField {
    profile: TrailProfile,
    points: VecDeque<TrailPoint>,
    shots: Vec<WebShot>,
    pointer: Option<Vec2>,
    viewport: Vec2,
    next_synthetic: Option<f64>,
    now: f64,
    rng: StdRng,
}

impl TrailField {
    pub fn new(profile: TrailProfile, seed: u64) -> Self {
        Self {
            points: VecDeque::with_capacity(profile.max_points + 1),
            profile,
            shots: Vec::new(),
            pointer: None,
            viewport: Vec2::ZERO,
            next_synthetic: None,
            now: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn points(&self) -> &VecDeque<TrailPoint> {
        &self.points
    }

    pub fn shots(&self) -> &[WebShot] {
        &self.shots
    }

    /// Returns true when the move produced a new point.
    pub fn pointer_move(&mut self, at: Vec2, now: f64) -> bool {
        self.pointer = Some(at);
        let due = match self.points.back() {
            Some(last) => now - last.created_at > self.profile.append_interval_ms,
            None => true,
        };
        if due {
            self.push_point(at, now);
        }
        due
    }

    /// Queues a web shot and returns its angle.
    pub fn pointer_click(&mut self, at: Vec2, now: f64) -> f32 {
        let angle = self
            .pointer
            .map_or(0.0, |from| (at.y - from.y).atan2(at.x - from.x));
        self.shots.push(WebShot {
            position: at,
            angle,
            created_at: now,
        });
        angle
    }

    pub fn purge(&mut self, now: f64) {
        let ttl = self.profile.ttl_ms;
        self.points.retain(|p| now - p.created_at <= ttl);
        self.shots.retain(|s| now - s.created_at < WEB_SHOT_LIFETIME_MS);
    }

    pub fn update(&mut self, now: f64) {
        self.now = now;
        self.purge(now);
        if let Some(interval) = self.profile.synthetic_interval_ms {
            if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
                return;
            }
            let due = self.next_synthetic.map_or(true, |t| now >= t);
            if due {
                let at = Vec2::new(
                    self.rng.gen::<f32>() * self.viewport.x,
                    self.rng.gen::<f32>() * self.viewport.y,
                );
                self.push_point(at, now);
                self.next_synthetic = Some(now + interval);
            }
        }
    }

    /// Pairwise links within the connection distance, strongest when both
    /// points are close and young.
    pub fn edges(&self, now: f64) -> Vec<Edge> {
        let reach = self.profile.connect_distance;
        let mut out = Vec::new();
        for (i, a) in self.points.iter().enumerate() {
            for (j, b) in self.points.iter().enumerate().skip(i + 1) {
                let d = a.position.distance(b.position);
                if d >= reach {
                    continue;
                }
                let opacity = (1.0 - d / reach).max(0.0)
                    * self.freshness(a, now)
                    * self.freshness(b, now)
                    * TRAIL_MAX_ALPHA;
                if opacity > 0.0 {
                    out.push(Edge { a: i, b: j, opacity });
                }
            }
        }
        out
    }

    #[inline]
    fn freshness(&self, p: &TrailPoint, now: f64) -> f32 {
        let age = (now - p.created_at).max(0.0);
        (1.0 - age / self.profile.ttl_ms).max(0.0) as f32
    }

    fn push_point(&mut self, at: Vec2, now: f64) {
        let color = TRAIL_COLORS[self.rng.gen_range(0..TRAIL_COLORS.len())];
        self.points.push_back(TrailPoint {
            position: at,
            created_at: now,
            color,
        });
        while self.points.len() > self.profile.max_points {
            self.points.pop_front();
        }
    }

    fn draw_points(&self, pen: &mut dyn Pen) {
        pen.set_line_width(TRAIL_EDGE_WIDTH);
        for edge in self.edges(self.now) {
            let a = &self.points[edge.a];
            let b = &self.points[edge.b];
            pen.set_alpha(edge.opacity);
            pen.set_glow(a.color.with_alpha(0.25), 5.0);
            pen.stroke_gradient(
                a.position,
                b.position,
                a.color.with_alpha(0.5),
                b.color.with_alpha(0.5),
            );
            stroke_line(pen, a.position, b.position);
        }
        for p in &self.points {
            pen.set_alpha(self.freshness(p, self.now) * TRAIL_MAX_ALPHA);
            pen.set_glow(p.color.with_alpha(0.25), 8.0);
            fill_circle(pen, p.position, TRAIL_DOT_RADIUS, p.color.with_alpha(0.5));
            fill_circle(pen, p.position, TRAIL_DOT_RADIUS * 0.5, Rgba::WHITE.with_alpha(0.5));
        }
        pen.set_glow(Rgba::TRANSPARENT, 0.0);
        pen.set_alpha(1.0);
    }

    fn draw_shot(&self, pen: &mut dyn Pen, shot: &WebShot) {
        let life = ((self.now - shot.created_at).max(0.0) / WEB_SHOT_LIFETIME_MS) as f32;
        let grow = (life / WEB_SHOT_GROW_FRACTION).min(1.0);
        let fade = if life < WEB_SHOT_FADE_START {
            1.0
        } else {
            (1.0 - (life - WEB_SHOT_FADE_START) / (1.0 - WEB_SHOT_FADE_START)).max(0.0)
        };
        if grow <= 0.0 || fade <= 0.0 {
            return;
        }
        let step = TAU / WEB_SHOT_SPOKES as f32;
        let dirs: Vec<Vec2> = (0..WEB_SHOT_SPOKES)
            .map(|i| heading(shot.angle + i as f32 * step))
            .collect();

        pen.save();
        pen.set_alpha(fade * 0.8);
        pen.set_line_width(1.0);
        pen.set_glow(NEON_CYAN.with_alpha(0.5), 6.0);

        pen.set_stroke(Rgba::WHITE.with_alpha(0.9));
        for dir in &dirs {
            stroke_line(pen, shot.position, shot.position + *dir * WEB_SHOT_RADIUS * grow);
        }

        // sagging connectors between neighbouring spokes
        pen.set_stroke(NEON_CYAN.with_alpha(0.7));
        for i in 0..WEB_SHOT_SPOKES {
            let d0 = dirs[i];
            let d1 = dirs[(i + 1) % WEB_SHOT_SPOKES];
            let mid = heading(shot.angle + (i as f32 + 0.5) * step);
            for k in 1..=WEB_SHOT_CONNECTORS {
                let r = k as f32 * WEB_SHOT_CONNECTOR_STEP * grow;
                pen.begin_path();
                pen.move_to(shot.position + d0 * r);
                pen.quad_to(shot.position + mid * r * 0.85, shot.position + d1 * r);
                pen.stroke();
            }
        }

        pen.set_stroke(NEON_PINK.with_alpha(0.6));
        pen.begin_path();
        let seg = TAU / WEB_SHOT_RING_SEGMENTS as f32;
        for i in 0..=WEB_SHOT_RING_SEGMENTS {
            let p = shot.position + heading(shot.angle + i as f32 * seg) * WEB_SHOT_RADIUS * grow;
            if i == 0 {
                pen.move_to(p);
            } else {
                pen.line_to(p);
            }
        }
        pen.stroke();

        fill_circle(pen, shot.position, 3.0 * grow.max(0.5), NEON_PINK);
        pen.restore();
    }
}

impl Layer for TrailField {
    fn name(&self) -> &'static str {
        "trail"
    }

    fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    fn update(&mut self, now: f64) {
        TrailField::update(self, now);
    }

    fn draw(&mut self, pen: &mut dyn Pen) {
        self.draw_points(pen);
        for shot in &self.shots {
            self.draw_shot(pen, shot);
        }
    }

    fn pointer_move(&mut self, at: Vec2, now: f64) {
        TrailField::pointer_move(self, at, now);
    }

    fn pointer_click(&mut self, at: Vec2, now: f64) {
        let angle = TrailField::pointer_click(self, at, now);
        log::debug!("[trail] web shot at ({:.0},{:.0}) angle {:.2}", at.x, at.y, angle);
    }
}
