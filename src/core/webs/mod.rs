use crate::core::color::Rgba;
use crate::core::constants::WEB_SHINE_STOPS;
use crate::core::pen::Pen;
use crate::core::{heading, jitter};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

mod corner;
mod field;

pub use corner::{CornerWeb, Dewdrop};
pub use field::{FieldWeb, WebField};

/// Angular span a web covers around its centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sweep {
    Full,
    /// Spokes spread from `start` to `start + sweep`, both ends included.
    Arc { start: f32, sweep: f32 },
}

impl Sweep {
    fn spoke_angle(&self, i: usize, n: usize) -> f32 {
        match *self {
            Sweep::Full => i as f32 * TAU / n as f32,
            Sweep::Arc { start, sweep } => {
                if n < 2 {
                    start + sweep * 0.5
                } else {
                    start + i as f32 * sweep / (n - 1) as f32
                }
            }
        }
    }

    fn middle(&self) -> f32 {
        match *self {
            Sweep::Full => 0.0,
            Sweep::Arc { start, sweep } => start + sweep * 0.5,
        }
    }

    #[inline]
    fn is_closed(&self) -> bool {
        matches!(self, Sweep::Full)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebParams {
    pub center: Vec2,
    pub radius: f32,
    pub sweep: Sweep,
    pub spokes: usize,
    pub rings: usize,
    /// Radius of the innermost ring as a fraction of `radius`.
    pub inner_frac: f32,
    /// Peak radial wobble of ring vertices, in pixels.
    pub distortion: f32,
    pub time_rate: f32,
    pub angle_jitter: f32,
    pub length_jitter: f32,
    pub spoke_bend: f32,
    pub ring_bulge: f32,
    pub chords: usize,
    pub chord_sag: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strand {
    Line { from: Vec2, to: Vec2 },
    Curve { from: Vec2, ctrl: Vec2, to: Vec2 },
}

impl Strand {
    pub fn start(&self) -> Vec2 {
        match *self {
            Strand::Line { from, .. } | Strand::Curve { from, .. } => from,
        }
    }

    pub fn end(&self) -> Vec2 {
        match *self {
            Strand::Line { to, .. } | Strand::Curve { to, .. } => to,
        }
    }

    fn trace(&self, pen: &mut dyn Pen) {
        match *self {
            Strand::Line { from, to } => {
                pen.move_to(from);
                pen.line_to(to);
            }
            Strand::Curve { from, ctrl, to } => {
                pen.move_to(from);
                pen.quad_to(ctrl, to);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shine {
    pub center: Vec2,
    pub radius: f32,
}

/// Everything needed to draw one web this frame.
#[derive(Clone, Debug)]
pub struct WebSketch {
    pub center: Vec2,
    pub spoke_ends: SmallVec<[Vec2; 16]>,
    pub spokes: Vec<Strand>,
    pub rings: Vec<Vec<Strand>>,
    pub chords: Vec<Strand>,
    pub shine: Shine,
}

/// Builds the web geometry for `params` at animation time `time`.
///
/// Randomness only comes from `rng`, so replaying the same seed yields the
/// same web and only the time-driven ring wobble moves between frames.
pub fn sketch<R: Rng + ?Sized>(params: &WebParams, time: f32, rng: &mut R) -> WebSketch {
    let n = params.spokes.max(1);
    let c = params.center;

    let angles: SmallVec<[f32; 16]> = (0..n)
        .map(|i| params.sweep.spoke_angle(i, n) + jitter(rng, params.angle_jitter))
        .collect();

    let mut spoke_ends: SmallVec<[Vec2; 16]> = SmallVec::with_capacity(n);
    let mut spokes = Vec::with_capacity(n);
    for &a in &angles {
        let dir = heading(a);
        let len = params.radius * (1.0 + jitter(rng, params.length_jitter));
        let end = c + dir * len;
        let bend = Vec2::new(jitter(rng, params.spoke_bend), jitter(rng, params.spoke_bend));
        spokes.push(Strand::Curve {
            from: c,
            ctrl: c + dir * len * 0.5 + bend,
            to: end,
        });
        spoke_ends.push(end);
    }

    let inner = params.radius * params.inner_frac;
    let step = if params.rings > 0 {
        (params.radius - inner) / params.rings as f32
    } else {
        0.0
    };
    let phase = time * params.time_rate;
    let mut rings = Vec::with_capacity(params.rings);
    for r in 0..params.rings {
        let base = inner + r as f32 * step;
        // index wraps so a closed ring ends where it started
        let vertex = |i: usize| {
            let k = i % n;
            let wobble = (r as f32 + k as f32 + phase).sin() * params.distortion;
            let a = angles[k] + if i >= n { TAU } else { 0.0 };
            (a, base + wobble)
        };
        let segments = if params.sweep.is_closed() { n } else { n - 1 };
        let mut ring = Vec::with_capacity(segments);
        for i in 0..segments {
            let (a0, r0) = vertex(i);
            let (a1, r1) = vertex(i + 1);
            let from = c + heading(a0) * r0;
            let to = c + heading(a1) * r1;
            let mid_r = (r0 + r1) * 0.5 + params.ring_bulge;
            ring.push(Strand::Curve {
                from,
                ctrl: c + heading((a0 + a1) * 0.5) * mid_r,
                to,
            });
        }
        rings.push(ring);
    }

    let mut chords = Vec::with_capacity(params.chords);
    for _ in 0..params.chords {
        let from = spoke_ends[rng.gen_range(0..n)];
        let to = spoke_ends[rng.gen_range(0..n)];
        let sag = Vec2::new(jitter(rng, params.chord_sag), jitter(rng, params.chord_sag));
        chords.push(Strand::Curve {
            from,
            ctrl: (from + to) * 0.5 + sag,
            to,
        });
    }

    let shine = match params.sweep {
        Sweep::Full => Shine {
            center: c,
            radius: params.radius * 0.5,
        },
        Sweep::Arc { .. } => Shine {
            center: c + heading(params.sweep.middle()) * params.radius * 0.42,
            radius: params.radius * 0.5,
        },
    };

    WebSketch {
        center: c,
        spoke_ends,
        spokes,
        rings,
        chords,
        shine,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WebStyle {
    pub thread: Rgba,
    pub line_width: f32,
    pub glow: Option<(Rgba, f32)>,
    pub shine: bool,
}

pub fn draw_sketch(pen: &mut dyn Pen, web: &WebSketch, style: &WebStyle) {
    pen.save();
    pen.set_stroke(style.thread);
    pen.set_line_width(style.line_width);
    if let Some((color, blur)) = style.glow {
        pen.set_glow(color, blur);
    }
    let strands = web
        .spokes
        .iter()
        .chain(web.rings.iter().flatten())
        .chain(web.chords.iter());
    for strand in strands {
        pen.begin_path();
        strand.trace(pen);
        pen.stroke();
    }
    if style.shine {
        let r = web.shine.radius;
        pen.set_glow(Rgba::TRANSPARENT, 0.0);
        pen.fill_radial(web.shine.center, r, &WEB_SHINE_STOPS);
        pen.fill_rect(web.shine.center - Vec2::splat(r), Vec2::splat(r * 2.0));
    }
    pen.restore();
}
