// Host-side tests for procedural webs: geometry, the corner web and the
// re-rolled background field.
// The main crate is wasm-only, so we include the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
mod support;

use crate::core::webs::{sketch, Strand, Sweep, WebParams};
use crate::core::{CornerWeb, EffectIntensityProfile, Layer, WebField};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::{FRAC_PI_2, PI};
use support::{Op, RecordingPen};

fn full_params() -> WebParams {
    WebParams {
        center: Vec2::new(400.0, 300.0),
        radius: 120.0,
        sweep: Sweep::Full,
        spokes: 8,
        rings: 10,
        inner_frac: 0.2,
        distortion: 2.0,
        time_rate: 0.03,
        angle_jitter: 0.1,
        length_jitter: 0.2,
        spoke_bend: 10.0,
        ring_bulge: 6.0,
        chords: 7,
        chord_sag: 15.0,
    }
}

fn close(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-3
}

#[test]
fn full_web_has_closed_rings() {
    let web = sketch(&full_params(), 12.0, &mut StdRng::seed_from_u64(1));
    assert_eq!(web.spokes.len(), 8);
    assert_eq!(web.spoke_ends.len(), 8);
    assert_eq!(web.rings.len(), 10);
    assert_eq!(web.chords.len(), 7);
    for ring in &web.rings {
        assert_eq!(ring.len(), 8);
        for pair in ring.windows(2) {
            assert!(close(pair[0].end(), pair[1].start()));
        }
        assert!(close(ring[ring.len() - 1].end(), ring[0].start()));
    }
}

#[test]
fn spokes_radiate_from_the_center_within_jitter() {
    let params = full_params();
    let web = sketch(&params, 0.0, &mut StdRng::seed_from_u64(2));
    for (spoke, end) in web.spokes.iter().zip(&web.spoke_ends) {
        assert_eq!(spoke.start(), params.center);
        assert_eq!(spoke.end(), *end);
        let len = end.distance(params.center);
        assert!(len >= 120.0 * 0.8 - 1e-3 && len <= 120.0 * 1.2 + 1e-3);
    }
}

#[test]
fn ring_vertices_stay_within_the_distortion_band() {
    let params = full_params();
    let web = sketch(&params, 40.0, &mut StdRng::seed_from_u64(3));
    let inner = params.radius * params.inner_frac;
    let step = (params.radius - inner) / params.rings as f32;
    for (r, ring) in web.rings.iter().enumerate() {
        let base = inner + r as f32 * step;
        for strand in ring {
            let d = strand.start().distance(params.center);
            assert!((d - base).abs() <= params.distortion + 1e-3);
        }
    }
}

#[test]
fn same_seed_same_web_and_time_only_moves_rings() {
    let params = full_params();
    let a = sketch(&params, 5.0, &mut StdRng::seed_from_u64(9));
    let b = sketch(&params, 5.0, &mut StdRng::seed_from_u64(9));
    let later = sketch(&params, 500.0, &mut StdRng::seed_from_u64(9));

    assert_eq!(a.spokes, b.spokes);
    assert_eq!(a.rings, b.rings);
    assert_eq!(a.spokes, later.spokes);
    assert_eq!(a.chords, later.chords);
    assert_ne!(a.rings, later.rings);
}

#[test]
fn arc_web_spans_its_quarter_with_open_rings() {
    let center = Vec2::new(1000.0, 0.0);
    let params = WebParams {
        center,
        radius: 200.0,
        sweep: Sweep::Arc {
            start: FRAC_PI_2,
            sweep: FRAC_PI_2,
        },
        spokes: 12,
        rings: 8,
        inner_frac: 0.15,
        distortion: 0.0,
        time_rate: 0.0,
        angle_jitter: 0.0,
        length_jitter: 0.0,
        spoke_bend: 0.0,
        ring_bulge: 10.0,
        chords: 0,
        chord_sag: 0.0,
    };
    let web = sketch(&params, 0.0, &mut StdRng::seed_from_u64(0));
    assert!(close(web.spoke_ends[0], Vec2::new(1000.0, 200.0)));
    assert!(close(web.spoke_ends[11], Vec2::new(800.0, 0.0)));
    for ring in &web.rings {
        assert_eq!(ring.len(), 11);
    }
    // Shine sits inside the quarter, towards the page
    assert!(web.shine.center.x < center.x && web.shine.center.y > center.y);
    assert!(matches!(web.spokes[0], Strand::Curve { .. }));
}

// ---------------- Corner web ----------------

#[test]
fn corner_web_lays_dew_inside_its_quarter() {
    let mut web = CornerWeb::new(EffectIntensityProfile::desktop().corner, 4);
    web.resize(Vec2::new(1600.0, 900.0));
    assert_eq!(web.corner(), Vec2::new(1600.0, 0.0));
    assert!((web.web_size() - 270.0).abs() < 1e-3);
    assert_eq!(web.dew().len(), 8);
    for drop in web.dew() {
        assert!(drop.rest.x <= 1600.0 && drop.rest.x >= 1600.0 - 270.0 * 0.8);
        assert!(drop.rest.y >= 0.0 && drop.rest.y <= 270.0 * 0.8);
        assert!((1.0..4.0).contains(&drop.size));
    }
}

#[test]
fn corner_web_is_stable_across_identical_resizes() {
    let mut web = CornerWeb::new(EffectIntensityProfile::touch().corner, 4);
    web.resize(Vec2::new(390.0, 844.0));
    let first = web.dew().to_vec();
    web.resize(Vec2::new(390.0, 844.0));
    assert_eq!(web.dew(), first.as_slice());
    assert_eq!(first.len(), 4);
}

#[test]
fn dew_swings_with_the_frame_counter() {
    let mut web = CornerWeb::new(EffectIntensityProfile::desktop().corner, 1);
    web.resize(Vec2::new(1200.0, 800.0));
    let drop = web.dew()[0];
    let start = web.dew_position(&drop);
    for t in 0..40 {
        web.update(t as f64);
    }
    assert_eq!(web.frame(), 40);
    let moved = web.dew_position(&drop);
    assert_ne!(start, moved);
    assert!(moved.distance(drop.rest) <= 2.0 * 1.2 + 1e-3);
}

#[test]
fn corner_web_draws_threads_shine_and_dew() {
    let mut web = CornerWeb::new(EffectIntensityProfile::desktop().corner, 2);
    web.resize(Vec2::new(1200.0, 800.0));
    web.update(0.0);

    let mut pen = RecordingPen::default();
    web.draw(&mut pen);
    assert_eq!(pen.count(|op| matches!(op, Op::FillRadial(..))), 1);
    // 2 anchors + 12 spokes + 8 rings of 11 segments
    assert_eq!(pen.count(|op| matches!(op, Op::StrokePath)), 2 + 12 + 8 * 11);
    assert_eq!(pen.count(|op| matches!(op, Op::Circle(..))), 8 * 2);
}

#[test]
fn unsized_corner_web_draws_nothing() {
    let mut web = CornerWeb::new(EffectIntensityProfile::desktop().corner, 2);
    let mut pen = RecordingPen::default();
    web.draw(&mut pen);
    assert!(pen.ops.is_empty());
}

// ---------------- Web field ----------------

#[test]
fn field_rerolls_on_its_throttle() {
    let mut field = WebField::new(EffectIntensityProfile::desktop().field, 5);
    assert!(!field.update(0.0), "nothing to do before the first resize");

    field.resize(Vec2::new(1440.0, 900.0));
    assert!(field.update(0.0));
    let first = field.webs().to_vec();
    assert!((8..=15).contains(&first.len()));

    assert!(!field.update(99.0));
    assert_eq!(field.webs(), first.as_slice());
    assert!(field.update(100.0));
    assert_eq!(field.last_roll(), Some(100.0));
}

#[test]
fn resize_forces_an_immediate_reroll() {
    let mut field = WebField::new(EffectIntensityProfile::touch().field, 6);
    field.resize(Vec2::new(390.0, 844.0));
    assert!(field.update(0.0));
    assert!(!field.update(1999.0));
    field.resize(Vec2::new(844.0, 390.0));
    assert!(field.update(1000.0));
}

#[test]
fn touch_field_places_few_small_webs_in_view() {
    let mut field = WebField::new(EffectIntensityProfile::touch().field, 7);
    field.resize(Vec2::new(390.0, 844.0));
    for i in 0..20 {
        field.update(i as f64 * 2000.0);
        assert!((2..=3).contains(&field.webs().len()));
        for web in field.webs() {
            assert!((30.0..80.0).contains(&web.radius));
            assert!((0.0..=390.0).contains(&web.center.x));
            assert!((0.0..=844.0).contains(&web.center.y));
        }
    }
}

#[test]
fn field_draws_faint_unglowing_threads() {
    let mut field = WebField::new(EffectIntensityProfile::desktop().field, 8);
    field.resize(Vec2::new(1440.0, 900.0));
    field.update(0.0);

    let mut pen = RecordingPen::default();
    field.draw(&mut pen);
    assert!(pen.count(|op| matches!(op, Op::StrokePath)) > 0);
    assert_eq!(pen.count(|op| matches!(op, Op::FillRadial(..))), 0);
    assert_eq!(pen.count(|op| matches!(op, Op::Glow(..))), 0);

    // Redrawing between re-rolls repeats the same webs
    let mut again = RecordingPen::default();
    field.draw(&mut again);
    assert_eq!(pen.ops.len(), again.ops.len());
}

#[test]
fn arc_and_full_sweeps_differ_in_segment_count() {
    let mut params = full_params();
    params.angle_jitter = 0.0;
    let full = sketch(&params, 0.0, &mut StdRng::seed_from_u64(0));
    params.sweep = Sweep::Arc {
        start: 0.0,
        sweep: PI,
    };
    let arc = sketch(&params, 0.0, &mut StdRng::seed_from_u64(0));
    assert_eq!(full.rings[0].len(), params.spokes);
    assert_eq!(arc.rings[0].len(), params.spokes - 1);
}
