// Host-side tests for the floating badge layout.
// The main crate is wasm-only, so we include the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
mod support;

use crate::core::constants::BADGE_SPRITES;
use crate::core::{BadgeField, EffectIntensityProfile, Layer};
use glam::Vec2;
use std::f32::consts::TAU;
use support::{Op, RecordingPen};

fn desktop(seed: u64) -> BadgeField {
    BadgeField::new(
        EffectIntensityProfile::desktop().badges,
        BADGE_SPRITES.len(),
        seed,
    )
}

fn touch(seed: u64) -> BadgeField {
    BadgeField::new(
        EffectIntensityProfile::touch().badges,
        BADGE_SPRITES.len(),
        seed,
    )
}

#[test]
fn scattered_badges_avoid_the_center() {
    for seed in 0..20 {
        let mut field = desktop(seed);
        field.initialize(1920.0, 1080.0);
        let zone = field.exclusion_zone().unwrap();
        assert_eq!(zone.center, Vec2::new(960.0, 540.0));
        assert_eq!(field.badges().len(), BADGE_SPRITES.len());
        for b in field.badges() {
            assert!(!zone.contains(b.anchor), "seed {seed}: {:?}", b.anchor);
            assert!(b.anchor.x >= 0.0 && b.anchor.x <= 1920.0);
            assert!(b.anchor.y >= 0.0 && b.anchor.y <= 1080.0);
        }
    }
}

#[test]
fn scatter_falls_back_beside_the_zone_when_it_covers_everything() {
    let mut field = desktop(3);
    field.initialize(800.0, 600.0);
    let zone = field.exclusion_zone().unwrap();
    for b in field.badges() {
        assert!(!zone.contains(b.anchor));
        assert!((b.anchor.x - 400.0).abs() > 300.0);
    }
}

#[test]
fn grid_layout_uses_two_columns_in_portrait() {
    let mut field = touch(1);
    field.initialize(390.0, 844.0);
    assert!(field.exclusion_zone().is_none());

    let anchors: Vec<Vec2> = field.badges().iter().map(|b| b.anchor).collect();
    assert_eq!(anchors.len(), 6);
    assert_eq!(anchors[0], Vec2::new(97.5, 844.0 / 6.0));
    assert_eq!(anchors[1].x, 292.5);
    assert_eq!(anchors[2].x, 97.5, "third badge wraps to the next row");
}

#[test]
fn grid_layout_uses_three_columns_in_landscape() {
    let mut field = touch(1);
    field.initialize(900.0, 400.0);
    let anchors: Vec<Vec2> = field.badges().iter().map(|b| b.anchor).collect();
    assert_eq!(anchors[0], Vec2::new(150.0, 100.0));
    assert_eq!(anchors[2], Vec2::new(750.0, 100.0));
    assert_eq!(anchors[3], Vec2::new(150.0, 300.0));
}

#[test]
fn badge_count_is_limited_by_available_sprites() {
    let mut field = BadgeField::new(EffectIntensityProfile::desktop().badges, 3, 0);
    field.initialize(1600.0, 900.0);
    assert_eq!(field.badges().len(), 3);
}

#[test]
fn pulse_reverts_after_its_delay() {
    let mut field = desktop(8);
    field.initialize(1600.0, 900.0);
    field.update(1000.0);

    field.pulse(1000.0);
    assert_eq!(field.pending_revert(), Some(1150.0));
    for b in field.badges() {
        assert!((0.8..1.2).contains(&b.scale));
        assert!(b.glitch_offset.x.abs() <= 10.0 && b.glitch_offset.y.abs() <= 10.0);
    }

    field.update(1149.0);
    assert_eq!(field.pending_revert(), Some(1150.0));
    field.update(1150.0);
    assert_eq!(field.pending_revert(), None);
    for b in field.badges() {
        assert_eq!(b.scale, 1.0);
        assert_eq!(b.glitch_offset, Vec2::ZERO);
    }
}

#[test]
fn overlapping_pulse_replaces_the_pending_revert() {
    let mut field = desktop(9);
    field.initialize(1600.0, 900.0);
    field.update(0.0);

    field.pulse(0.0);
    field.pulse(100.0);
    field.update(150.0);
    assert_eq!(field.pending_revert(), Some(250.0));
    field.update(250.0);
    assert_eq!(field.pending_revert(), None);
    assert!(field.badges().iter().all(|b| b.scale == 1.0));
}

#[test]
fn badges_orbit_close_to_their_anchor() {
    let mut field = touch(2);
    field.initialize(390.0, 844.0);
    for step in 0..300 {
        field.update(step as f64 * 16.7);
        for b in field.badges() {
            assert!(b.position.distance(b.anchor) <= 10.0 + 1e-3);
            assert!((0.0..TAU).contains(&b.rotation));
        }
    }
}

#[test]
fn touch_badges_never_glitch() {
    let mut field = touch(4);
    field.initialize(390.0, 844.0);
    for step in 0..2000 {
        field.update(step as f64 * 16.0);
        assert_eq!(field.pending_revert(), None);
    }
    assert!(field.badges().iter().all(|b| b.scale == 1.0));
}

#[test]
fn resize_lays_badges_out_again() {
    let mut field = desktop(5);
    field.resize(Vec2::new(1920.0, 1080.0));
    let before: Vec<Vec2> = field.badges().iter().map(|b| b.anchor).collect();
    field.resize(Vec2::new(1280.0, 720.0));
    assert_eq!(field.exclusion_zone().unwrap().center, Vec2::new(640.0, 360.0));
    let after: Vec<Vec2> = field.badges().iter().map(|b| b.anchor).collect();
    assert_eq!(before.len(), after.len());
    assert_ne!(before, after);
}

#[test]
fn draw_skips_sprites_that_are_not_loaded() {
    let mut field = touch(6);
    field.initialize(390.0, 844.0);
    field.update(0.0);

    let mut pen = RecordingPen {
        loaded: vec![0, 2],
        ..Default::default()
    };
    field.draw(&mut pen);
    assert_eq!(pen.count(|op| matches!(op, Op::Sprite(..))), 2);
    assert_eq!(pen.count(|op| matches!(op, Op::Save)), 6);
    assert!(pen
        .ops
        .iter()
        .any(|op| matches!(op, Op::Sprite(0, _, size) if *size == 24.0)));
}
