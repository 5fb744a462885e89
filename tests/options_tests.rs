// Host-side tests for mount options, device profiles and shared constants.
// The main crate is wasm-only, so we include the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::options::layer_seed;
use crate::core::profile::{BadgeLayout, MOBILE_BREAKPOINT_PX};
use crate::core::{
    DeviceClass, EffectIntensityProfile, Layer, LayerKind, MountOptions, OptionsError, Rgba,
};

#[test]
fn defaults_mount_every_layer_back_to_front() {
    let opts = MountOptions::parse(None, None, None).unwrap();
    assert_eq!(opts, MountOptions::default());
    assert_eq!(opts.layers, LayerKind::ALL.to_vec());
    assert_eq!(opts.device, None);
    assert_eq!(opts.seed, None);
}

#[test]
fn layer_list_is_reordered_and_deduplicated() {
    let opts = MountOptions::parse(None, Some(" badges, Trail ,badges,web-field"), None).unwrap();
    assert_eq!(
        opts.layers,
        vec![LayerKind::WebField, LayerKind::Trail, LayerKind::Badges]
    );
}

#[test]
fn keywords_and_blanks_keep_defaults() {
    let opts = MountOptions::parse(Some("auto"), Some("all"), Some("  ")).unwrap();
    assert_eq!(opts, MountOptions::default());
}

#[test]
fn device_and_seed_overrides_are_parsed() {
    let opts = MountOptions::parse(Some("Mobile"), None, Some("1234")).unwrap();
    assert_eq!(opts.device, Some(DeviceClass::Touch));
    assert_eq!(opts.seed, Some(1234));
}

#[test]
fn bad_values_are_reported() {
    assert_eq!(
        MountOptions::parse(None, Some("trail,sparkles"), None),
        Err(OptionsError::UnknownLayer("sparkles".into()))
    );
    assert_eq!(
        MountOptions::parse(Some("tablet"), None, None),
        Err(OptionsError::UnknownDevice("tablet".into()))
    );
    assert_eq!(
        MountOptions::parse(None, None, Some("-3")),
        Err(OptionsError::InvalidSeed("-3".into()))
    );
    let msg = OptionsError::UnknownLayer("x".into()).to_string();
    assert_eq!(msg, "unknown layer `x`");
}

#[test]
fn layer_names_round_trip_and_stack_in_order() {
    for (i, kind) in LayerKind::ALL.into_iter().enumerate() {
        assert_eq!(LayerKind::parse(kind.name()), Ok(kind));
        assert_eq!(kind.z_index(), i);
    }
}

#[test]
fn built_layers_report_their_kind() {
    let profile = EffectIntensityProfile::desktop();
    for kind in LayerKind::ALL {
        let layer = kind.build(&profile, 99, 11);
        assert_eq!(layer.name(), kind.name());
    }
}

#[test]
fn each_layer_gets_a_distinct_seed() {
    let mut seeds: Vec<u64> = LayerKind::ALL.iter().map(|k| layer_seed(7, *k)).collect();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), LayerKind::ALL.len());
    assert!(seeds.iter().all(|s| *s != 7));
}

#[test]
fn device_class_uses_pointer_and_breakpoint() {
    assert_eq!(DeviceClass::classify(1440.0, false), DeviceClass::Desktop);
    assert_eq!(DeviceClass::classify(1440.0, true), DeviceClass::Touch);
    assert_eq!(DeviceClass::classify(MOBILE_BREAKPOINT_PX - 1.0, false), DeviceClass::Touch);
    assert_eq!(DeviceClass::classify(MOBILE_BREAKPOINT_PX, false), DeviceClass::Desktop);
}

#[test]
fn touch_profile_is_lighter_than_desktop() {
    let d = EffectIntensityProfile::for_device(DeviceClass::Desktop);
    let t = EffectIntensityProfile::for_device(DeviceClass::Touch);
    assert_eq!(d.device, DeviceClass::Desktop);
    assert_eq!(t.device, DeviceClass::Touch);

    assert!(t.trail.ttl_ms > d.trail.ttl_ms);
    assert!(t.trail.synthetic_interval_ms.is_some() && d.trail.synthetic_interval_ms.is_none());
    assert!(t.field.web_count.1 < d.field.web_count.0);
    assert!(t.field.reroll_interval_ms > d.field.reroll_interval_ms);
    assert!(t.streaks.soft_cap < d.streaks.soft_cap);
    assert!(!t.streaks.glitch && d.streaks.glitch);
    assert!(!t.badges.glitch && d.badges.glitch);
    assert_eq!(t.badges.layout, BadgeLayout::Grid);
    assert_eq!(d.badges.layout, BadgeLayout::Scatter);
    assert!(t.corner.spokes < d.corner.spokes);
}

#[test]
fn colours_format_as_css() {
    assert_eq!(Rgba::hex(0xFF3366).css(), "rgba(255, 51, 102, 1)");
    assert_eq!(Rgba::WHITE.with_alpha(0.5).css(), "rgba(255, 255, 255, 0.5)");
    assert_eq!(Rgba::WHITE.with_alpha(3.0).a, 1.0);
    assert_eq!(Rgba::TRANSPARENT.a, 0.0);
}
