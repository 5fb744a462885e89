use crate::core::badges::BadgeField;
use crate::core::profile::{DeviceClass, EffectIntensityProfile};
use crate::core::stage::Layer;
use crate::core::streaks::Streamer;
use crate::core::trail::TrailField;
use crate::core::webs::{CornerWeb, WebField};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown layer `{0}`")]
    UnknownLayer(String),
    #[error("unknown device class `{0}` (expected desktop or touch)")]
    UnknownDevice(String),
    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
}

/// The five effect layers, listed back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    WebField,
    Streaks,
    Corner,
    Trail,
    Badges,
}

impl LayerKind {
    pub const ALL: [LayerKind; 5] = [
        LayerKind::WebField,
        LayerKind::Streaks,
        LayerKind::Corner,
        LayerKind::Trail,
        LayerKind::Badges,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::WebField => "web-field",
            LayerKind::Streaks => "streaks",
            LayerKind::Corner => "corner",
            LayerKind::Trail => "trail",
            LayerKind::Badges => "badges",
        }
    }

    pub fn parse(s: &str) -> Result<Self, OptionsError> {
        let key = s.trim().to_ascii_lowercase();
        LayerKind::ALL
            .into_iter()
            .find(|k| k.name() == key)
            .ok_or_else(|| OptionsError::UnknownLayer(s.trim().to_string()))
    }

    /// z-index of the layer canvas inside the mount root.
    pub fn z_index(self) -> usize {
        LayerKind::ALL
            .iter()
            .position(|k| *k == self)
            .unwrap_or_default()
    }

    pub fn build(
        self,
        profile: &EffectIntensityProfile,
        seed: u64,
        sprite_count: usize,
    ) -> Box<dyn Layer> {
        let seed = layer_seed(seed, self);
        match self {
            LayerKind::WebField => Box::new(WebField::new(profile.field.clone(), seed)),
            LayerKind::Streaks => Box::new(Streamer::new(profile.streaks.clone(), seed)),
            LayerKind::Corner => Box::new(CornerWeb::new(profile.corner.clone(), seed)),
            LayerKind::Trail => Box::new(TrailField::new(profile.trail.clone(), seed)),
            LayerKind::Badges => {
                Box::new(BadgeField::new(profile.badges.clone(), sprite_count, seed))
            }
        }
    }
}

/// Gives each layer its own stream from one base seed.
pub fn layer_seed(base: u64, kind: LayerKind) -> u64 {
    base ^ (kind.z_index() as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// What to mount: device class override, layer selection and base seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountOptions {
    /// `None` means detect from the viewport and pointer type.
    pub device: Option<DeviceClass>,
    pub layers: Vec<LayerKind>,
    /// `None` means draw a seed from the browser entropy source.
    pub seed: Option<u64>,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            device: None,
            layers: LayerKind::ALL.to_vec(),
            seed: None,
        }
    }
}

impl MountOptions {
    /// Parses the raw attribute values. Missing or blank values keep defaults;
    /// the layer list is reordered back to front and deduplicated.
    pub fn parse(
        device: Option<&str>,
        layers: Option<&str>,
        seed: Option<&str>,
    ) -> Result<Self, OptionsError> {
        let mut out = Self::default();

        if let Some(raw) = device.map(str::trim).filter(|s| !s.is_empty()) {
            if !raw.eq_ignore_ascii_case("auto") {
                out.device = Some(
                    DeviceClass::parse(raw)
                        .ok_or_else(|| OptionsError::UnknownDevice(raw.to_string()))?,
                );
            }
        }

        if let Some(raw) = layers.map(str::trim).filter(|s| !s.is_empty()) {
            if !raw.eq_ignore_ascii_case("all") {
                let picked = raw
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(LayerKind::parse)
                    .collect::<Result<Vec<_>, _>>()?;
                out.layers = LayerKind::ALL
                    .into_iter()
                    .filter(|k| picked.contains(k))
                    .collect();
            }
        }

        if let Some(raw) = seed.map(str::trim).filter(|s| !s.is_empty()) {
            out.seed = Some(
                raw.parse::<u64>()
                    .map_err(|_| OptionsError::InvalidSeed(raw.to_string()))?,
            );
        }

        Ok(out)
    }
}
