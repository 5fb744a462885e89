use rand::Rng;

/// Viewport width below which a fine pointer is still treated as touch-class.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Desktop,
    Touch,
}

impl DeviceClass {
    pub fn classify(viewport_width: f32, coarse_pointer: bool) -> Self {
        if coarse_pointer || viewport_width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Touch
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(DeviceClass::Desktop),
            "touch" | "mobile" => Some(DeviceClass::Touch),
            _ => None,
        }
    }
}

/// Closed-open sampling range; `min == max` always yields `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(v: f32) -> Self {
        Self { min: v, max: v }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailProfile {
    pub ttl_ms: f64,
    pub append_interval_ms: f64,
    pub max_points: usize,
    pub connect_distance: f32,
    /// Emit a random point at this period when no real pointer drives the field.
    pub synthetic_interval_ms: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CornerWebProfile {
    pub size_frac: f32,
    pub spokes: usize,
    pub rings: usize,
    pub inner_frac: f32,
    pub distortion: f32,
    pub time_rate: f32,
    pub ring_bulge: f32,
    pub line_width: f32,
    pub glow_blur: f32,
    pub dew_count: usize,
    pub dew_scale: f32,
    pub dew_swing: f32,
    pub dew_rate: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebFieldProfile {
    pub reroll_interval_ms: f64,
    pub web_count: (u32, u32),
    pub radius: Span,
    pub distortion: f32,
    pub time_rate: f32,
    pub line_width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StreakProfile {
    pub spawn_chance: f32,
    pub soft_cap: usize,
    pub initial_lines: usize,
    pub length: Span,
    pub thickness: Span,
    pub speed: Span,
    pub opacity: f32,
    pub decay: f32,
    pub glitch: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeLayout {
    /// Rejection-sampled scatter around a central exclusion square.
    Scatter,
    /// Deterministic cell centres on a small grid.
    Grid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BadgeProfile {
    pub count: usize,
    pub layout: BadgeLayout,
    pub size: Span,
    pub orbit_speed: Span,
    pub drift: f32,
    /// Radians added to the rotation every tick.
    pub spin: Span,
    pub glitch: bool,
    pub glitch_chance: f32,
}

/// Every per-device knob, chosen once at mount time.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectIntensityProfile {
    pub device: DeviceClass,
    pub trail: TrailProfile,
    pub corner: CornerWebProfile,
    pub field: WebFieldProfile,
    pub streaks: StreakProfile,
    pub badges: BadgeProfile,
}

impl EffectIntensityProfile {
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Desktop => Self::desktop(),
            DeviceClass::Touch => Self::touch(),
        }
    }

    pub fn desktop() -> Self {
        Self {
            device: DeviceClass::Desktop,
            trail: TrailProfile {
                ttl_ms: 2000.0,
                append_interval_ms: super::constants::TRAIL_APPEND_INTERVAL_MS,
                max_points: super::constants::TRAIL_MAX_POINTS,
                connect_distance: super::constants::TRAIL_CONNECT_DISTANCE,
                synthetic_interval_ms: None,
            },
            corner: CornerWebProfile {
                size_frac: 0.3,
                spokes: 12,
                rings: 8,
                inner_frac: 0.15,
                distortion: 5.0,
                time_rate: 0.05,
                ring_bulge: 10.0,
                line_width: 0.5,
                glow_blur: 3.0,
                dew_count: 8,
                dew_scale: 1.0,
                dew_swing: 2.0,
                dew_rate: 0.02,
            },
            field: WebFieldProfile {
                reroll_interval_ms: 100.0,
                web_count: (8, 15),
                radius: Span::new(100.0, 250.0),
                distortion: 2.0,
                time_rate: 0.03,
                line_width: 0.3,
            },
            streaks: StreakProfile {
                spawn_chance: 0.2,
                soft_cap: 50,
                initial_lines: 10,
                length: Span::new(100.0, 250.0),
                thickness: Span::new(1.0, 3.0),
                speed: Span::new(10.0, 25.0),
                opacity: 1.0,
                decay: super::constants::STREAK_OPACITY_DECAY,
                glitch: true,
            },
            badges: BadgeProfile {
                count: super::constants::BADGE_SPRITES.len(),
                layout: BadgeLayout::Scatter,
                size: Span::new(30.0, 50.0),
                orbit_speed: Span::new(0.2, 0.6),
                drift: 12.0,
                spin: Span::new(-0.75_f32.to_radians(), 0.75_f32.to_radians()),
                glitch: true,
                glitch_chance: super::constants::BADGE_GLITCH_CHANCE,
            },
        }
    }

    pub fn touch() -> Self {
        Self {
            device: DeviceClass::Touch,
            trail: TrailProfile {
                ttl_ms: 3000.0,
                append_interval_ms: super::constants::TRAIL_APPEND_INTERVAL_MS,
                max_points: 24,
                connect_distance: super::constants::TRAIL_CONNECT_DISTANCE,
                synthetic_interval_ms: Some(400.0),
            },
            corner: CornerWebProfile {
                size_frac: 0.3,
                spokes: 6,
                rings: 4,
                inner_frac: 0.2,
                distortion: 3.0,
                time_rate: 0.02,
                ring_bulge: 5.0,
                line_width: 0.8,
                glow_blur: 2.0,
                dew_count: 4,
                dew_scale: 1.5,
                dew_swing: 3.0,
                dew_rate: 0.03,
            },
            field: WebFieldProfile {
                reroll_interval_ms: 2000.0,
                web_count: (2, 3),
                radius: Span::new(30.0, 80.0),
                distortion: 1.0,
                time_rate: 0.02,
                line_width: 0.3,
            },
            streaks: StreakProfile {
                spawn_chance: 0.05,
                soft_cap: 8,
                initial_lines: 0,
                length: Span::new(20.0, 50.0),
                thickness: Span::fixed(1.0),
                speed: Span::new(1.0, 3.0),
                opacity: 0.35,
                decay: 0.001,
                glitch: false,
            },
            badges: BadgeProfile {
                count: 6,
                layout: BadgeLayout::Grid,
                size: Span::fixed(24.0),
                orbit_speed: Span::fixed(0.3),
                drift: 10.0,
                spin: Span::fixed(0.2_f32.to_radians()),
                glitch: false,
                glitch_chance: 0.0,
            },
        }
    }
}
