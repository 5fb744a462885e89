use crate::core::color::Rgba;

// Shared tuning constants for the effect layers. Values that differ between
// desktop and touch devices live in `profile.rs` instead.

// Palette
pub const NEON_PINK: Rgba = Rgba::hex(0xFF3366);
pub const NEON_CYAN: Rgba = Rgba::hex(0x00FFFF);
pub const ELECTRIC_BLUE: Rgba = Rgba::hex(0x00E5FF);
pub const VIBRANT_RED: Rgba = Rgba::hex(0xFF1744);
pub const NEON_YELLOW: Rgba = Rgba::hex(0xFFEB3B);
pub const SOFT_CYAN: Rgba = Rgba::hex(0x80FFFF);
pub const PALE_CYAN: Rgba = Rgba::hex(0x66FFFF);
pub const SIGNAL_RED: Rgba = Rgba::hex(0xFF0000);
pub const ORANGE: Rgba = Rgba::hex(0xFF9100);

pub const TRAIL_COLORS: [Rgba; 5] = [NEON_PINK, NEON_CYAN, ELECTRIC_BLUE, VIBRANT_RED, NEON_YELLOW];
pub const STREAK_COLORS: [Rgba; 4] = [NEON_PINK, PALE_CYAN, SIGNAL_RED, Rgba::WHITE];
pub const DEW_COLORS: [Rgba; 6] = [NEON_PINK, SOFT_CYAN, VIBRANT_RED, NEON_YELLOW, ELECTRIC_BLUE, ORANGE];
// badge drop-shadow colours, cycled by index
pub const BADGE_GLOWS: [Rgba; 5] = [
    Rgba::hex(0xFF0044),
    Rgba::hex(0x00CCFF),
    SIGNAL_RED,
    Rgba::hex(0xFFC107),
    Rgba::hex(0x00B8D4),
];

// Particle field
pub const TRAIL_APPEND_INTERVAL_MS: f64 = 100.0;
pub const TRAIL_MAX_POINTS: usize = 50;
pub const TRAIL_CONNECT_DISTANCE: f32 = 150.0;
pub const TRAIL_MAX_ALPHA: f32 = 0.7;
pub const TRAIL_EDGE_WIDTH: f32 = 1.5;
pub const TRAIL_DOT_RADIUS: f32 = 2.0;

// Web shots (click bursts)
pub const WEB_SHOT_LIFETIME_MS: f64 = 2000.0;
pub const WEB_SHOT_SPOKES: usize = 8;
pub const WEB_SHOT_CONNECTORS: usize = 3;
pub const WEB_SHOT_CONNECTOR_STEP: f32 = 20.0;
pub const WEB_SHOT_RING_SEGMENTS: usize = 16;
pub const WEB_SHOT_RADIUS: f32 = 72.0;
pub const WEB_SHOT_GROW_FRACTION: f32 = 0.25; // share of the lifetime spent growing
pub const WEB_SHOT_FADE_START: f32 = 0.5; // share of the lifetime before fading

// Speed lines
pub const STREAK_OPACITY_DECAY: f32 = 0.02; // per tick
pub const STREAK_GLITCH_CHANCE: f32 = 0.05; // per line per tick
pub const STREAK_GLITCH_TICKS: u32 = 5;
pub const STREAK_GLITCH_OFFSET: f32 = 15.0;
pub const STREAK_RGB_SHIFT_MIN: f32 = 4.0;
pub const STREAK_RGB_SHIFT_MAX: f32 = 12.0;
pub const STREAK_GLITCH_DAMPING: f32 = 0.8;
pub const STREAK_SHIFT_VISIBLE: f32 = 0.5;
pub const STREAK_TEAR_CHANCE: f32 = 0.3;
pub const GLOBAL_GLITCH_CHANCE: f32 = 0.02; // per tick
pub const GLOBAL_GLITCH_MIN_MS: f64 = 100.0;
pub const GLOBAL_GLITCH_MAX_MS: f64 = 300.0;

// Floating badges
pub const BADGE_SPRITES: [&str; 11] = [
    "react",
    "nextjs",
    "typescript",
    "wordpress",
    "python",
    "nodejs",
    "mongodb",
    "postgresql",
    "flutter",
    "firebase",
    "git",
];
pub const BADGE_MARGIN: f32 = 120.0;
pub const BADGE_EXCLUSION_HALF: f32 = 300.0; // half-width of the central square kept clear
pub const BADGE_PLACEMENT_ATTEMPTS: usize = 64;
pub const BADGE_GLITCH_PERIOD_MS: f64 = 2000.0;
pub const BADGE_GLITCH_CHANCE: f32 = 0.3;
pub const BADGE_GLITCH_REVERT_MS: f64 = 150.0;
pub const BADGE_GLITCH_OFFSET: f32 = 10.0;
pub const BADGE_GLITCH_SCALE_MIN: f32 = 0.8;
pub const BADGE_GLITCH_SCALE_MAX: f32 = 1.2;
pub const BADGE_GLOW_BLUR: f32 = 10.0;

// Webs
pub const WEB_SHINE_STOPS: [(f32, Rgba); 3] = [
    (0.0, Rgba::rgba(255, 51, 102, 0.3)),
    (0.5, Rgba::rgba(128, 255, 255, 0.2)),
    (1.0, Rgba::TRANSPARENT),
];
pub const CORNER_THREAD: Rgba = Rgba::rgba(128, 255, 255, 0.8);
pub const FIELD_THREAD: Rgba = Rgba::rgba(255, 255, 255, 0.08);
