//! Pure effect logic: layer state machines, geometry and the frame stage.
//!
//! Nothing in here touches the browser. The wasm glue implements [`pen::Pen`]
//! for a 2D canvas context and feeds timestamps into [`stage::Stage`]; the
//! host-side tests drive the same code with recording pens and fixed seeds.

pub mod badges;
pub mod color;
pub mod constants;
pub mod options;
pub mod pen;
pub mod profile;
pub mod stage;
pub mod streaks;
pub mod surface;
pub mod trail;
pub mod webs;

pub use badges::{Badge, BadgeField, ExclusionZone};
pub use color::Rgba;
pub use options::{LayerKind, MountOptions, OptionsError};
pub use pen::Pen;
pub use profile::{DeviceClass, EffectIntensityProfile};
pub use stage::{Layer, LayerId, Stage};
pub use streaks::{SpeedLine, Streamer};
pub use surface::{Surface, SurfaceConfig};
pub use trail::{TrailField, TrailPoint, WebShot};
pub use webs::{CornerWeb, WebField};

use rand::Rng;

/// Uniform sample in `-amount..amount`, or zero when `amount` is not positive.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, amount: f32) -> f32 {
    if amount > 0.0 {
        rng.gen_range(-amount..amount)
    } else {
        0.0
    }
}

/// Unit vector for an angle in canvas space (y grows downward).
#[inline]
pub fn heading(angle: f32) -> glam::Vec2 {
    glam::Vec2::new(angle.cos(), angle.sin())
}
