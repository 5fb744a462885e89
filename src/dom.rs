use crate::constants::{COARSE_POINTER_QUERY, DATA_DEVICE, DATA_LAYERS, DATA_SEED};
use crate::core::{DeviceClass, MountOptions};
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Inner window size in CSS pixels plus the current device pixel ratio.
pub fn viewport(window: &web::Window) -> Option<(Vec2, f32)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((Vec2::new(w as f32, h as f32), window.device_pixel_ratio() as f32))
}

pub fn coarse_pointer(window: &web::Window) -> bool {
    window
        .match_media(COARSE_POINTER_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

pub fn detect_device(window: &web::Window) -> DeviceClass {
    let width = viewport(window).map_or(0.0, |(size, _)| size.x);
    DeviceClass::classify(width, coarse_pointer(window))
}

/// Mount options from the root element's data attributes. A malformed
/// attribute is reported and the defaults are used instead.
pub fn read_options(root: &web::Element) -> MountOptions {
    let device = root.get_attribute(DATA_DEVICE);
    let layers = root.get_attribute(DATA_LAYERS);
    let seed = root.get_attribute(DATA_SEED);
    match MountOptions::parse(device.as_deref(), layers.as_deref(), seed.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("[dom] ignoring mount options on #{}: {}", root.id(), e);
            MountOptions::default()
        }
    }
}

/// Fresh base seed for a mount without `data-seed`.
pub fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            log::warn!("[dom] getrandom failed ({e}); falling back to Math.random");
            (js_sys::Math::random() * u64::MAX as f64) as u64
        }
    }
}
