#![cfg(target_arch = "wasm32")]
use crate::backdrop::Backdrop;
use crate::constants::ROOT_ELEMENT_ID;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod backdrop;
mod canvas;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod sprites;

thread_local! {
    static MOUNTED: RefCell<Option<Backdrop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-fx starting");

    let has_root = dom::window_document()
        .and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID))
        .is_some();
    if has_root {
        if let Err(e) = mount_into(ROOT_ELEMENT_ID) {
            log::error!("mount error: {:?}", e);
        }
    }
    Ok(())
}

/// Mounts the backdrop into the element with id `root_id`, replacing any
/// backdrop mounted before.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<(), JsValue> {
    mount_into(root_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Tears down the mounted backdrop. Returns false when nothing was mounted.
#[wasm_bindgen]
pub fn unmount() -> bool {
    // Take first so the drop runs outside the thread-local borrow.
    let taken = MOUNTED.with(|slot| slot.borrow_mut().take());
    taken.is_some()
}

fn mount_into(root_id: &str) -> anyhow::Result<()> {
    unmount();
    let backdrop = Backdrop::mount(root_id)?;
    log::info!("[backdrop] {} layer(s) running", backdrop.layer_count());
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(backdrop));
    Ok(())
}
