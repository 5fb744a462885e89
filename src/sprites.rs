use crate::constants::{ICON_BASE_URL, ICON_EXT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Badge images, decoded in the background. A slot stays empty until its
/// image has decoded, so badges simply do not draw while loading.
pub struct SpriteSheet {
    slots: Rc<RefCell<Vec<Option<web::HtmlImageElement>>>>,
}

impl SpriteSheet {
    pub fn load(names: &[&str]) -> Self {
        let slots = Rc::new(RefCell::new(vec![None; names.len()]));
        for (index, name) in names.iter().enumerate() {
            let url = format!("{ICON_BASE_URL}/{name}{ICON_EXT}");
            let slots = slots.clone();
            spawn_local(async move {
                match decode(&url).await {
                    Ok(img) => {
                        if let Some(slot) = slots.borrow_mut().get_mut(index) {
                            *slot = Some(img);
                        }
                    }
                    Err(e) => log::warn!("[sprites] {url} failed to load: {e:#}"),
                }
            });
        }
        Self { slots }
    }

    pub fn get(&self, index: usize) -> Option<web::HtmlImageElement> {
        self.slots.borrow().get(index).cloned().flatten()
    }
}

async fn decode(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(img)
}
