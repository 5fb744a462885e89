use crate::canvas::{create_layer_canvas, CanvasPen, SurfaceError};
use crate::core::constants::BADGE_SPRITES;
use crate::core::{EffectIntensityProfile, LayerKind, Stage};
use crate::dom;
use crate::events::{self, Listener, WindowWiring};
use crate::frame::{FrameContext, FrameLoop};
use crate::sprites::SpriteSheet;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One mounted set of effect layers. Dropping it tears everything down.
pub struct Backdrop {
    frame: FrameLoop,
    _listeners: Vec<Listener>,
    stage: Rc<RefCell<Stage<CanvasPen>>>,
    canvases: Vec<web::HtmlCanvasElement>,
}

impl Backdrop {
    pub fn mount(root_id: &str) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{root_id}"))?;

        let options = dom::read_options(&root);
        let device = options.device.unwrap_or_else(|| dom::detect_device(&window));
        let profile = EffectIntensityProfile::for_device(device);
        let seed = options.seed.unwrap_or_else(dom::entropy_seed);
        log::info!(
            "[backdrop] mounting {:?} layers={:?} into #{}",
            device,
            options.layers.iter().map(|k| k.name()).collect::<Vec<_>>(),
            root_id
        );

        let sprites = options
            .layers
            .contains(&LayerKind::Badges)
            .then(|| Rc::new(SpriteSheet::load(&BADGE_SPRITES)));

        let stage = Rc::new(RefCell::new(Stage::new()));
        let mut canvases = Vec::with_capacity(options.layers.len());
        for kind in options.layers.iter().copied() {
            let canvas = match create_layer_canvas(&document, &root, kind) {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("[backdrop] skipping {}: {}", kind.name(), e);
                    continue;
                }
            };
            let layer_sprites = (kind == LayerKind::Badges).then(|| sprites.clone()).flatten();
            match CanvasPen::new(canvas.clone(), layer_sprites) {
                Ok(pen) => {
                    let layer = kind.build(&profile, seed, BADGE_SPRITES.len());
                    stage.borrow_mut().register(layer, pen);
                    canvases.push(canvas);
                }
                Err(SurfaceError::ContextUnavailable) => {
                    log::warn!("[backdrop] no 2D context for {}, layer skipped", kind.name());
                    canvas.remove();
                }
                Err(e) => {
                    log::warn!("[backdrop] skipping {}: {}", kind.name(), e);
                    canvas.remove();
                }
            }
        }

        let frame_ctx = FrameContext::new(window.clone(), stage.clone());
        let wiring = WindowWiring {
            window: window.clone(),
            stage: stage.clone(),
            dirty: frame_ctx.dirty.clone(),
        };
        let started = events::wire_window(&wiring)
            .and_then(|listeners| Ok((listeners, FrameLoop::start(window, frame_ctx)?)));
        let (listeners, frame) = match started {
            Ok(parts) => parts,
            Err(e) => {
                canvases.iter().for_each(|c| c.remove());
                return Err(e);
            }
        };

        Ok(Self {
            frame,
            _listeners: listeners,
            stage,
            canvases,
        })
    }

    pub fn layer_count(&self) -> usize {
        self.stage.borrow().len()
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.frame.stop();
        if let Ok(mut stage) = self.stage.try_borrow_mut() {
            stage.clear();
        }
        for canvas in self.canvases.drain(..) {
            canvas.remove();
        }
        log::info!("[backdrop] unmounted");
    }
}
