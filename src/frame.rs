use crate::canvas::CanvasPen;
use crate::constants::{BUDGET_WARN_INTERVAL, FRAME_BUDGET};
use crate::core::Stage;
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State the animation frame callback works on.
pub struct FrameContext {
    pub window: web::Window,
    pub stage: Rc<RefCell<Stage<CanvasPen>>>,
    pub dirty: Rc<Cell<bool>>,
    pub pixel_ratio: f32,
    pub slow_frames: u32,
    pub last_warn: Option<Instant>,
}

impl FrameContext {
    pub fn new(window: web::Window, stage: Rc<RefCell<Stage<CanvasPen>>>) -> Self {
        Self {
            window,
            stage,
            dirty: Rc::new(Cell::new(true)),
            pixel_ratio: 0.0,
            slow_frames: 0,
            last_warn: None,
        }
    }

    /// Picks up the latest window geometry if a resize was seen or the pixel
    /// ratio moved (zoom, or dragging to another monitor).
    fn sync_viewport(&mut self) {
        let ratio = self.window.device_pixel_ratio() as f32;
        if !self.dirty.replace(false) && ratio == self.pixel_ratio {
            return;
        }
        if let Some((size, ratio)) = dom::viewport(&self.window) {
            self.pixel_ratio = ratio;
            self.stage.borrow_mut().resize(size, ratio);
        }
    }

    pub fn frame(&mut self, now: f64) {
        let started = Instant::now();
        self.sync_viewport();
        self.stage.borrow_mut().frame(now);

        if started.elapsed() > FRAME_BUDGET {
            self.slow_frames += 1;
            let quiet = self
                .last_warn
                .map_or(true, |t| t.elapsed() >= BUDGET_WARN_INTERVAL);
            if quiet {
                log::warn!(
                    "[frame] {} frame(s) over the {:?} budget, last took {:?}",
                    self.slow_frames,
                    FRAME_BUDGET,
                    started.elapsed()
                );
                self.slow_frames = 0;
                self.last_warn = Some(Instant::now());
            }
        }
    }
}

/// A running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the self-referencing callback.
pub struct FrameLoop {
    window: web::Window,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    pub fn start(window: web::Window, frame_ctx: FrameContext) -> anyhow::Result<Self> {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        let window_tick = window.clone();
        let mut frame_ctx = frame_ctx;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.frame(now);
            if let Some(cb) = tick_clone.borrow().as_ref() {
                handle_tick.set(
                    window_tick
                        .request_animation_frame(cb.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match tick.borrow().as_ref() {
            Some(cb) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?,
            None => anyhow::bail!("frame callback missing"),
        };
        handle.set(Some(first));

        Ok(Self {
            window,
            handle,
            running,
            tick,
        })
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Breaks the callback -> tick -> callback cycle.
        if let Ok(mut slot) = self.tick.try_borrow_mut() {
            slot.take();
        }
    }
}
