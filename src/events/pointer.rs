use super::Listener;
use crate::canvas::CanvasPen;
use crate::core::Stage;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct WindowWiring {
    pub window: web::Window,
    pub stage: Rc<RefCell<Stage<CanvasPen>>>,
    /// Set on `resize`; the frame loop re-reads the viewport when it sees it.
    pub dirty: Rc<Cell<bool>>,
}

/// Pointer, click and resize listeners on the window. The returned guards
/// own the registrations.
pub fn wire_window(w: &WindowWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointermove(w)?,
        wire_click(w)?,
        wire_resize(w)?,
    ])
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointermove(w: &WindowWiring) -> anyhow::Result<Listener> {
    let stage = w.stage.clone();
    Listener::new(&w.window, "pointermove", move |ev: web::MouseEvent| {
        if let Ok(mut stage) = stage.try_borrow_mut() {
            stage.pointer_move(client_pos(&ev), ev.time_stamp());
        }
    })
}

fn wire_click(w: &WindowWiring) -> anyhow::Result<Listener> {
    let stage = w.stage.clone();
    Listener::new(&w.window, "click", move |ev: web::MouseEvent| {
        if let Ok(mut stage) = stage.try_borrow_mut() {
            stage.pointer_click(client_pos(&ev), ev.time_stamp());
        }
    })
}

fn wire_resize(w: &WindowWiring) -> anyhow::Result<Listener> {
    let dirty = w.dirty.clone();
    Listener::new(&w.window, "resize", move |_: web::Event| {
        dirty.set(true);
    })
}
