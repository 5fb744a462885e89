use crate::core::pen::Pen;
use crate::core::surface::Surface;
use glam::Vec2;

/// One animated effect. Layers own all of their state; the stage calls
/// `update` before `draw` within a frame and never shares data between them.
pub trait Layer {
    fn name(&self) -> &'static str;
    /// Called on mount and whenever the layer's surface geometry changes.
    fn resize(&mut self, viewport: Vec2);
    fn update(&mut self, now: f64);
    fn draw(&mut self, pen: &mut dyn Pen);
    fn pointer_move(&mut self, _at: Vec2, _now: f64) {}
    fn pointer_click(&mut self, _at: Vec2, _now: f64) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

struct Slot<P: Pen> {
    id: LayerId,
    layer: Box<dyn Layer>,
    surface: Surface<P>,
}

/// Frame scheduler: every registered layer is ticked from a single frame
/// callback, and deregistering is all it takes to stop one.
pub struct Stage<P: Pen> {
    slots: Vec<Slot<P>>,
    next_id: u32,
    viewport: Option<(Vec2, f32)>,
}

impl<P: Pen> Default for Stage<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pen> Stage<P> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
            viewport: None,
        }
    }

    pub fn register(&mut self, layer: Box<dyn Layer>, pen: P) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        let mut slot = Slot {
            id,
            layer,
            surface: Surface::new(pen),
        };
        if let Some((viewport, ratio)) = self.viewport {
            if slot.surface.resize(viewport.x, viewport.y, ratio) {
                slot.layer.resize(viewport);
            }
        }
        log::debug!("[stage] registered {} as {:?}", slot.layer.name(), id);
        self.slots.push(slot);
        id
    }

    pub fn deregister(&mut self, id: LayerId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        before != self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn layer_names(&self) -> Vec<&'static str> {
        self.slots.iter().map(|s| s.layer.name()).collect()
    }

    pub fn surface(&self, id: LayerId) -> Option<&Surface<P>> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.surface)
    }

    /// Applies the latest window geometry to every surface; layers are only
    /// told about it when their surface actually changed.
    pub fn resize(&mut self, viewport: Vec2, pixel_ratio: f32) {
        self.viewport = Some((viewport, pixel_ratio));
        for slot in &mut self.slots {
            if slot.surface.resize(viewport.x, viewport.y, pixel_ratio) {
                slot.layer.resize(viewport);
            }
        }
    }

    pub fn frame(&mut self, now: f64) {
        for slot in &mut self.slots {
            slot.layer.update(now);
            slot.surface.begin_frame();
            slot.layer.draw(slot.surface.pen_mut());
        }
    }

    pub fn pointer_move(&mut self, at: Vec2, now: f64) {
        for slot in &mut self.slots {
            slot.layer.pointer_move(at, now);
        }
    }

    pub fn pointer_click(&mut self, at: Vec2, now: f64) {
        for slot in &mut self.slots {
            slot.layer.pointer_click(at, now);
        }
    }
}
