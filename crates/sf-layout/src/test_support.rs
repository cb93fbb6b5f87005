// ABOUTME: Minimal component used by the unit tests.
// ABOUTME: Records the bounds and orientation it was last given.

use sf_core::{Orientation, Rect};

use crate::component::{Component, ComponentId, Orientable};

#[derive(Debug)]
pub struct Panel {
    id: ComponentId,
    orientable: bool,
    pub bounds: Rect,
    pub orientation: Option<Orientation>,
}

impl Panel {
    pub fn new(id: u64) -> Self {
        Self {
            id: ComponentId(id),
            orientable: false,
            bounds: Rect::default(),
            orientation: None,
        }
    }

    pub fn orientable(id: u64) -> Self {
        Self {
            orientable: true,
            ..Self::new(id)
        }
    }
}

impl Component for Panel {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn as_orientable(&mut self) -> Option<&mut dyn Orientable> {
        if self.orientable {
            Some(self)
        } else {
            None
        }
    }
}

impl Orientable for Panel {
    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Some(orientation);
    }
}
