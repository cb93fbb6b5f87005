// ABOUTME: Traits implemented by content placed into split panes.
// ABOUTME: Identity for removal, bounds delivery, and the optional orientation capability.

use sf_core::{Orientation, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u64);

/// Content that can occupy a pane.
///
/// Panes find components by [`ComponentId`], so ids must be unique within
/// one frame. Every layout pass hands the component its new bounds in the
/// coordinate space of the owning container.
pub trait Component {
    fn id(&self) -> ComponentId;

    fn set_bounds(&mut self, bounds: Rect);

    /// Components that want to know their layout axis return themselves here.
    fn as_orientable(&mut self) -> Option<&mut dyn Orientable> {
        None
    }
}

/// Content that lays itself out along an axis chosen by its container
pub trait Orientable {
    fn set_orientation(&mut self, orientation: Orientation);
}

/// Tell `component` which axis it should use, if it cares.
pub(crate) fn notify_orientation<C: Component>(component: &mut C, orientation: Orientation) {
    if let Some(orientable) = component.as_orientable() {
        orientable.set_orientation(orientation);
    }
}
