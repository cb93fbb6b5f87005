// ABOUTME: Draggable separator between two adjacent panes.
// ABOUTME: Tracks drag state and which neighbour a quick-hide click collapses.

use sf_core::{Orientation, Point, Rect};

/// Which neighbouring pane a single click on the divider collapses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickHide {
    #[default]
    None,
    /// Collapse the pane before the divider (left or top)
    Leading,
    /// Collapse the pane after the divider (right or bottom)
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Main-axis pointer position at press
        origin: i32,
        /// Pointer travel since press
        delta: i32,
        /// Extents of the two neighbouring panes at press
        leading: i32,
        trailing: i32,
    },
}

#[derive(Debug, Clone)]
pub struct Divider {
    orientation: Orientation,
    thickness: u32,
    quick_hide: QuickHide,
    drag: DragState,
    bounds: Rect,
}

impl Divider {
    pub fn new(orientation: Orientation, thickness: u32) -> Self {
        Self {
            orientation,
            thickness,
            quick_hide: QuickHide::None,
            drag: DragState::Idle,
            bounds: Rect::default(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn quick_hide(&self) -> QuickHide {
        self.quick_hide
    }

    pub fn set_quick_hide(&mut self, quick_hide: QuickHide) {
        self.quick_hide = quick_hide;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Start a drag at `point`, remembering the neighbours' extents.
    pub(crate) fn press(&mut self, point: Point, leading: i32, trailing: i32) {
        self.drag = DragState::Dragging {
            origin: self.orientation.position(point),
            delta: 0,
            leading,
            trailing,
        };
    }

    /// Update the drag with a new pointer position.
    ///
    /// Returns the new (leading, trailing) extents, clamped so neither goes
    /// below zero and their sum stays constant. `None` when not dragging.
    pub(crate) fn drag_to(&mut self, point: Point) -> Option<(i32, i32)> {
        let DragState::Dragging {
            origin,
            leading,
            trailing,
            ..
        } = self.drag
        else {
            return None;
        };

        let total = leading.saturating_add(trailing);
        let delta = self
            .orientation
            .position(point)
            .saturating_sub(origin)
            .clamp(-leading, trailing);
        self.drag = DragState::Dragging {
            origin,
            delta,
            leading,
            trailing,
        };
        let new_leading = leading.saturating_add(delta).clamp(0, total);
        Some((new_leading, total - new_leading))
    }

    pub(crate) fn release(&mut self) {
        self.drag = DragState::Idle;
    }
}
