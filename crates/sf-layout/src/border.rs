// ABOUTME: Nine-region compass frame built from nested split panes.
// ABOUTME: Maps north/south/east/west/corner/center placements onto three rows of panes.

use std::fmt;

use sf_core::{FrameConfig, Orientation, Point, Rect, SizeSpec};

use crate::component::{notify_orientation, Component, ComponentId};
use crate::divider::{Divider, QuickHide};
use crate::error::SplitError;
use crate::split_pane::{MultipleSplitPane, Pane};

/// Placement constraint accepted by [`BorderSplitPane`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Center,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::NorthWest,
        Region::North,
        Region::NorthEast,
        Region::West,
        Region::Center,
        Region::East,
        Region::SouthWest,
        Region::South,
        Region::SouthEast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::NorthEast => "NorthEast",
            Region::NorthWest => "NorthWest",
            Region::SouthEast => "SouthEast",
            Region::SouthWest => "SouthWest",
            Region::Center => "Center",
        }
    }

    /// Resolve a constraint name; anything unrecognised means `Center`.
    pub fn from_constraint(constraint: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|region| region.name() == constraint)
            .unwrap_or_else(|| {
                tracing::debug!(constraint, "Unrecognised region, using Center");
                Region::Center
            })
    }

    pub fn row(self) -> Row {
        match self {
            Region::NorthWest | Region::North | Region::NorthEast => Row::Top,
            Region::West | Region::Center | Region::East => Row::Middle,
            Region::SouthWest | Region::South | Region::SouthEast => Row::Bottom,
        }
    }

    /// Logical slot within the region's row
    pub fn slot(self) -> usize {
        match self {
            Region::NorthWest | Region::West | Region::SouthWest => 0,
            Region::North | Region::Center | Region::South => 1,
            Region::NorthEast | Region::East | Region::SouthEast => 2,
        }
    }

    /// Axis an orientable component should use when placed here
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            Region::Center => None,
            Region::West | Region::East => Some(Orientation::Vertical),
            _ => Some(Orientation::Horizontal),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Region {
    fn from(constraint: &str) -> Self {
        Region::from_constraint(constraint)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Top, Row::Middle, Row::Bottom];

    /// Slot of this row in the outer vertical pane
    pub fn outer_slot(self) -> usize {
        match self {
            Row::Top => 0,
            Row::Middle => 1,
            Row::Bottom => 2,
        }
    }
}

/// Which split pane of the frame a divider belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Outer,
    Row(Row),
}

/// Top and bottom rows are built up front but only join the outer pane
/// once something is placed in them. After that they stay, even if empty.
#[derive(Debug)]
enum RowState<C> {
    Detached(MultipleSplitPane<C>),
    Attached,
}

/// A frame with a center region surrounded by eight compass regions, every
/// neighbouring pair separated by a draggable divider.
///
/// An outer vertical [`MultipleSplitPane`] holds three horizontal rows:
/// north-west/north/north-east, west/center/east and
/// south-west/south/south-east. Each region holds at most one component;
/// placing another component in an occupied region hands the previous one
/// back. Empty regions and rows not yet attached stay collapsed, so only
/// occupied regions take space. Divider events are addressed by [`Level`]
/// and use frame coordinates.
#[derive(Debug)]
pub struct BorderSplitPane<C> {
    outer: MultipleSplitPane<C>,
    top: RowState<C>,
    bottom: RowState<C>,
    edge_size: SizeSpec,
    row_size: SizeSpec,
    center_size: SizeSpec,
    bounds: Rect,
}

impl<C: Component> BorderSplitPane<C> {
    pub fn new() -> Self {
        Self::with_config(&FrameConfig::default())
    }

    pub fn with_config(config: &FrameConfig) -> Self {
        let mut outer = MultipleSplitPane::from_panes(
            vec![
                (Pane::Empty, config.row_size),
                (Self::new_row(config).into(), config.center_size),
                (Pane::Empty, config.row_size),
            ],
            Orientation::Vertical,
        )
        .with_divider_thickness(config.divider_thickness)
        .with_quick_hide(config.quick_hide);
        collapse_empty_slots(&mut outer);

        Self {
            outer,
            top: RowState::Detached(Self::new_row(config)),
            bottom: RowState::Detached(Self::new_row(config)),
            edge_size: config.edge_size,
            row_size: config.row_size,
            center_size: config.center_size,
            bounds: Rect::default(),
        }
    }

    fn new_row(config: &FrameConfig) -> MultipleSplitPane<C> {
        let mut row = MultipleSplitPane::new(3, Orientation::Horizontal)
            .with_divider_thickness(config.divider_thickness)
            .with_quick_hide(config.quick_hide);
        collapse_empty_slots(&mut row);
        row
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resize the frame. Regions are laid out relative to its origin.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.outer
            .set_bounds(Rect::new(0, 0, bounds.width, bounds.height));
    }

    pub fn outer(&self) -> &MultipleSplitPane<C> {
        &self.outer
    }

    pub fn is_attached(&self, row: Row) -> bool {
        match row {
            Row::Top => matches!(self.top, RowState::Attached),
            Row::Middle => true,
            Row::Bottom => matches!(self.bottom, RowState::Attached),
        }
    }

    pub fn row(&self, row: Row) -> Option<&MultipleSplitPane<C>> {
        let state = match row {
            Row::Top => &self.top,
            Row::Bottom => &self.bottom,
            Row::Middle => return self.attached_row(row),
        };
        match state {
            RowState::Detached(pane) => Some(pane),
            RowState::Attached => self.attached_row(row),
        }
    }

    fn attached_row(&self, row: Row) -> Option<&MultipleSplitPane<C>> {
        self.outer.pane(row.outer_slot()).and_then(Pane::as_split)
    }

    fn row_mut(&mut self, row: Row) -> Option<&mut MultipleSplitPane<C>> {
        let state = match row {
            Row::Top => &mut self.top,
            Row::Bottom => &mut self.bottom,
            Row::Middle => {
                return self
                    .outer
                    .pane_mut(row.outer_slot())
                    .and_then(Pane::as_split_mut)
            }
        };
        match state {
            RowState::Detached(pane) => Some(pane),
            RowState::Attached => self
                .outer
                .pane_mut(row.outer_slot())
                .and_then(Pane::as_split_mut),
        }
    }

    /// Place `component` in the center, returning any previous occupant
    pub fn add_center(&mut self, component: C) -> Option<C> {
        self.add(component, Region::Center)
    }

    /// Place `component` in `region`, returning any previous occupant.
    ///
    /// Orientable components are told the region's axis first. The first
    /// placement into a north or south region attaches that row to the
    /// frame.
    pub fn add(&mut self, mut component: C, region: Region) -> Option<C> {
        if let Some(orientation) = region.orientation() {
            notify_orientation(&mut component, orientation);
        }

        let spec = self.region_spec(region);
        let row = region.row();
        let Some(target) = self.row_mut(row) else {
            tracing::error!(%region, "Frame row missing, component not placed");
            return Some(component);
        };
        if region.slot() >= target.pane_count() {
            tracing::error!(%region, "Frame row lost its slot, component not placed");
            return Some(component);
        }

        let id = component.id();
        let displaced = target
            .replace_pane(region.slot(), Pane::Component(component), spec)
            .ok()
            .and_then(Pane::into_component);
        tracing::debug!(%region, ?id, replaced = displaced.is_some(), "Placed component");

        self.attach(row);
        displaced
    }

    /// Like [`add`](Self::add) with a constraint name such as `"NorthEast"`
    pub fn add_constrained(&mut self, component: C, constraint: &str) -> Option<C> {
        self.add(component, Region::from_constraint(constraint))
    }

    /// Take `id` out of whichever region holds it.
    ///
    /// The region is left empty and collapsed and its row stays attached.
    /// Unlike [`MultipleSplitPane::remove_pane`] no slot or divider is
    /// dropped, so every region keeps its place.
    pub fn remove(&mut self, id: ComponentId) -> Option<C> {
        let mut removed = None;
        for row in Row::ALL {
            let Some(split) = self.row_mut(row) else {
                continue;
            };
            if let Some(component) = split.vacate(id) {
                collapse_empty_slots(split);
                tracing::debug!(?id, ?row, "Removed component from frame");
                removed = Some(component);
            }
        }
        removed
    }

    pub fn component(&self, region: Region) -> Option<&C> {
        self.row(region.row())?
            .pane(region.slot())?
            .as_component()
    }

    pub fn region_of(&self, id: ComponentId) -> Option<Region> {
        Region::ALL
            .into_iter()
            .find(|region| self.component(*region).is_some_and(|c| c.id() == id))
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.region_of(id).is_some()
    }

    /// Bounds of the component in `region`, in frame coordinates
    pub fn region_bounds(&self, region: Region) -> Option<Rect> {
        let row = region.row();
        if !self.is_attached(row) {
            return None;
        }
        self.component(region)?;

        let origin = self.outer.pane_bounds(row.outer_slot())?.origin();
        let local = self.row(row)?.pane_bounds(region.slot())?;
        Some(Rect::new(
            origin.x + local.x,
            origin.y + local.y,
            local.width,
            local.height,
        ))
    }

    /// Divider under `point`, given in frame coordinates
    pub fn divider_at(&self, point: Point) -> Option<(Level, usize)> {
        if let Some(index) = self.outer.divider_at(point) {
            return Some((Level::Outer, index));
        }
        Row::ALL
            .into_iter()
            .filter(|row| self.is_attached(*row))
            .find_map(|row| {
                let origin = self.outer.pane_bounds(row.outer_slot())?.origin();
                let index = self.row(row)?.divider_at(point.relative_to(origin))?;
                Some((Level::Row(row), index))
            })
    }

    /// Begin a drag. Dividers next to an empty region do not move.
    pub fn press_divider(
        &mut self,
        level: Level,
        index: usize,
        point: Point,
    ) -> Result<(), SplitError> {
        let Some((split, origin)) = self.split_at(level) else {
            return Ok(());
        };
        let next_to_empty = index < split.divider_count()
            && (split.pane(index).is_some_and(Pane::is_empty)
                || split.pane(index + 1).is_some_and(Pane::is_empty));
        if next_to_empty {
            tracing::trace!(?level, index, "Divider next to empty region, not dragging");
            return Ok(());
        }
        split.press_divider(index, point.relative_to(origin))
    }

    pub fn drag_divider(
        &mut self,
        level: Level,
        index: usize,
        point: Point,
    ) -> Result<(), SplitError> {
        match self.split_at(level) {
            Some((split, origin)) => split.drag_divider(index, point.relative_to(origin)),
            None => Ok(()),
        }
    }

    pub fn release_divider(&mut self, level: Level, index: usize) -> Result<(), SplitError> {
        match self.split_at(level) {
            Some((split, _)) => split.release_divider(index),
            None => Ok(()),
        }
    }

    /// Quick-hide click. Returns whether the target region ends up
    /// collapsed; empty regions always stay collapsed.
    pub fn click_divider(&mut self, level: Level, index: usize) -> Result<Option<bool>, SplitError> {
        let Some((split, _)) = self.split_at(level) else {
            return Ok(None);
        };
        if split.click_divider(index)?.is_none() {
            return Ok(None);
        }

        let target = match split.divider(index).map(Divider::quick_hide) {
            Some(QuickHide::Trailing) => index + 1,
            _ => index,
        };
        collapse_empty_slots(split);
        Ok(Some(split.is_collapsed(target)))
    }

    /// The split pane at `level` and its origin in frame coordinates
    fn split_at(&mut self, level: Level) -> Option<(&mut MultipleSplitPane<C>, Point)> {
        match level {
            Level::Outer => Some((&mut self.outer, Point::default())),
            Level::Row(row) => {
                let origin = self
                    .outer
                    .pane_bounds(row.outer_slot())
                    .map(|bounds| bounds.origin())
                    .unwrap_or_default();
                self.row_mut(row).map(|split| (split, origin))
            }
        }
    }

    fn region_spec(&self, region: Region) -> SizeSpec {
        if region.slot() == 1 {
            self.center_size
        } else {
            self.edge_size
        }
    }

    fn attach(&mut self, row: Row) {
        let state = match row {
            Row::Top => &mut self.top,
            Row::Bottom => &mut self.bottom,
            Row::Middle => return,
        };
        let RowState::Detached(_) = state else {
            return;
        };
        let RowState::Detached(pane) = std::mem::replace(state, RowState::Attached) else {
            return;
        };

        match self
            .outer
            .insert_pane(row.outer_slot(), pane.into(), self.row_size)
        {
            Ok(()) => tracing::debug!(?row, "Attached row to frame"),
            Err(err) => tracing::error!(%err, ?row, "Could not attach row"),
        }
    }
}

/// Keep placeholder slots out of the layout
fn collapse_empty_slots<C: Component>(split: &mut MultipleSplitPane<C>) {
    for index in 0..split.pane_count() {
        let empty = split.pane(index).is_some_and(Pane::is_empty);
        if empty && !split.is_collapsed(index) {
            if let Err(err) = split.set_collapsed(index, true) {
                tracing::error!(%err, index, "Could not collapse empty region");
            }
        }
    }
}

impl<C: Component> Default for BorderSplitPane<C> {
    fn default() -> Self {
        Self::new()
    }
}
