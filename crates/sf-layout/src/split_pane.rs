// ABOUTME: Container holding panes separated by draggable dividers.
// ABOUTME: Keeps one divider between each pair of panes across inserts and removals.

use sf_core::{Insets, Orientation, Point, Rect, SizeSpec, DEFAULT_DIVIDER_THICKNESS};

use crate::component::{Component, ComponentId};
use crate::divider::{Divider, QuickHide};
use crate::error::SplitError;
use crate::splitter_layout::{ChildIndex, Section, SplitterLayout};

/// Content of one pane slot
#[derive(Debug)]
pub enum Pane<C> {
    /// Placeholder laid out by its slot's spec; the next insert fills it
    Empty,
    Component(C),
    Split(Box<MultipleSplitPane<C>>),
}

impl<C: Component> Pane<C> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Pane::Empty)
    }

    pub fn as_component(&self) -> Option<&C> {
        match self {
            Pane::Component(component) => Some(component),
            _ => None,
        }
    }

    pub fn as_component_mut(&mut self) -> Option<&mut C> {
        match self {
            Pane::Component(component) => Some(component),
            _ => None,
        }
    }

    pub fn as_split(&self) -> Option<&MultipleSplitPane<C>> {
        match self {
            Pane::Split(split) => Some(split),
            _ => None,
        }
    }

    pub fn as_split_mut(&mut self) -> Option<&mut MultipleSplitPane<C>> {
        match self {
            Pane::Split(split) => Some(split),
            _ => None,
        }
    }

    pub fn into_component(self) -> Option<C> {
        match self {
            Pane::Component(component) => Some(component),
            _ => None,
        }
    }

    fn holds(&self, id: ComponentId) -> bool {
        self.as_component().is_some_and(|c| c.id() == id)
    }

    fn set_bounds(&mut self, bounds: Rect) {
        match self {
            Pane::Empty => {}
            Pane::Component(component) => component.set_bounds(bounds),
            Pane::Split(split) => split.set_bounds(bounds),
        }
    }
}

impl<C> From<MultipleSplitPane<C>> for Pane<C> {
    fn from(split: MultipleSplitPane<C>) -> Self {
        Pane::Split(Box::new(split))
    }
}

#[derive(Debug)]
struct Slot<C> {
    pane: Pane<C>,
    spec: SizeSpec,
    collapsed: bool,
    bounds: Rect,
}

impl<C: Component> Slot<C> {
    fn new(pane: Pane<C>, spec: SizeSpec) -> Self {
        Self {
            pane,
            spec,
            collapsed: false,
            bounds: Rect::default(),
        }
    }

    fn section(&self) -> Section {
        Section {
            spec: self.spec,
            hidden: self.collapsed,
        }
    }
}

/// A row or column of panes, each pair separated by a [`Divider`].
///
/// Panes and dividers live in two separate sequences. Pane `i` is at
/// physical child index `2i` and divider `i` at `2i + 1` (see
/// [`ChildIndex`]); with `n` panes there are always `max(n - 1, 0)`
/// dividers. Every structural change is followed by a full layout pass
/// before it returns, so bounds are never stale.
///
/// With two or more dividers the first one quick-hides the leading pane
/// and the last one the trailing pane. Interior dividers never quick-hide.
#[derive(Debug)]
pub struct MultipleSplitPane<C> {
    layout: SplitterLayout,
    slots: Vec<Slot<C>>,
    dividers: Vec<Divider>,
    bounds: Rect,
    quick_hide: bool,
}

impl<C: Component> MultipleSplitPane<C> {
    /// Create `pane_count` empty slots and the dividers between them
    pub fn new(pane_count: usize, orientation: Orientation) -> Self {
        let panes = (0..pane_count)
            .map(|_| (Pane::Empty, SizeSpec::default()))
            .collect();
        Self::from_panes(panes, orientation)
    }

    pub fn from_panes(panes: Vec<(Pane<C>, SizeSpec)>, orientation: Orientation) -> Self {
        let layout = SplitterLayout::new(orientation, DEFAULT_DIVIDER_THICKNESS);
        let divider_count = panes.len().saturating_sub(1);
        let mut split = Self {
            layout,
            slots: panes
                .into_iter()
                .map(|(pane, spec)| Slot::new(pane, spec))
                .collect(),
            dividers: (0..divider_count)
                .map(|_| Divider::new(orientation, DEFAULT_DIVIDER_THICKNESS))
                .collect(),
            bounds: Rect::default(),
            quick_hide: true,
        };
        split.structure_changed();
        split
    }

    pub fn with_divider_thickness(mut self, thickness: u32) -> Self {
        self.layout = SplitterLayout::new(self.orientation(), thickness).with_insets(self.insets());
        for divider in &mut self.dividers {
            *divider = Divider::new(self.layout.orientation(), thickness);
        }
        self.structure_changed();
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.layout = self.layout.with_insets(insets);
        self.relayout();
        self
    }

    /// Turn quick-hide on the extreme dividers on or off
    pub fn with_quick_hide(mut self, enabled: bool) -> Self {
        self.quick_hide = enabled;
        self.structure_changed();
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.layout.orientation()
    }

    pub fn insets(&self) -> Insets {
        self.layout.insets()
    }

    pub fn layout(&self) -> &SplitterLayout {
        &self.layout
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn pane_count(&self) -> usize {
        self.slots.len()
    }

    pub fn divider_count(&self) -> usize {
        self.dividers.len()
    }

    pub fn pane(&self, index: usize) -> Option<&Pane<C>> {
        self.slots.get(index).map(|slot| &slot.pane)
    }

    pub fn pane_mut(&mut self, index: usize) -> Option<&mut Pane<C>> {
        self.slots.get_mut(index).map(|slot| &mut slot.pane)
    }

    pub fn panes(&self) -> impl Iterator<Item = &Pane<C>> + '_ {
        self.slots.iter().map(|slot| &slot.pane)
    }

    pub fn pane_bounds(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).map(|slot| slot.bounds)
    }

    pub fn size_spec(&self, index: usize) -> Option<SizeSpec> {
        self.slots.get(index).map(|slot| slot.spec)
    }

    pub fn is_collapsed(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.collapsed)
    }

    pub fn divider(&self, index: usize) -> Option<&Divider> {
        self.dividers.get(index)
    }

    pub fn dividers(&self) -> &[Divider] {
        &self.dividers
    }

    /// Logical index of the pane holding `id`
    pub fn index_of(&self, id: ComponentId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.pane.holds(id))
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.index_of(id).is_some()
    }

    /// The interleaved child sequence, pane first, with current bounds
    pub fn children(&self) -> impl Iterator<Item = (ChildIndex, Rect)> + '_ {
        (0..self.slots.len() + self.dividers.len()).map(move |physical| {
            let child = ChildIndex::from_physical(physical);
            let bounds = match child {
                ChildIndex::Pane(i) => self.slots[i].bounds,
                ChildIndex::Divider(i) => self.dividers[i].bounds(),
            };
            (child, bounds)
        })
    }

    /// Insert `pane` at logical `index`.
    ///
    /// An empty placeholder at `index` is filled in place. Otherwise the
    /// panes from `index` on shift up one slot and a new divider is added
    /// between the new pane and its neighbour. `index` may equal the pane
    /// count to append.
    pub fn insert_pane(
        &mut self,
        index: usize,
        pane: Pane<C>,
        spec: SizeSpec,
    ) -> Result<(), SplitError> {
        let count = self.slots.len();
        if index > count {
            return Err(SplitError::InvalidPaneIndex { index, count });
        }

        if index < count && self.slots[index].pane.is_empty() {
            self.slots[index] = Slot::new(pane, spec);
            tracing::debug!(index, "Filled empty pane slot");
        } else {
            self.slots.insert(index, Slot::new(pane, spec));
            if count > 0 {
                let divider = self.new_divider();
                self.dividers.insert(index.min(self.dividers.len()), divider);
            }
            tracing::debug!(index, panes = self.slots.len(), "Inserted pane");
        }

        self.structure_changed();
        Ok(())
    }

    /// Swap the content of slot `index`, returning what was there
    pub fn replace_pane(
        &mut self,
        index: usize,
        pane: Pane<C>,
        spec: SizeSpec,
    ) -> Result<Pane<C>, SplitError> {
        let count = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SplitError::InvalidPaneIndex { index, count })?;

        let previous = std::mem::replace(slot, Slot::new(pane, spec));
        tracing::debug!(index, "Replaced pane");
        self.relayout();
        Ok(previous.pane)
    }

    /// Remove the pane holding `id` together with one adjacent divider.
    ///
    /// Does nothing and returns `None` when no pane holds `id`.
    pub fn remove_pane(&mut self, id: ComponentId) -> Option<C> {
        let index = self.index_of(id)?;
        self.take_slot(index).into_component()
    }

    pub fn remove_pane_at(&mut self, index: usize) -> Result<Pane<C>, SplitError> {
        let count = self.slots.len();
        if index >= count {
            return Err(SplitError::InvalidPaneIndex { index, count });
        }
        Ok(self.take_slot(index))
    }

    /// Empty the slot holding `id` but keep the slot and its dividers
    pub fn vacate(&mut self, id: ComponentId) -> Option<C> {
        let index = self.index_of(id)?;
        let slot = &mut self.slots[index];
        let previous = std::mem::replace(&mut slot.pane, Pane::Empty);
        slot.collapsed = false;
        tracing::debug!(index, "Vacated pane slot");
        self.relayout();
        previous.into_component()
    }

    pub fn set_size_spec(&mut self, index: usize, spec: SizeSpec) -> Result<(), SplitError> {
        let count = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SplitError::InvalidPaneIndex { index, count })?;
        slot.spec = spec;
        self.relayout();
        Ok(())
    }

    pub fn set_collapsed(&mut self, index: usize, collapsed: bool) -> Result<(), SplitError> {
        let count = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SplitError::InvalidPaneIndex { index, count })?;
        slot.collapsed = collapsed;
        self.relayout();
        Ok(())
    }

    /// Move this pane within its parent and lay out its children
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
    }

    /// Recompute bounds for every pane and divider.
    ///
    /// Child bounds are relative to this pane's own origin.
    pub fn relayout(&mut self) {
        let sections: Vec<Section> = self.slots.iter().map(Slot::section).collect();
        let arrangement = self.layout.arrange(self.bounds.size(), &sections);

        for (slot, bounds) in self.slots.iter_mut().zip(arrangement.panes) {
            slot.bounds = bounds;
            slot.pane.set_bounds(bounds);
        }
        for (divider, bounds) in self.dividers.iter_mut().zip(arrangement.dividers) {
            divider.set_bounds(bounds);
        }

        tracing::trace!(
            orientation = ?self.orientation(),
            width = self.bounds.width,
            height = self.bounds.height,
            panes = self.slots.len(),
            "Split pane laid out"
        );
    }

    /// Divider under `point`, in this pane's coordinates
    pub fn divider_at(&self, point: Point) -> Option<usize> {
        self.dividers.iter().position(|d| d.contains(point))
    }

    /// Begin dragging divider `index` from `point`.
    ///
    /// Dragging away from a collapsed neighbour reopens it.
    pub fn press_divider(&mut self, index: usize, point: Point) -> Result<(), SplitError> {
        self.check_divider(index)?;
        let orientation = self.orientation();
        let leading = orientation.length(self.slots[index].bounds.size());
        let trailing = orientation.length(self.slots[index + 1].bounds.size());
        self.dividers[index].press(point, leading, trailing);
        tracing::debug!(divider = index, leading, trailing, "Divider drag started");
        Ok(())
    }

    /// Move divider `index` to follow the pointer at `point`.
    ///
    /// A no-op unless the divider was pressed.
    pub fn drag_divider(&mut self, index: usize, point: Point) -> Result<(), SplitError> {
        self.check_divider(index)?;
        let Some((leading, trailing)) = self.dividers[index].drag_to(point) else {
            return Ok(());
        };
        self.resize_neighbours(index, leading, trailing);
        self.relayout();
        Ok(())
    }

    pub fn release_divider(&mut self, index: usize) -> Result<(), SplitError> {
        self.check_divider(index)?;
        if self.dividers[index].is_dragging() {
            self.dividers[index].release();
            tracing::debug!(divider = index, "Divider drag finished");
        }
        Ok(())
    }

    /// Single click on divider `index`.
    ///
    /// Toggles collapse of the pane on the divider's quick-hide side and
    /// returns the new collapsed state, or `None` if the divider has no
    /// quick-hide.
    pub fn click_divider(&mut self, index: usize) -> Result<Option<bool>, SplitError> {
        self.check_divider(index)?;
        let target = match self.dividers[index].quick_hide() {
            QuickHide::None => return Ok(None),
            QuickHide::Leading => index,
            QuickHide::Trailing => index + 1,
        };

        let slot = &mut self.slots[target];
        slot.collapsed = !slot.collapsed;
        let collapsed = slot.collapsed;
        tracing::debug!(divider = index, pane = target, collapsed, "Quick-hide toggled");
        self.relayout();
        Ok(Some(collapsed))
    }

    fn new_divider(&self) -> Divider {
        Divider::new(self.orientation(), self.layout.divider_thickness())
    }

    fn check_divider(&self, index: usize) -> Result<(), SplitError> {
        let count = self.dividers.len();
        if index < count {
            Ok(())
        } else {
            Err(SplitError::InvalidDividerIndex { index, count })
        }
    }

    fn take_slot(&mut self, index: usize) -> Pane<C> {
        let slot = self.slots.remove(index);
        if !self.dividers.is_empty() {
            // Trailing divider, or the leading one when removing the last pane.
            let divider_index = index.min(self.dividers.len() - 1);
            self.dividers.remove(divider_index);
        }
        tracing::debug!(index, panes = self.slots.len(), "Removed pane");
        self.structure_changed();
        slot.pane
    }

    /// Re-derive quick-hide sides, drop stale drags and lay out again
    fn structure_changed(&mut self) {
        for divider in &mut self.dividers {
            divider.set_quick_hide(QuickHide::None);
            divider.release();
        }

        let count = self.dividers.len();
        if self.quick_hide && count >= 2 {
            self.dividers[0].set_quick_hide(QuickHide::Leading);
            self.dividers[count - 1].set_quick_hide(QuickHide::Trailing);
        }

        self.relayout();
    }

    /// Give the panes either side of divider `index` their dragged extents.
    ///
    /// Fixed panes take the new pixel size. When both neighbours are
    /// proportional every visible proportional pane is re-weighted to its
    /// current extent first, so panes away from the divider stay put.
    fn resize_neighbours(&mut self, index: usize, leading: i32, trailing: i32) {
        let both_proportional =
            !self.slots[index].spec.is_fixed() && !self.slots[index + 1].spec.is_fixed();

        if both_proportional {
            let orientation = self.orientation();
            for slot in self.slots.iter_mut() {
                if !slot.section().hidden && !slot.spec.is_fixed() {
                    let extent = orientation.length(slot.bounds.size()).max(1);
                    slot.spec = SizeSpec::Proportional(extent as u32);
                }
            }
        }

        for (slot_index, extent) in [(index, leading), (index + 1, trailing)] {
            let slot = &mut self.slots[slot_index];
            slot.collapsed = false;
            slot.spec = match slot.spec {
                SizeSpec::Fixed(_) => SizeSpec::Fixed(extent.max(0) as u32),
                SizeSpec::Proportional(_) if both_proportional => {
                    SizeSpec::Proportional(extent.max(1) as u32)
                }
                spec => spec,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Panel;

    fn panel(id: u64) -> Pane<Panel> {
        Pane::Component(Panel::new(id))
    }

    fn widths(split: &MultipleSplitPane<Panel>) -> Vec<i32> {
        (0..split.pane_count())
            .map(|i| split.pane_bounds(i).unwrap().width)
            .collect()
    }

    fn ids(split: &MultipleSplitPane<Panel>) -> Vec<Option<u64>> {
        split
            .panes()
            .map(|p| p.as_component().map(|c| c.id().0))
            .collect()
    }

    fn assert_structure(split: &MultipleSplitPane<Panel>) {
        assert_eq!(
            split.divider_count(),
            split.pane_count().saturating_sub(1)
        );
        for (physical, (child, _)) in split.children().enumerate() {
            assert_eq!(child.physical(), physical);
            match child {
                ChildIndex::Pane(i) => assert_eq!(physical, 2 * i),
                ChildIndex::Divider(i) => assert_eq!(physical, 2 * i + 1),
            }
        }
    }

    fn filled(count: u64, width: i32) -> MultipleSplitPane<Panel> {
        let mut split = MultipleSplitPane::new(count as usize, Orientation::Horizontal);
        split.set_bounds(Rect::new(0, 0, width, 100));
        for i in 0..count {
            split
                .insert_pane(i as usize, panel(i + 1), SizeSpec::default())
                .unwrap();
        }
        split
    }

    #[test]
    fn construct_creates_dividers_between_slots() {
        let split = MultipleSplitPane::<Panel>::new(3, Orientation::Horizontal);
        assert_eq!(split.pane_count(), 3);
        assert_eq!(split.divider_count(), 2);
        assert!(split.panes().all(Pane::is_empty));

        let empty = MultipleSplitPane::<Panel>::new(0, Orientation::Vertical);
        assert_eq!(empty.pane_count(), 0);
        assert_eq!(empty.divider_count(), 0);

        let single = MultipleSplitPane::<Panel>::new(1, Orientation::Vertical);
        assert_eq!(single.divider_count(), 0);
    }

    #[test]
    fn quick_hide_only_on_extreme_dividers() {
        let split = MultipleSplitPane::<Panel>::new(5, Orientation::Horizontal);
        let sides: Vec<QuickHide> = split.dividers().iter().map(Divider::quick_hide).collect();
        assert_eq!(
            sides,
            vec![
                QuickHide::Leading,
                QuickHide::None,
                QuickHide::None,
                QuickHide::Trailing
            ]
        );

        let two = MultipleSplitPane::<Panel>::new(2, Orientation::Horizontal);
        assert_eq!(two.dividers()[0].quick_hide(), QuickHide::None);

        let disabled =
            MultipleSplitPane::<Panel>::new(3, Orientation::Horizontal).with_quick_hide(false);
        assert!(disabled
            .dividers()
            .iter()
            .all(|d| d.quick_hide() == QuickHide::None));
    }

    #[test]
    fn three_panes_on_300_pixels() {
        let split = filled(3, 300);
        assert_eq!(split.pane_count(), 3);
        assert_eq!(widths(&split), vec![97, 97, 98]);
        assert_eq!(split.divider(0).unwrap().bounds(), Rect::new(97, 0, 4, 100));
        assert_eq!(split.divider(1).unwrap().bounds(), Rect::new(198, 0, 4, 100));

        let last = split.pane(2).unwrap().as_component().unwrap();
        assert_eq!(last.bounds, Rect::new(202, 0, 98, 100));
    }

    #[test]
    fn placeholders_share_space_before_any_insert() {
        let mut split = MultipleSplitPane::<Panel>::new(3, Orientation::Horizontal);
        split.set_bounds(Rect::new(0, 0, 300, 100));

        assert_eq!(widths(&split), vec![97, 97, 98]);
        assert_eq!(split.divider(0).unwrap().bounds(), Rect::new(97, 0, 4, 100));
        assert_eq!(split.divider(1).unwrap().bounds(), Rect::new(198, 0, 4, 100));
    }

    #[test]
    fn collapsed_slots_take_no_space() {
        let mut split = MultipleSplitPane::new(3, Orientation::Horizontal);
        split.set_bounds(Rect::new(0, 0, 300, 100));
        split.insert_pane(1, panel(7), SizeSpec::default()).unwrap();
        split.set_collapsed(0, true).unwrap();
        split.set_collapsed(2, true).unwrap();

        assert_eq!(widths(&split), vec![0, 292, 0]);
        assert_eq!(split.divider(0).unwrap().bounds().x, 0);
        assert_eq!(split.divider(1).unwrap().bounds().x, 296);
    }

    #[test]
    fn oversized_fixed_pane_saturates_instead_of_overflowing() {
        let mut split = MultipleSplitPane::new(0, Orientation::Horizontal);
        split.set_bounds(Rect::new(0, 0, 300, 100));
        split.insert_pane(0, panel(1), SizeSpec::Fixed(u32::MAX)).unwrap();
        split.insert_pane(1, panel(2), SizeSpec::Fixed(10)).unwrap();

        assert_eq!(widths(&split), vec![i32::MAX, 10]);
        assert_eq!(split.divider(0).unwrap().bounds().x, i32::MAX);
        assert_eq!(split.pane_bounds(1).unwrap().x, i32::MAX);
    }

    #[test]
    fn insert_into_occupied_slot_shifts() {
        let mut split = filled(3, 300);
        split.insert_pane(1, panel(9), SizeSpec::default()).unwrap();

        assert_eq!(ids(&split), vec![Some(1), Some(9), Some(2), Some(3)]);
        assert_eq!(split.divider_count(), 3);
        assert_structure(&split);

        split.insert_pane(4, panel(10), SizeSpec::default()).unwrap();
        assert_eq!(split.pane_count(), 5);
        assert_structure(&split);
        assert_eq!(split.dividers()[0].quick_hide(), QuickHide::Leading);
        assert_eq!(split.dividers()[3].quick_hide(), QuickHide::Trailing);
        assert_eq!(split.dividers()[2].quick_hide(), QuickHide::None);
    }

    #[test]
    fn insert_into_empty_pane_adds_no_divider() {
        let mut split = MultipleSplitPane::new(0, Orientation::Horizontal);
        split.insert_pane(0, panel(1), SizeSpec::default()).unwrap();
        assert_eq!(split.pane_count(), 1);
        assert_eq!(split.divider_count(), 0);
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut split = filled(2, 200);
        let before = widths(&split);

        let err = split.insert_pane(3, panel(5), SizeSpec::default()).unwrap_err();
        assert_eq!(err, SplitError::InvalidPaneIndex { index: 3, count: 2 });
        assert_eq!(split.pane_count(), 2);
        assert_eq!(widths(&split), before);
    }

    #[test]
    fn remove_takes_trailing_divider() {
        let mut split = filled(3, 300);
        let removed = split.remove_pane(ComponentId(1)).unwrap();
        assert_eq!(removed.id(), ComponentId(1));

        assert_eq!(ids(&split), vec![Some(2), Some(3)]);
        assert_eq!(split.divider_count(), 1);
        assert_eq!(widths(&split), vec![148, 148]);
        assert_structure(&split);
    }

    #[test]
    fn remove_last_takes_leading_divider() {
        let mut split = filled(3, 300);
        split.remove_pane(ComponentId(3)).unwrap();
        assert_eq!(ids(&split), vec![Some(1), Some(2)]);
        assert_eq!(split.divider_count(), 1);

        split.remove_pane(ComponentId(2)).unwrap();
        split.remove_pane(ComponentId(1)).unwrap();
        assert_eq!(split.pane_count(), 0);
        assert_eq!(split.divider_count(), 0);
    }

    #[test]
    fn removing_unknown_component_changes_nothing() {
        let mut split = filled(3, 300);
        let before: Vec<_> = split.children().collect();

        assert!(split.remove_pane(ComponentId(42)).is_none());
        assert_eq!(split.children().collect::<Vec<_>>(), before);
    }

    #[test]
    fn remove_at_checks_index() {
        let mut split = filled(2, 200);
        assert_eq!(
            split.remove_pane_at(2).unwrap_err(),
            SplitError::InvalidPaneIndex { index: 2, count: 2 }
        );
        let pane = split.remove_pane_at(0).unwrap();
        assert_eq!(pane.into_component().unwrap().id(), ComponentId(1));
    }

    #[test]
    fn structure_holds_over_mixed_edits() {
        let mut split = MultipleSplitPane::new(2, Orientation::Vertical);
        split.set_bounds(Rect::new(0, 0, 50, 500));
        let mut next = 1;
        for step in 0..30usize {
            if step % 3 == 2 {
                let victim = split
                    .panes()
                    .find_map(|p| p.as_component().map(|c: &Panel| c.id()));
                if let Some(id) = victim {
                    split.remove_pane(id);
                }
            } else {
                let index = step % (split.pane_count() + 1);
                split.insert_pane(index, panel(next), SizeSpec::default()).unwrap();
                next += 1;
            }
            assert_structure(&split);

            let heights: i32 = (0..split.pane_count())
                .map(|i| split.pane_bounds(i).unwrap().height)
                .sum();
            let dividers = split.divider_count() as i32 * 4;
            assert!(split.pane_count() >= 2);
            assert_eq!(heights + dividers, 500);
        }
    }

    #[test]
    fn vacate_keeps_slot_and_divider() {
        let mut split = filled(3, 300);
        let taken = split.vacate(ComponentId(2)).unwrap();
        assert_eq!(taken.id(), ComponentId(2));
        assert_eq!(split.pane_count(), 3);
        assert_eq!(split.divider_count(), 2);
        assert!(split.pane(1).unwrap().is_empty());
        assert_eq!(widths(&split), vec![97, 97, 98]);
    }

    #[test]
    fn replace_returns_previous_content() {
        let mut split = filled(3, 300);
        let old = split.replace_pane(1, panel(8), SizeSpec::Fixed(50)).unwrap();
        assert_eq!(old.into_component().unwrap().id(), ComponentId(2));
        assert_eq!(widths(&split), vec![121, 50, 121]);
        assert!(split.replace_pane(3, panel(9), SizeSpec::default()).is_err());
    }

    #[test]
    fn drag_between_proportional_panes() {
        let mut split = filled(3, 300);
        split.press_divider(0, Point::new(98, 50)).unwrap();
        split.drag_divider(0, Point::new(128, 50)).unwrap();
        assert_eq!(widths(&split), vec![127, 67, 98]);

        split.drag_divider(0, Point::new(-400, 50)).unwrap();
        assert_eq!(widths(&split), vec![0, 194, 98]);

        split.release_divider(0).unwrap();
        assert!(!split.divider(0).unwrap().is_dragging());
        split.drag_divider(0, Point::new(200, 50)).unwrap();
        assert_eq!(widths(&split), vec![0, 194, 98]);
    }

    #[test]
    fn drag_resizes_fixed_neighbour() {
        let mut split = MultipleSplitPane::new(0, Orientation::Horizontal);
        split.set_bounds(Rect::new(0, 0, 404, 100));
        split.insert_pane(0, panel(1), SizeSpec::Fixed(100)).unwrap();
        split.insert_pane(1, panel(2), SizeSpec::default()).unwrap();

        split.press_divider(0, Point::new(101, 10)).unwrap();
        split.drag_divider(0, Point::new(151, 10)).unwrap();
        assert_eq!(split.size_spec(0), Some(SizeSpec::Fixed(150)));
        assert_eq!(widths(&split), vec![150, 250]);

        split.set_bounds(Rect::new(0, 0, 504, 100));
        assert_eq!(widths(&split), vec![150, 350]);
    }

    #[test]
    fn drag_out_of_collapsed_pane_reopens_it() {
        let mut split = filled(3, 300);
        split.click_divider(0).unwrap();
        assert_eq!(widths(&split), vec![0, 146, 146]);

        split.press_divider(0, Point::new(1, 50)).unwrap();
        split.drag_divider(0, Point::new(51, 50)).unwrap();
        assert!(!split.is_collapsed(0));
        assert_eq!(widths(&split), vec![50, 96, 146]);
    }

    #[test]
    fn quick_hide_click_toggles_extreme_panes() {
        let mut split = filled(3, 300);

        assert_eq!(split.click_divider(0).unwrap(), Some(true));
        assert!(split.is_collapsed(0));
        assert_eq!(widths(&split), vec![0, 146, 146]);

        assert_eq!(split.click_divider(1).unwrap(), Some(true));
        assert_eq!(widths(&split), vec![0, 292, 0]);

        assert_eq!(split.click_divider(0).unwrap(), Some(false));
        assert_eq!(widths(&split), vec![146, 146, 0]);
    }

    #[test]
    fn click_on_plain_divider_does_nothing() {
        let mut split = filled(2, 200);
        assert_eq!(split.click_divider(0).unwrap(), None);
        assert_eq!(
            split.click_divider(1).unwrap_err(),
            SplitError::InvalidDividerIndex { index: 1, count: 1 }
        );
    }

    #[test]
    fn divider_hit_testing() {
        let split = filled(3, 300);
        assert_eq!(split.divider_at(Point::new(99, 50)), Some(0));
        assert_eq!(split.divider_at(Point::new(200, 0)), Some(1));
        assert_eq!(split.divider_at(Point::new(150, 50)), None);
    }

    #[test]
    fn nested_split_lays_out_in_its_own_space() {
        let mut inner = MultipleSplitPane::new(2, Orientation::Vertical);
        inner.insert_pane(0, panel(10), SizeSpec::default()).unwrap();
        inner.insert_pane(1, panel(11), SizeSpec::default()).unwrap();

        let mut outer = MultipleSplitPane::new(0, Orientation::Horizontal);
        outer.insert_pane(0, panel(1), SizeSpec::Fixed(100)).unwrap();
        outer.insert_pane(1, inner.into(), SizeSpec::default()).unwrap();
        outer.set_bounds(Rect::new(0, 0, 304, 204));

        let inner = outer.pane(1).unwrap().as_split().unwrap();
        assert_eq!(inner.bounds(), Rect::new(104, 0, 200, 204));
        let bottom = inner.pane(1).unwrap().as_component().unwrap();
        assert_eq!(bottom.bounds, Rect::new(0, 104, 200, 100));
    }

    #[test]
    fn insets_shrink_usable_area() {
        let mut split = filled(2, 200).with_insets(Insets::uniform(10));
        split.relayout();
        assert_eq!(split.pane_bounds(0), Some(Rect::new(10, 10, 88, 80)));
        assert_eq!(split.pane_bounds(1), Some(Rect::new(102, 10, 88, 80)));
    }
}
