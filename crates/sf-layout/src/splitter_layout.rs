// ABOUTME: Geometry engine for one level of split pane.
// ABOUTME: Distributes the main-axis extent over panes and dividers and maps child indices.

use sf_core::{Insets, Orientation, Rect, Size, SizeSpec};

/// Position of a child in the interleaved pane/divider sequence.
///
/// Pane `i` sits at physical index `2i` and divider `i` at `2i + 1`, so
/// the physical sequence always reads pane, divider, pane, ..., pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildIndex {
    Pane(usize),
    Divider(usize),
}

impl ChildIndex {
    pub fn physical(self) -> usize {
        match self {
            ChildIndex::Pane(i) => 2 * i,
            ChildIndex::Divider(i) => 2 * i + 1,
        }
    }

    pub fn from_physical(physical: usize) -> Self {
        if physical % 2 == 0 {
            ChildIndex::Pane(physical / 2)
        } else {
            ChildIndex::Divider(physical / 2)
        }
    }
}

/// What the layout needs to know about one pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub spec: SizeSpec,
    /// Collapsed panes take no space
    pub hidden: bool,
}

impl Section {
    pub fn new(spec: SizeSpec) -> Self {
        Self { spec, hidden: false }
    }

    pub fn hidden(spec: SizeSpec) -> Self {
        Self { spec, hidden: true }
    }
}

/// Computed bounds for every pane and divider of one split pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arrangement {
    pub panes: Vec<Rect>,
    pub dividers: Vec<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitterLayout {
    orientation: Orientation,
    divider_thickness: u32,
    insets: Insets,
}

impl SplitterLayout {
    pub fn new(orientation: Orientation, divider_thickness: u32) -> Self {
        Self {
            orientation,
            divider_thickness,
            insets: Insets::default(),
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn divider_thickness(&self) -> u32 {
        self.divider_thickness
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Split `length` pixels between `sections` and the dividers between them.
    ///
    /// Fixed sections get their pixel count and proportional sections share
    /// what is left by weight.
    ///
    /// Rounding leftovers go one pixel each to the trailing proportional
    /// sections rather than all to the last one, so a single leftover pixel
    /// lands on the last section and equal weights never differ by more
    /// than one pixel. With no proportional section the last visible one
    /// absorbs any slack. When fixed sections and dividers do not fit,
    /// proportional sections get zero and the result overflows `length`.
    pub fn extents(&self, length: i32, sections: &[Section]) -> Vec<i32> {
        let divider_count = sections.len().saturating_sub(1) as i64;
        let divider_total = divider_count * i64::from(self.divider_thickness);

        let mut fixed_total: i64 = 0;
        let mut weight_total: i64 = 0;
        for section in sections.iter().filter(|s| !s.hidden) {
            match section.spec {
                SizeSpec::Fixed(pixels) => fixed_total += i64::from(pixels),
                SizeSpec::Proportional(_) => weight_total += i64::from(section.spec.weight()),
            }
        }

        let slack = i64::from(length) - fixed_total - divider_total;
        if slack < 0 {
            tracing::trace!(
                length,
                fixed_total,
                divider_total,
                "Container too small for fixed panes, proportional panes collapse"
            );
        }
        let available = slack.max(0);

        let mut extents: Vec<i64> = sections
            .iter()
            .map(|section| match (section.hidden, section.spec) {
                (true, _) => 0,
                (false, SizeSpec::Fixed(pixels)) => i64::from(pixels),
                (false, spec @ SizeSpec::Proportional(_)) => {
                    available * i64::from(spec.weight()) / weight_total
                }
            })
            .collect();

        let proportional: Vec<usize> = sections
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.hidden && !s.spec.is_fixed())
            .map(|(i, _)| i)
            .collect();

        if proportional.is_empty() {
            if let Some(last) = sections.iter().rposition(|s| !s.hidden) {
                extents[last] += slack.max(0);
            }
        } else {
            // Flooring loses less than one pixel per pane.
            let shared: i64 = proportional.iter().map(|&i| extents[i]).sum();
            let remainder = (available - shared) as usize;
            for &i in proportional.iter().rev().take(remainder) {
                extents[i] += 1;
            }
        }

        extents
            .into_iter()
            .map(|extent| extent.clamp(0, i64::from(i32::MAX)) as i32)
            .collect()
    }

    /// Place panes and dividers consecutively inside a container of `size`.
    ///
    /// Bounds are relative to the container's own origin. Every child fills
    /// the usable breadth. Positions saturate at `i32::MAX` when oversized
    /// fixed sections overflow the container.
    pub fn arrange(&self, size: Size, sections: &[Section]) -> Arrangement {
        let orientation = self.orientation;
        let length = orientation.usable_length(size, self.insets);
        let breadth = orientation.usable_breadth(size, self.insets);
        let offset = orientation.first_usable_offset(self.insets);
        let thickness = self.divider_thickness.min(i32::MAX as u32) as i32;

        let extents = self.extents(length, sections);
        let mut arrangement = Arrangement {
            panes: Vec::with_capacity(extents.len()),
            dividers: Vec::with_capacity(extents.len().saturating_sub(1)),
        };

        let mut position = orientation.first_usable_position(self.insets);
        for (i, extent) in extents.iter().enumerate() {
            arrangement
                .panes
                .push(orientation.new_rect(position, offset, *extent, breadth));
            position = position.saturating_add(*extent);

            if i + 1 < extents.len() {
                arrangement
                    .dividers
                    .push(orientation.new_rect(position, offset, thickness, breadth));
                position = position.saturating_add(thickness);
            }
        }

        arrangement
    }
}
