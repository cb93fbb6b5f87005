// ABOUTME: Axis-relative geometry for horizontal and vertical arrangements.
// ABOUTME: Lets one layout algorithm serve both split directions.

use serde::{Deserialize, Serialize};

use crate::geometry::{Insets, Point, Rect, Size};

/// The main axis along which panes are laid out.
///
/// `Horizontal` places panes left to right, so "length" is width and
/// "breadth" is height. `Vertical` stacks panes top to bottom and swaps the
/// two. Every operation here is a pure function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Extent of `size` along the main axis
    pub fn length(self, size: Size) -> i32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Extent of `size` along the cross axis
    pub fn breadth(self, size: Size) -> i32 {
        match self {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    pub fn set_length(self, size: Size, length: i32) -> Size {
        self.new_size(length, self.breadth(size))
    }

    pub fn set_breadth(self, size: Size, breadth: i32) -> Size {
        self.new_size(self.length(size), breadth)
    }

    /// Coordinate of `point` along the main axis
    pub fn position(self, point: Point) -> i32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Coordinate of `point` along the cross axis
    pub fn offset(self, point: Point) -> i32 {
        match self {
            Orientation::Horizontal => point.y,
            Orientation::Vertical => point.x,
        }
    }

    pub fn new_point(self, position: i32, offset: i32) -> Point {
        match self {
            Orientation::Horizontal => Point::new(position, offset),
            Orientation::Vertical => Point::new(offset, position),
        }
    }

    pub fn new_size(self, length: i32, breadth: i32) -> Size {
        match self {
            Orientation::Horizontal => Size::new(length, breadth),
            Orientation::Vertical => Size::new(breadth, length),
        }
    }

    pub fn new_rect(self, position: i32, offset: i32, length: i32, breadth: i32) -> Rect {
        Rect::from_origin_size(
            self.new_point(position, offset),
            self.new_size(length, breadth),
        )
    }

    /// Move `point` forward along the main axis by `extent` plus `gap`.
    /// The cross-axis coordinate is left alone.
    pub fn add_to_position(self, point: Point, extent: i32, gap: i32) -> Point {
        self.new_point(self.position(point) + extent + gap, self.offset(point))
    }

    pub fn subtract_from_position(self, point: Point, extent: i32, gap: i32) -> Point {
        self.new_point(self.position(point) - extent - gap, self.offset(point))
    }

    /// First main-axis coordinate inside the insets
    pub fn first_usable_position(self, insets: Insets) -> i32 {
        match self {
            Orientation::Horizontal => insets.left,
            Orientation::Vertical => insets.top,
        }
    }

    /// First cross-axis coordinate inside the insets
    pub fn first_usable_offset(self, insets: Insets) -> i32 {
        match self {
            Orientation::Horizontal => insets.top,
            Orientation::Vertical => insets.left,
        }
    }

    /// Main-axis coordinate just past the last usable pixel
    pub fn last_usable_position(self, size: Size, insets: Insets) -> i32 {
        match self {
            Orientation::Horizontal => size.width - insets.right,
            Orientation::Vertical => size.height - insets.bottom,
        }
    }

    pub fn usable_length(self, size: Size, insets: Insets) -> i32 {
        (self.last_usable_position(size, insets) - self.first_usable_position(insets)).max(0)
    }

    pub fn usable_breadth(self, size: Size, insets: Insets) -> i32 {
        self.perpendicular().usable_length(size, insets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_breadth_swap() {
        let size = Size::new(300, 100);
        assert_eq!(Orientation::Horizontal.length(size), 300);
        assert_eq!(Orientation::Horizontal.breadth(size), 100);
        assert_eq!(Orientation::Vertical.length(size), 100);
        assert_eq!(Orientation::Vertical.breadth(size), 300);
    }

    #[test]
    fn add_to_position_moves_main_axis_only() {
        let start = Point::new(5, 7);
        assert_eq!(
            Orientation::Horizontal.add_to_position(start, 10, 2),
            Point::new(17, 7)
        );
        assert_eq!(
            Orientation::Vertical.add_to_position(start, 10, 2),
            Point::new(5, 19)
        );
        assert_eq!(
            Orientation::Vertical.subtract_from_position(Point::new(5, 19), 10, 2),
            start
        );
    }

    #[test]
    fn usable_range_respects_insets() {
        let size = Size::new(200, 100);
        let insets = Insets::new(1, 2, 3, 4);
        let h = Orientation::Horizontal;
        assert_eq!(h.first_usable_position(insets), 2);
        assert_eq!(h.first_usable_offset(insets), 1);
        assert_eq!(h.last_usable_position(size, insets), 196);
        assert_eq!(h.usable_length(size, insets), 194);
        assert_eq!(h.usable_breadth(size, insets), 96);

        let v = Orientation::Vertical;
        assert_eq!(v.first_usable_position(insets), 1);
        assert_eq!(v.first_usable_offset(insets), 2);
        assert_eq!(v.last_usable_position(size, insets), 97);
    }

    #[test]
    fn new_rect_maps_axes() {
        assert_eq!(
            Orientation::Vertical.new_rect(10, 0, 50, 300),
            Rect::new(0, 10, 300, 50)
        );
        assert_eq!(Orientation::Horizontal.perpendicular(), Orientation::Vertical);
    }
}
