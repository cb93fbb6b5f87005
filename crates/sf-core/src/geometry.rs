// ABOUTME: Integer pixel geometry shared by the layout engine.
// ABOUTME: Points, sizes, rectangles and container insets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point expressed in a space whose origin is at `origin`
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Rectangle in container pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Space reserved inside a container's edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Grow a size by these insets
    pub fn expand(&self, size: Size) -> Size {
        Size::new(
            size.width + self.left + self.right,
            size.height + self.top + self.bottom,
        )
    }

    /// The area left inside `rect` once these insets are removed
    pub fn shrink(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x + self.left,
            rect.y + self.top,
            (rect.width - self.left - self.right).max(0),
            (rect.height - self.top - self.bottom).max(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(14, 14)));
        assert!(!rect.contains(Point::new(15, 10)));
        assert!(!rect.contains(Point::new(10, 15)));
    }

    #[test]
    fn relative_to_subtracts_origin() {
        assert_eq!(
            Point::new(30, 40).relative_to(Point::new(10, 15)),
            Point::new(20, 25)
        );
    }

    #[test]
    fn shrink_clamps_to_zero() {
        let insets = Insets::uniform(10);
        let inner = insets.shrink(Rect::new(0, 0, 15, 100));
        assert_eq!(inner, Rect::new(10, 10, 0, 80));
    }

    #[test]
    fn expand_adds_both_sides() {
        let insets = Insets::new(1, 2, 3, 4);
        assert_eq!(insets.expand(Size::new(10, 10)), Size::new(16, 14));
    }
}
