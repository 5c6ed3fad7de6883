//! Core geometry types
//!
//! Rectangles here are plain pixel values. Scaling to a monitor's DPI
//! happens before a `Rect` is built, never inside it.

/// Rectangle in pixel coordinates, relative to the parent's client area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the right edge coordinate
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Returns the bottom edge coordinate
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Returns the width and height an origin-anchored area needs to contain this rectangle
    pub fn extent_from_origin(&self) -> (i32, i32) {
        (self.right().max(0), self.bottom().max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_basic_properties() {
        let rect = Rect::new(10, 20, 100, 50);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 20);
        assert_eq!(rect.w, 100);
        assert_eq!(rect.h, 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
    }

    #[test]
    fn rect_extent_from_origin() {
        assert_eq!(Rect::new(20, 40, 200, 25).extent_from_origin(), (220, 65));
        assert_eq!(Rect::new(-50, -50, 10, 10).extent_from_origin(), (0, 0));
    }
}
