//! Floating-point geometry shared by the fitting and layer code.
//!
//! Coordinates are in points with the origin at the top-left corner and
//! y growing downwards.

use serde::{Deserialize, Serialize};

/// Width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Round both dimensions to whole pixels, never below 1.
    pub fn to_pixels(self) -> (u32, u32) {
        (to_pixel_extent(self.width), to_pixel_extent(self.height))
    }
}

fn to_pixel_extent(v: f64) -> u32 {
    if !v.is_finite() {
        return 1;
    }
    // `as` saturates for values beyond u32::MAX
    (v.round() as u32).max(1)
}

/// A location in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Translate by the given offset.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width,
            self.size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_to_pixels_rounds_and_clamps() {
        assert_eq!(Size::new(199.6, 100.4).to_pixels(), (200, 100));
        assert_eq!(Size::new(0.0, 0.2).to_pixels(), (1, 1));
        assert_eq!(Size::new(f64::NAN, f64::INFINITY).to_pixels(), (1, 1));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_x(), 40.0);
        assert_eq!(r.max_y(), 60.0);
        assert_eq!(r.offset(-10.0, 5.0), Rect::new(0.0, 25.0, 30.0, 40.0));
    }
}
