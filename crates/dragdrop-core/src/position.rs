//! Pointer position relative to a drop target.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Pointer offset and target dimensions captured at a drag-over or drop.
///
/// `width`/`height` are the target's content-box size; `x`/`y` the pointer
/// offset from the content-box origin. The offset may be negative or exceed
/// the box when the pointer sits on the padding or border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// Layout axis used when splitting a target in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which half of a target the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    /// Left half (horizontal) or top half (vertical).
    Before,
    /// Right half (horizontal) or bottom half (vertical).
    After,
}

impl Position {
    /// Create a new position.
    pub fn new(width: f64, height: f64, x: f64, y: f64) -> Self {
        Self { width, height, x, y }
    }

    /// Pointer offset as a point.
    pub fn offset(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Content-box size of the target.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the pointer lies within the content box (edges inclusive).
    pub fn is_inside(&self) -> bool {
        let rect = Rect::from_origin_size(Point::ZERO, self.size());
        let p = self.offset();
        p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
    }

    /// Pointer offset normalised by the box size.
    ///
    /// Returns `None` for a zero-sized box. Values are not clamped.
    pub fn fraction(&self) -> Option<Point> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Point::new(self.x / self.width, self.y / self.height))
    }

    /// Which half of the target the pointer is over along `axis`.
    ///
    /// The exact midpoint counts as `After`.
    pub fn half(&self, axis: Axis) -> Half {
        let (offset, extent) = match axis {
            Axis::Horizontal => (self.x, self.width),
            Axis::Vertical => (self.y, self.height),
        };
        if offset < extent / 2.0 {
            Half::Before
        } else {
            Half::After
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside() {
        assert!(Position::new(100.0, 50.0, 10.0, 10.0).is_inside());
        assert!(Position::new(100.0, 50.0, 100.0, 50.0).is_inside());
        assert!(!Position::new(100.0, 50.0, -2.0, 10.0).is_inside());
        assert!(!Position::new(100.0, 50.0, 10.0, 51.0).is_inside());
    }

    #[test]
    fn test_fraction() {
        let frac = Position::new(100.0, 50.0, 25.0, 10.0).fraction().unwrap();
        assert!((frac.x - 0.25).abs() < f64::EPSILON);
        assert!((frac.y - 0.2).abs() < f64::EPSILON);

        assert!(Position::new(0.0, 50.0, 0.0, 0.0).fraction().is_none());
    }

    #[test]
    fn test_half() {
        let pos = Position::new(100.0, 40.0, 30.0, 30.0);
        assert_eq!(pos.half(Axis::Horizontal), Half::Before);
        assert_eq!(pos.half(Axis::Vertical), Half::After);

        // Midpoint falls after
        assert_eq!(Position::new(100.0, 40.0, 50.0, 0.0).half(Axis::Horizontal), Half::After);
    }
}
