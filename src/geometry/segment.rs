use crate::math::{Point2, Vector2, TOLERANCE};

/// A directed line segment between two points.
///
/// Wall segments produced from a tile grid are always horizontal or vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// The same segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Moves both endpoints by `offset`.
    pub fn translate(&mut self, offset: &Vector2) {
        self.start += offset;
        self.end += offset;
    }

    /// Returns `true` if both endpoints share a `y` coordinate.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        (self.start.y - self.end.y).abs() < TOLERANCE
    }

    /// Returns `true` if both endpoints share an `x` coordinate.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        (self.start.x - self.end.x).abs() < TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn length_and_orientation() {
        let seg = Segment::new(Point2::new(0.0, 4.0), Point2::new(96.0, 4.0));
        assert_relative_eq!(seg.length(), 96.0);
        assert!(seg.is_horizontal());
        assert!(!seg.is_vertical());
        assert!(seg.reversed().is_horizontal());
    }

    #[test]
    fn translate_moves_both_ends() {
        let mut seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(0.0, 32.0));
        seg.translate(&Vector2::new(10.0, 20.0));
        assert_eq!(seg.start, Point2::new(10.0, 20.0));
        assert_eq!(seg.end, Point2::new(10.0, 52.0));
        assert!(seg.is_vertical());
    }
}
