use crate::math::intersect_2d::point_at;
use crate::math::{Point2, Vector2};

/// A half-line from `origin` through `aim`, unbounded past `aim`.
///
/// `aim` is an absolute point, not a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point2,
    pub aim: Point2,
}

impl Ray {
    /// Creates a ray from `origin` towards the absolute point `aim`.
    #[must_use]
    pub fn new(origin: Point2, aim: Point2) -> Self {
        Self { origin, aim }
    }

    /// Vector from `origin` to `aim`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.aim - self.origin
    }

    /// Point at ray parameter `u` (0 = origin, 1 = aim).
    #[must_use]
    pub fn point_at(&self, u: f64) -> Point2 {
        point_at(&self.origin, &self.direction(), u)
    }

    /// The ray pointing the opposite way from the same origin.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, self.origin - self.direction())
    }
}
