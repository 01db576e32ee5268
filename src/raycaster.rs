use crate::geometry::Ray;
use crate::math::Point2;
use crate::operations::query::{CastRay, HitPolicy, RayHit};
use crate::registry::SegmentStore;

/// Holds the ray driven by pointer input.
#[derive(Debug, Clone, PartialEq)]
pub struct Raycaster {
    ray: Ray,
}

impl Raycaster {
    /// Creates a raycaster whose ray runs from `origin` towards `aim`.
    #[must_use]
    pub fn new(origin: Point2, aim: Point2) -> Self {
        Self {
            ray: Ray::new(origin, aim),
        }
    }

    /// Replaces the aim point. The point is absolute and used as-is.
    pub fn aim(&mut self, point: Point2) {
        self.ray.aim = point;
    }

    /// Moves the ray origin, keeping the aim point.
    pub fn set_origin(&mut self, origin: Point2) {
        self.ray.origin = origin;
    }

    /// Returns the current ray.
    #[must_use]
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Casts the current ray against every segment in `store`.
    #[must_use]
    pub fn cast(&self, store: &SegmentStore, policy: HitPolicy) -> Vec<RayHit> {
        CastRay::new(self.ray).with_policy(policy).execute(store)
    }
}
