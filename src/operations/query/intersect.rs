use crate::error::Result;
use crate::geometry::{Ray, Segment};
use crate::math::intersect_2d::{is_forward_crossing, point_at, ray_segment_params};
use crate::math::Point2;
use crate::registry::{SegmentId, SegmentStore};

/// Result of a ray crossing a registry segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The segment that was crossed.
    pub segment: SegmentId,
    /// The crossing point.
    pub point: Point2,
    /// Parameter on the segment, strictly inside `(0, 1)`.
    pub t: f64,
    /// Parameter on the ray, positive; `1` is the aim point.
    pub u: f64,
}

/// Where `ray` crosses `segment`, if it does.
///
/// The segment's endpoints and the ray's origin are excluded, and parallel
/// or coincident lines never cross. Reversing the segment gives the same
/// point; reversing the ray generally does not.
#[must_use]
pub fn intersect(ray: &Ray, segment: &Segment) -> Option<Point2> {
    crossing(ray, segment).map(|(point, _, _)| point)
}

/// Crossing point together with its `(t, u)` parameters.
pub(crate) fn crossing(ray: &Ray, segment: &Segment) -> Option<(Point2, f64, f64)> {
    let (t, u) = ray_segment_params(&segment.start, &segment.end, &ray.origin, &ray.aim)?;
    if !is_forward_crossing(t, u) {
        return None;
    }
    Some((point_at(&segment.start, &segment.direction(), t), t, u))
}

/// Tests a ray against one segment of a store.
pub struct RaySegmentIntersect {
    ray: Ray,
    segment: SegmentId,
}

impl RaySegmentIntersect {
    /// Creates a new `RaySegmentIntersect` query.
    #[must_use]
    pub fn new(ray: Ray, segment: SegmentId) -> Self {
        Self { ray, segment }
    }

    /// Executes the query, returning the hit if the ray crosses the segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not in the store.
    pub fn execute(&self, store: &SegmentStore) -> Result<Option<RayHit>> {
        let segment = store.segment(self.segment)?;
        Ok(crossing(&self.ray, segment).map(|(point, t, u)| RayHit {
            segment: self.segment,
            point,
            t,
            u,
        }))
    }
}
