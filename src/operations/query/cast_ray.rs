use super::intersect::{crossing, RayHit};
use crate::geometry::Ray;
use crate::registry::SegmentStore;

/// Which crossings a ray scan reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitPolicy {
    /// Every crossed segment yields its own hit, in registry order.
    #[default]
    All,
    /// Only the crossing closest to the ray origin.
    Nearest,
}

/// Tests a ray against every segment of a store.
pub struct CastRay {
    ray: Ray,
    policy: HitPolicy,
}

impl CastRay {
    /// Creates a new `CastRay` query reporting all hits.
    #[must_use]
    pub fn new(ray: Ray) -> Self {
        Self {
            ray,
            policy: HitPolicy::default(),
        }
    }

    /// Selects which crossings are returned.
    #[must_use]
    pub fn with_policy(mut self, policy: HitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Executes the scan.
    ///
    /// With [`HitPolicy::Nearest`] ties keep the earlier segment.
    #[must_use]
    pub fn execute(&self, store: &SegmentStore) -> Vec<RayHit> {
        let hits = store.iter().filter_map(|(id, segment)| {
            crossing(&self.ray, segment).map(|(point, t, u)| RayHit {
                segment: id,
                point,
                t,
                u,
            })
        });

        match self.policy {
            HitPolicy::All => hits.collect(),
            HitPolicy::Nearest => hits
                .fold(None, |best: Option<RayHit>, hit| match best {
                    Some(b) if b.u <= hit.u => Some(b),
                    _ => Some(hit),
                })
                .into_iter()
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Segment;
    use crate::math::Point2;

    fn walls() -> SegmentStore {
        let mut store = SegmentStore::new();
        // Far wall first so registry order differs from distance order.
        store.push(Segment::new(Point2::new(30.0, -5.0), Point2::new(30.0, 5.0)));
        store.push(Segment::new(Point2::new(-4.0, -5.0), Point2::new(-4.0, 5.0)));
        store.push(Segment::new(Point2::new(12.0, 5.0), Point2::new(12.0, -5.0)));
        store.push(Segment::new(Point2::new(0.0, 2.0), Point2::new(50.0, 2.0)));
        store
    }

    fn ray() -> Ray {
        Ray::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0))
    }

    #[test]
    fn all_hits_in_registry_order() {
        let hits = CastRay::new(ray()).execute(&walls());
        let xs: Vec<f64> = hits.iter().map(|h| h.point.x).collect();
        assert_eq!(xs.len(), 2);
        assert_relative_eq!(xs[0], 30.0);
        assert_relative_eq!(xs[1], 12.0);
        assert_eq!(hits[0].segment.index(), 0);
        assert_eq!(hits[1].segment.index(), 2);
    }

    #[test]
    fn nearest_keeps_closest() {
        let hits = CastRay::new(ray())
            .with_policy(HitPolicy::Nearest)
            .execute(&walls());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].segment.index(), 2);
        assert_relative_eq!(hits[0].point.x, 12.0);
    }

    #[test]
    fn empty_store_has_no_hits() {
        let store = SegmentStore::new();
        assert!(CastRay::new(ray()).execute(&store).is_empty());
        assert!(CastRay::new(ray())
            .with_policy(HitPolicy::Nearest)
            .execute(&store)
            .is_empty());
    }
}
