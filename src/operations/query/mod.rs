mod boundary;
mod cast_ray;
mod intersect;

pub use boundary::{BoundaryEdges, UnitEdge};
pub use cast_ray::{CastRay, HitPolicy};
pub use intersect::{intersect, RayHit, RaySegmentIntersect};
