use super::{Point2, Vector2};

/// Determinant line-line parameters for a segment and a ray.
///
/// Both are treated as infinite lines: one through `seg_start`/`seg_end`, one
/// through `ray_origin`/`ray_aim`. Returns `(t, u)` where `t` locates the
/// crossing along the segment (0 = start, 1 = end) and `u` along the ray
/// (0 = origin, 1 = aim). Returns `None` when the determinant is exactly zero
/// (parallel or coincident lines).
#[must_use]
#[allow(clippy::float_cmp, clippy::similar_names)]
pub fn ray_segment_params(
    seg_start: &Point2,
    seg_end: &Point2,
    ray_origin: &Point2,
    ray_aim: &Point2,
) -> Option<(f64, f64)> {
    let (x1, y1) = (seg_start.x, seg_start.y);
    let (x2, y2) = (seg_end.x, seg_end.y);
    let (x3, y3) = (ray_origin.x, ray_origin.y);
    let (x4, y4) = (ray_aim.x, ray_aim.y);

    let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if d == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / d;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / d;
    Some((t, u))
}

/// Returns `true` when `(t, u)` describes a crossing strictly inside the
/// segment and on the forward half-line of the ray.
///
/// `u` has no upper bound: the aim point only fixes the direction.
#[must_use]
pub fn is_forward_crossing(t: f64, u: f64) -> bool {
    t > 0.0 && t < 1.0 && u > 0.0
}

/// Intersection of a ray (half-line) with a bounded segment.
///
/// Segment endpoints are excluded, as is the ray origin itself.
#[must_use]
pub fn ray_segment_intersect_2d(
    seg_start: &Point2,
    seg_end: &Point2,
    ray_origin: &Point2,
    ray_aim: &Point2,
) -> Option<Point2> {
    let (t, u) = ray_segment_params(seg_start, seg_end, ray_origin, ray_aim)?;
    if is_forward_crossing(t, u) {
        Some(point_at(seg_start, &(seg_end - seg_start), t))
    } else {
        None
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}
