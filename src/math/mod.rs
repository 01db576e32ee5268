pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Used for grid alignment checks. The ray intersector deliberately tests
/// its determinant against exact zero instead.
pub const TOLERANCE: f64 = 1e-10;
