pub mod ray;
pub mod segment;

pub use ray::Ray;
pub use segment::Segment;
