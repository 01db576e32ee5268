pub mod error;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod operations;
pub mod raycaster;
pub mod registry;
pub mod render;
pub mod scene;

pub use error::{Result, TilecastError};
pub use geometry::{Ray, Segment};
pub use grid::{Direction, GridLayout, Tile, TileGrid};
pub use raycaster::Raycaster;
pub use registry::{SegmentId, SegmentStore};
pub use scene::Scene;
