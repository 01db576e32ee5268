mod scratch;
mod segments;

pub use segments::{BuildSegments, Traversal};
