//! Drawing capability handed to code that wants to show a scene.
//!
//! Nothing in the grid, builder or intersector depends on this; only
//! [`Scene::render`](crate::scene::Scene::render) emits to a sink.

use crate::geometry::Segment;
use crate::math::Point2;

/// Receives the primitives of one frame.
pub trait RenderSink {
    /// Draws one wall segment.
    fn draw_segment(&mut self, segment: &Segment);

    /// Draws a marker where the ray crosses a wall.
    fn draw_hit(&mut self, point: &Point2);
}

/// Sink that keeps everything it is given, in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    pub segments: Vec<Segment>,
    pub hits: Vec<Point2>,
}

impl RenderSink for RecordingSink {
    fn draw_segment(&mut self, segment: &Segment) {
        self.segments.push(*segment);
    }

    fn draw_hit(&mut self, point: &Point2) {
        self.hits.push(*point);
    }
}
