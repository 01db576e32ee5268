use tracing::debug;

use crate::error::Result;
use crate::geometry::Segment;
use crate::grid::TileGrid;
use crate::math::Point2;
use crate::operations::build::BuildSegments;
use crate::operations::query::{HitPolicy, RayHit};
use crate::raycaster::Raycaster;
use crate::registry::SegmentStore;
use crate::render::RenderSink;

/// A grid, its world-space wall segments and the ray tested against them.
///
/// Segments are built once per grid. Each frame only the ray changes.
#[derive(Debug, Clone)]
pub struct Scene {
    grid: TileGrid,
    /// Segments that do not come from the grid, kept across rebuilds.
    extra: Vec<Segment>,
    segments: SegmentStore,
    raycaster: Raycaster,
    policy: HitPolicy,
}

impl Scene {
    /// Builds the wall segments of `grid` in world space.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment build fails.
    pub fn new(grid: TileGrid, raycaster: Raycaster) -> Result<Self> {
        let segments = BuildSegments::new().execute_world(&grid)?;
        Ok(Self {
            grid,
            extra: Vec::new(),
            segments,
            raycaster,
            policy: HitPolicy::default(),
        })
    }

    /// Adds a rectangular frame `inset` units inside a `width` x `height`
    /// viewport. Border segments precede the grid's in the registry.
    ///
    /// # Errors
    ///
    /// See [`Scene::rebuild`].
    pub fn with_border(mut self, width: f64, height: f64, inset: f64) -> Result<Self> {
        let p1 = Point2::new(inset, inset);
        let p2 = Point2::new(width - inset, inset);
        let p3 = Point2::new(width - inset, height - inset);
        let p4 = Point2::new(inset, height - inset);
        self.extra.extend([
            Segment::new(p1, p2),
            Segment::new(p2, p3),
            Segment::new(p3, p4),
            Segment::new(p4, p1),
        ]);
        let grid = self.grid.clone();
        self.rebuild(grid)?;
        Ok(self)
    }

    /// Selects which crossings `frame` reports.
    #[must_use]
    pub fn with_policy(mut self, policy: HitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the grid and rebuilds every segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment build fails; the scene is left
    /// unchanged in that case.
    pub fn rebuild(&mut self, grid: TileGrid) -> Result<()> {
        let built = BuildSegments::new().execute_world(&grid)?;
        let mut segments = SegmentStore::new();
        segments.extend(self.extra.iter().copied());
        segments.extend(built.segments().iter().copied());

        debug!(
            border = self.extra.len(),
            walls = built.len(),
            "rebuilt scene segments"
        );
        self.grid = grid;
        self.segments = segments;
        Ok(())
    }

    /// Points the ray at `point`.
    pub fn aim(&mut self, point: Point2) {
        self.raycaster.aim(point);
    }

    /// Returns the grid the segments were built from.
    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Returns the world-space segments, border first.
    #[must_use]
    pub fn segments(&self) -> &SegmentStore {
        &self.segments
    }

    /// Returns the raycaster.
    #[must_use]
    pub fn raycaster(&self) -> &Raycaster {
        &self.raycaster
    }

    /// Returns the raycaster for moving its origin.
    pub fn raycaster_mut(&mut self) -> &mut Raycaster {
        &mut self.raycaster
    }

    /// Hits of the current ray against every segment.
    #[must_use]
    pub fn frame(&self) -> Vec<RayHit> {
        self.raycaster.cast(&self.segments, self.policy)
    }

    /// Emits every segment, then a marker for each hit of the current ray.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for (_, segment) in self.segments.iter() {
            sink.draw_segment(segment);
        }
        for hit in self.frame() {
            sink.draw_hit(&hit.point);
        }
    }
}
