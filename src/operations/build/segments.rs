use tracing::{debug, trace};

use super::scratch::BuildScratch;
use crate::error::Result;
use crate::geometry::Segment;
use crate::grid::{Direction, TileGrid};
use crate::registry::SegmentStore;

/// Order in which the builder visits tiles.
///
/// Both orders visit a tile's west and north neighbors before the tile
/// itself, which is what the merge rule relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// `y` outer, `x` inner.
    #[default]
    RowMajor,
    /// `x` outer, `y` inner.
    ColumnMajor,
}

impl Traversal {
    fn coords(self, cols: u32, rows: u32) -> impl Iterator<Item = (i64, i64)> {
        let (outer, inner) = match self {
            Traversal::RowMajor => (rows, cols),
            Traversal::ColumnMajor => (cols, rows),
        };
        (0..i64::from(outer)).flat_map(move |o| {
            (0..i64::from(inner)).map(move |i| match self {
                Traversal::RowMajor => (i, o),
                Traversal::ColumnMajor => (o, i),
            })
        })
    }
}

/// Extracts the wall boundary of a tile grid as merged axis-aligned segments.
///
/// A side of a wall tile needs a boundary when its neighbor is open or
/// outside the grid. Collinear boundaries of adjacent wall tiles on the same
/// side are merged into one segment by extending the end of the segment
/// already owned by the previously visited neighbor.
///
/// | Side  | Segment |
/// |-------|---------|
/// | North | TL → TR |
/// | East  | TR → BR |
/// | South | BL → BR |
/// | West  | TL → BL |
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildSegments {
    traversal: Traversal,
}

impl BuildSegments {
    /// Creates a new `BuildSegments` operation with row-major traversal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the tile visiting order.
    #[must_use]
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Executes the build, returning segments relative to the grid's
    /// top-left corner.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorded segment id cannot be resolved, which
    /// indicates a bug in the merge bookkeeping.
    pub fn execute(&self, grid: &TileGrid) -> Result<SegmentStore> {
        let mut store = SegmentStore::new();
        let mut scratch = BuildScratch::new(grid.tiles().len());

        for (x, y) in self.traversal.coords(grid.cols(), grid.rows()) {
            if !grid.is_wall(x, y) {
                continue;
            }
            let (Some(tile), Some(corners)) = (grid.index(x, y), grid.local_corners(x, y)) else {
                continue;
            };

            for dir in Direction::ALL {
                if grid.neighbor(x, y, dir).is_some_and(|t| t.is_wall()) {
                    continue;
                }
                let (start, end) = dir.corner_indices();

                let (mx, my) = dir.merge_neighbor().offset();
                let run = grid
                    .index(x + mx, y + my)
                    .and_then(|neighbor| scratch.get(neighbor, dir));

                let id = if let Some(id) = run {
                    store.extend_end(id, corners[end])?;
                    trace!(x, y, ?dir, segment = %id, "extended boundary run");
                    id
                } else {
                    store.push(Segment::new(corners[start], corners[end]))
                };
                scratch.set(tile, dir, id);
            }
        }

        debug!(
            walls = grid.wall_count(),
            segments = store.len(),
            traversal = ?self.traversal,
            "built wall segments"
        );
        Ok(store)
    }

    /// Executes the build and moves the result into world space by the
    /// grid origin.
    ///
    /// # Errors
    ///
    /// See [`BuildSegments::execute`].
    pub fn execute_world(&self, grid: &TileGrid) -> Result<SegmentStore> {
        let mut store = self.execute(grid)?;
        store.translate(&grid.layout().origin_offset());
        Ok(store)
    }
}
