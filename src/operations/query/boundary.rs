use std::collections::BTreeSet;

use crate::error::{QueryError, Result};
use crate::grid::{Direction, Tile, TileGrid};
use crate::math::Point2;
use crate::registry::SegmentStore;

/// Snap distance, in tiles, when mapping segment endpoints to grid lines.
const GRID_SNAP: f64 = 1e-6;

/// One tile-length piece of wall boundary.
///
/// Horizontal edges sit on row line `y` (between rows `y - 1` and `y`) and
/// span column `x`. Vertical edges sit on column line `x` and span row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitEdge {
    Horizontal { x: i64, y: i64 },
    Vertical { x: i64, y: i64 },
}

/// The set of unit edges separating wall tiles from open tiles or the
/// outside of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryEdges {
    edges: BTreeSet<UnitEdge>,
}

impl BoundaryEdges {
    /// Boundary derived directly from the tile flags.
    #[must_use]
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut edges = BTreeSet::new();
        for (x, y, tile) in grid.iter() {
            if !tile.is_wall() {
                continue;
            }
            for dir in Direction::ALL {
                if grid.neighbor(x, y, dir).is_some_and(Tile::is_wall) {
                    continue;
                }
                edges.insert(match dir {
                    Direction::North => UnitEdge::Horizontal { x, y },
                    Direction::South => UnitEdge::Horizontal { x, y: y + 1 },
                    Direction::West => UnitEdge::Vertical { x, y },
                    Direction::East => UnitEdge::Vertical { x: x + 1, y },
                });
            }
        }
        Self { edges }
    }

    /// Boundary recovered from world-space segments laid over `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MisalignedSegment`] if a segment is not a
    /// non-empty run along a grid line, and [`QueryError::DuplicateEdge`] if
    /// two segments cover the same unit edge.
    pub fn from_segments(store: &SegmentStore, grid: &TileGrid) -> Result<Self> {
        let mut edges = BTreeSet::new();
        for (id, segment) in store.iter() {
            let misaligned = || QueryError::MisalignedSegment(id.index());
            let (sx, sy) = to_grid_lines(grid, &segment.start).ok_or_else(misaligned)?;
            let (ex, ey) = to_grid_lines(grid, &segment.end).ok_or_else(misaligned)?;

            let run: Vec<UnitEdge> = if segment.is_horizontal() && sx != ex {
                (sx.min(ex)..sx.max(ex))
                    .map(|x| UnitEdge::Horizontal { x, y: sy })
                    .collect()
            } else if segment.is_vertical() && sy != ey {
                (sy.min(ey)..sy.max(ey))
                    .map(|y| UnitEdge::Vertical { x: sx, y })
                    .collect()
            } else {
                return Err(misaligned().into());
            };

            for edge in run {
                if !edges.insert(edge) {
                    let (UnitEdge::Horizontal { x, y } | UnitEdge::Vertical { x, y }) = edge;
                    return Err(QueryError::DuplicateEdge { x, y }.into());
                }
            }
        }
        Ok(Self { edges })
    }

    /// Returns `true` if `edge` is part of the boundary.
    #[must_use]
    pub fn contains(&self, edge: &UnitEdge) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the number of unit edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no unit edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates unit edges in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitEdge> {
        self.edges.iter()
    }

    /// Rebuilds the wall flags of a `rows x cols` grid from the boundary.
    ///
    /// Walks each row from the open outside, toggling between open and wall
    /// at every vertical boundary edge.
    #[must_use]
    pub fn reconstruct_walls(&self, rows: u32, cols: u32) -> Vec<Tile> {
        let mut tiles = Vec::new();
        for y in 0..i64::from(rows) {
            let mut state = Tile::Open;
            for x in 0..i64::from(cols) {
                if self.contains(&UnitEdge::Vertical { x, y }) {
                    state = match state {
                        Tile::Open => Tile::Wall,
                        Tile::Wall => Tile::Open,
                    };
                }
                tiles.push(state);
            }
        }
        tiles
    }
}

/// Maps a world point to integer grid-line coordinates, if it lies on one.
#[allow(clippy::cast_possible_truncation)]
fn to_grid_lines(grid: &TileGrid, point: &Point2) -> Option<(i64, i64)> {
    let layout = grid.layout();
    let local = point - layout.origin();
    let gx = local.x / layout.tile_width();
    let gy = local.y / layout.tile_height();
    let snap = |v: f64| {
        let r = v.round();
        (r.is_finite() && (v - r).abs() < GRID_SNAP).then_some(r as i64)
    };
    Some((snap(gx)?, snap(gy)?))
}
