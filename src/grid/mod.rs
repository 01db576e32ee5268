pub mod direction;
pub mod layout;
mod parse;

pub use direction::Direction;
pub use layout::GridLayout;

use crate::error::GridError;
use crate::math::{Point2, Vector2};

/// Corner points of a tile in the fixed order `[TL, TR, BR, BL]`.
pub type TileCorners = [Point2; 4];

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Maps a map flag to a tile: `0` is open, anything else is a wall.
    #[must_use]
    pub fn from_flag(flag: u8) -> Self {
        if flag == 0 {
            Tile::Open
        } else {
            Tile::Wall
        }
    }

    /// Returns `true` for wall tiles.
    #[must_use]
    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

/// Immutable rectangular grid of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    layout: GridLayout,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid from row-major tiles.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TileCountMismatch`] if `tiles.len() != rows * cols`.
    pub fn new(layout: GridLayout, tiles: Vec<Tile>) -> Result<Self, GridError> {
        let expected = layout.tile_count()?;
        if tiles.len() != expected {
            return Err(GridError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self { layout, tiles })
    }

    /// Creates a grid from a row-major flag array (`0` open, non-zero wall).
    ///
    /// # Errors
    ///
    /// See [`TileGrid::new`].
    pub fn from_flags(layout: GridLayout, flags: &[u8]) -> Result<Self, GridError> {
        Self::new(layout, flags.iter().copied().map(Tile::from_flag).collect())
    }

    /// Returns the layout the grid was built with.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Returns the number of tile rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.layout.rows()
    }

    /// Returns the number of tile columns.
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.layout.cols()
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of wall tiles.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_wall()).count()
    }

    /// Row-major index of `(x, y)`, or `None` outside `[0, cols) x [0, rows)`.
    #[must_use]
    pub fn index(&self, x: i64, y: i64) -> Option<usize> {
        let col = u32::try_from(x).ok().filter(|&c| c < self.cols())?;
        let row = u32::try_from(y).ok().filter(|&r| r < self.rows())?;
        usize::try_from(u64::from(row) * u64::from(self.cols()) + u64::from(col)).ok()
    }

    /// Tile at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn tile(&self, x: i64, y: i64) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Tile at `(x + dx, y + dy)`, or `None` when out of bounds.
    #[must_use]
    pub fn tile_offset(&self, x: i64, y: i64, (dx, dy): (i64, i64)) -> Option<Tile> {
        self.tile(x.checked_add(dx)?, y.checked_add(dy)?)
    }

    /// Neighbor of `(x, y)` on the given side.
    #[must_use]
    pub fn neighbor(&self, x: i64, y: i64, dir: Direction) -> Option<Tile> {
        self.tile_offset(x, y, dir.offset())
    }

    /// `true` only for in-bounds wall tiles.
    #[must_use]
    pub fn is_wall(&self, x: i64, y: i64) -> bool {
        self.tile(x, y).is_some_and(Tile::is_wall)
    }

    /// World-space corners `[TL, TR, BR, BL]` of tile `(x, y)`.
    #[must_use]
    pub fn tile_corners(&self, x: i64, y: i64) -> Option<TileCorners> {
        let offset = self.layout.origin_offset();
        self.local_corners(x, y)
            .map(|corners| corners.map(|p| p + offset))
    }

    /// Corners of tile `(x, y)` relative to the grid's top-left corner.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn local_corners(&self, x: i64, y: i64) -> Option<TileCorners> {
        self.index(x, y)?;
        let (w, h) = (self.layout.tile_width(), self.layout.tile_height());
        let tl = Point2::new(x as f64 * w, y as f64 * h);
        Some([
            tl,
            tl + Vector2::new(w, 0.0),
            tl + Vector2::new(w, h),
            tl + Vector2::new(0.0, h),
        ])
    }

    /// Iterates `(x, y, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64, Tile)> + '_ {
        let cols = i64::from(self.cols()).max(1);
        (0_i64..).zip(self.tiles.iter()).map(move |(i, &tile)| (i % cols, i / cols, tile))
    }
}
