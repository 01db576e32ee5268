//! Grid dimensions and placement.

use crate::error::GridError;
use crate::math::{Point2, Vector2};

/// Size, cell size and world placement of a tile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    rows: u32,
    cols: u32,
    tile_width: f64,
    tile_height: f64,
    /// World position of the top-left corner of tile `(0, 0)`.
    origin: Point2,
}

impl GridLayout {
    /// Creates a layout anchored at the world origin.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidTileSize`] if either tile dimension is not
    /// finite and positive, or [`GridError::TooLarge`] if `rows * cols` does
    /// not fit in `usize`.
    pub fn new(rows: u32, cols: u32, tile_width: f64, tile_height: f64) -> Result<Self, GridError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(tile_width) || !valid(tile_height) {
            return Err(GridError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }
        let layout = Self {
            rows,
            cols,
            tile_width,
            tile_height,
            origin: Point2::origin(),
        };
        layout.tile_count()?;
        Ok(layout)
    }

    /// Square tiles of side `tile_size`.
    ///
    /// # Errors
    ///
    /// See [`GridLayout::new`].
    pub fn square(rows: u32, cols: u32, tile_size: f64) -> Result<Self, GridError> {
        Self::new(rows, cols, tile_size, tile_size)
    }

    /// Moves the grid so its top-left corner sits at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidOrigin`] if either coordinate is not
    /// finite.
    pub fn with_origin(mut self, origin: Point2) -> Result<Self, GridError> {
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(GridError::InvalidOrigin {
                x: origin.x,
                y: origin.y,
            });
        }
        self.origin = origin;
        Ok(self)
    }

    /// Places the grid in the middle of a `width` x `height` viewport.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidOrigin`] if the viewport size is not
    /// finite.
    pub fn centered_in(self, width: f64, height: f64) -> Result<Self, GridError> {
        let origin = Point2::new(
            width / 2.0 - self.world_width() / 2.0,
            height / 2.0 - self.world_height() / 2.0,
        );
        self.with_origin(origin)
    }

    /// Returns the number of tile rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the number of tile columns.
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Returns the width of one tile in world units.
    #[must_use]
    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    /// Returns the height of one tile in world units.
    #[must_use]
    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Returns the world position of the grid's top-left corner.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Offset applied to tile-local coordinates to reach world space.
    #[must_use]
    pub fn origin_offset(&self) -> Vector2 {
        self.origin.coords
    }

    /// Width of the grid in world units.
    #[must_use]
    pub fn world_width(&self) -> f64 {
        f64::from(self.cols) * self.tile_width
    }

    /// Height of the grid in world units.
    #[must_use]
    pub fn world_height(&self) -> f64 {
        f64::from(self.rows) * self.tile_height
    }

    /// Number of tiles, `rows * cols`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooLarge`] if the product overflows `usize`.
    pub fn tile_count(&self) -> Result<usize, GridError> {
        usize::try_from(u64::from(self.rows) * u64::from(self.cols)).map_err(|_| {
            GridError::TooLarge {
                rows: u64::from(self.rows),
                cols: u64::from(self.cols),
            }
        })
    }
}
