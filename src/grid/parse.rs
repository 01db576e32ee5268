use super::{GridLayout, Tile, TileGrid};
use crate::error::GridError;

impl TileGrid {
    /// Builds a grid from text, one line per row.
    ///
    /// `#` or `1` marks a wall, `.` or `0` an open tile. Surrounding
    /// whitespace on each line is ignored, as are blank lines.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownTile`] for any other symbol,
    /// [`GridError::RaggedRow`] if rows differ in length, and the layout
    /// errors of [`GridLayout::new`].
    pub fn parse(text: &str, tile_width: f64, tile_height: f64) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = lines.first().map_or(0, |line| line.chars().count());

        let mut tiles = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let before = tiles.len();
            for (column, symbol) in line.chars().enumerate() {
                let tile = match symbol {
                    '#' | '1' => Tile::Wall,
                    '.' | '0' => Tile::Open,
                    _ => return Err(GridError::UnknownTile { row, column, symbol }),
                };
                tiles.push(tile);
            }
            let actual = tiles.len() - before;
            if actual != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
        }

        let too_large = || GridError::TooLarge {
            rows: lines.len() as u64,
            cols: width as u64,
        };
        let rows = u32::try_from(lines.len()).map_err(|_| too_large())?;
        let cols = u32::try_from(width).map_err(|_| too_large())?;
        let layout = GridLayout::new(rows, cols, tile_width, tile_height)?;
        Self::new(layout, tiles)
    }
}
