use thiserror::Error;

/// Top-level error type for tilecast.
#[derive(Debug, Error)]
pub enum TilecastError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors raised while constructing a tile grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("tile count {actual} does not match grid size {expected}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error("tile size must be finite and positive, got {width}x{height}")]
    InvalidTileSize { width: f64, height: f64 },

    #[error("grid origin must be finite, got ({x}, {y})")]
    InvalidOrigin { x: f64, y: f64 },

    #[error("unknown tile symbol {symbol:?} at row {row}, column {column}")]
    UnknownTile {
        row: usize,
        column: usize,
        symbol: char,
    },

    #[error("row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid of {rows}x{cols} tiles exceeds the addressable range")]
    TooLarge { rows: u64, cols: u64 },
}

/// Errors related to the segment registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("segment {0} not found")]
    SegmentNotFound(usize),
}

/// Errors raised by queries over a built registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("segment {0} is not aligned with the tile grid")]
    MisalignedSegment(usize),

    #[error("tile edge at ({x}, {y}) is covered by more than one segment")]
    DuplicateEdge { x: i64, y: i64 },
}

/// Convenience type alias for results using [`TilecastError`].
pub type Result<T> = std::result::Result<T, TilecastError>;
