/// One of the four sides of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order boundaries are emitted for a tile.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Grid offset `(dx, dy)` to the neighbor on this side. `y` grows downward.
    #[must_use]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Dense index, used to address per-direction scratch slots.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// The already-visited neighbor whose same-side boundary this tile may extend.
    ///
    /// Horizontal boundaries (N/S) run along a row and continue from the west;
    /// vertical boundaries (E/W) run along a column and continue from the north.
    #[must_use]
    pub fn merge_neighbor(self) -> Direction {
        match self {
            Direction::North | Direction::South => Direction::West,
            Direction::East | Direction::West => Direction::North,
        }
    }

    /// Indices into `[TL, TR, BR, BL]` of the boundary's start and end corners.
    #[must_use]
    pub fn corner_indices(self) -> (usize, usize) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 2),
            Direction::South => (3, 2),
            Direction::West => (0, 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn merge_neighbor_is_visited_first() {
        // Both traversal orders visit west and north neighbors earlier.
        for dir in Direction::ALL {
            let (dx, dy) = dir.merge_neighbor().offset();
            assert!(dx <= 0 && dy <= 0);
            assert_ne!((dx, dy), (0, 0));
        }
    }

    #[test]
    fn merged_runs_extend_their_end_corner() {
        // The end corner must lie further along the run than the start corner.
        assert_eq!(Direction::North.corner_indices(), (0, 1));
        assert_eq!(Direction::East.corner_indices(), (1, 2));
        assert_eq!(Direction::South.corner_indices(), (3, 2));
        assert_eq!(Direction::West.corner_indices(), (0, 3));
    }
}
