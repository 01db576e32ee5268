use crate::grid::Direction;
use crate::registry::SegmentId;

/// Per-tile record of which segment currently bounds each side.
///
/// Lives only for the duration of one build pass.
#[derive(Debug)]
pub(super) struct BuildScratch {
    slots: Vec<[Option<SegmentId>; 4]>,
}

impl BuildScratch {
    pub(super) fn new(tile_count: usize) -> Self {
        Self {
            slots: vec![[None; 4]; tile_count],
        }
    }

    pub(super) fn get(&self, tile: usize, dir: Direction) -> Option<SegmentId> {
        self.slots.get(tile).and_then(|slot| slot[dir.index()])
    }

    pub(super) fn set(&mut self, tile: usize, dir: Direction, id: SegmentId) {
        if let Some(slot) = self.slots.get_mut(tile) {
            slot[dir.index()] = Some(id);
        }
    }
}
