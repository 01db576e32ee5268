use std::fmt;

use crate::error::RegistryError;
use crate::geometry::Segment;
use crate::math::{Point2, Vector2};

/// Stable position of a segment in a [`SegmentStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(usize);

impl SegmentId {
    /// Returns the position of the segment in its store.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered collection of wall segments.
///
/// Segments are appended once and never removed, so ids stay valid until the
/// store is dropped. A new store is built whenever the tile data changes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SegmentStore {
    segments: Vec<Segment>,
}

impl SegmentStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment and returns its id.
    pub fn push(&mut self, segment: Segment) -> SegmentId {
        self.segments.push(segment);
        SegmentId(self.segments.len() - 1)
    }

    /// Returns the segment with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this store.
    pub fn segment(&self, id: SegmentId) -> Result<&Segment, RegistryError> {
        self.segments
            .get(id.0)
            .ok_or(RegistryError::SegmentNotFound(id.0))
    }

    /// Moves the end point of an existing segment, growing a merged run.
    pub(crate) fn extend_end(&mut self, id: SegmentId, end: Point2) -> Result<(), RegistryError> {
        let segment = self
            .segments
            .get_mut(id.0)
            .ok_or(RegistryError::SegmentNotFound(id.0))?;
        segment.end = end;
        Ok(())
    }

    /// Translates every segment by `offset`.
    pub fn translate(&mut self, offset: &Vector2) {
        for segment in &mut self.segments {
            segment.translate(offset);
        }
    }

    /// Appends every segment of `other`, preserving order.
    pub fn extend(&mut self, other: impl IntoIterator<Item = Segment>) {
        self.segments.extend(other);
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the store holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns every segment in insertion order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates segments in insertion order together with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, segment)| (SegmentId(i), segment))
    }
}
