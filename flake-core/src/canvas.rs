//! Drawing interface between the composer and a rendering backend.
//!
//! The composer only ever calls [`StrokeSink::stroke`]. Backends that can
//! produce a file also implement [`Canvas`].

use crate::segment::LineSegment;
use std::path::Path;

/// Receives line segments in drawing order.
pub trait StrokeSink {
    fn stroke(&mut self, segment: LineSegment);
}

/// A [`StrokeSink`] that can serialize everything stroked so far.
pub trait Canvas: StrokeSink {
    type Error: std::error::Error;

    /// Writes the accumulated drawing to a raster file at `path`.
    fn write_to(&self, path: &Path) -> Result<(), Self::Error>;
}

impl StrokeSink for Vec<LineSegment> {
    fn stroke(&mut self, segment: LineSegment) {
        self.push(segment);
    }
}

impl<S: StrokeSink + ?Sized> StrokeSink for &mut S {
    fn stroke(&mut self, segment: LineSegment) {
        (**self).stroke(segment);
    }
}
