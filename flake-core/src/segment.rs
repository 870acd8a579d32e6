use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Unit vector from `start` towards `end`, or zero for a degenerate segment.
    pub fn direction(&self) -> Point {
        (self.end - self.start).normalize_or_zero()
    }
}

/// Axis-aligned bounding box over a set of segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    pub fn include(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn include_segment(&mut self, seg: &LineSegment) {
        self.include(seg.start);
        self.include(seg.end);
    }

    /// Returns `None` when `segments` is empty.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a LineSegment>) -> Option<Self> {
        let mut iter = segments.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first.start);
        bounds.include(first.end);
        for seg in iter {
            bounds.include_segment(seg);
        }
        Some(bounds)
    }

    pub fn size(&self) -> Point {
        self.max - self.min
    }
}
