use glam::DVec2;

/// A planar coordinate in snowflake units.
///
/// One unit is the spacing between two branch points along a stem.
/// The y axis points "up", so the first arm ends at `(0, stem_len)`.
pub type Point = DVec2;

/// The point every stem starts from.
pub const ORIGIN: Point = DVec2::ZERO;
