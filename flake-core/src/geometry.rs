//! Closed-form planar geometry used to place stems and branches.
//!
//! Angles are given in degrees and measured clockwise from the "up" axis,
//! so an angle of `0` points to 12 o'clock and `90` points to 3 o'clock.

use crate::types::Point;
use std::f64::consts::PI;

/// Converts an angle from degrees to radians.
///
/// ### Parameters
/// - `degrees` - Angle in degrees. Any finite value is accepted.
///
/// ### Returns
/// The same angle in radians (`degrees * π / 180`).
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Converts a polar coordinate to a cartesian [`Point`].
///
/// The sine goes to `x` and the cosine goes to `y`, which makes angle `0`
/// point straight up. Arms therefore radiate from 12 o'clock.
///
/// ### Parameters
/// - `angle_degrees` - Direction in degrees, clockwise from "up".
/// - `radius` - Distance from the origin.
///
/// ### Returns
/// `(radius * sin(angle), radius * cos(angle))`.
#[inline]
pub fn polar_to_cartesian(angle_degrees: f64, radius: f64) -> Point {
    let (sin, cos) = to_radians(angle_degrees).sin_cos();
    Point::new(radius * sin, radius * cos)
}

/// Unit-radius shorthand for [`polar_to_cartesian`].
#[inline]
pub fn unit_polar(angle_degrees: f64) -> Point {
    polar_to_cartesian(angle_degrees, 1.0)
}

/// Component-wise sum of two points.
#[inline]
pub fn vector_sum(a: Point, b: Point) -> Point {
    a + b
}
