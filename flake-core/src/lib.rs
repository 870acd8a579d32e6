//! Core geometry and composition library for procedural snowflakes.
//!
//! Main components:
//! - [`geometry`] — degree/radian conversion, polar coordinates, vector sums.
//! - [`segment`] — line segments and their bounding boxes.
//! - [`config`] — validated snowflake parameters.
//! - [`composer`] — stems and branch "V" placement along every arm.
//! - [`canvas`] — the narrow drawing interface the composer writes into.
//! - [`error`] — parameter validation errors.
//! - [`types`] — shared type aliases.

pub mod canvas;
pub mod composer;
pub mod config;
pub mod error;
pub mod geometry;
pub mod segment;
pub mod types;
