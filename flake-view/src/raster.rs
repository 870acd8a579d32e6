//! Raster canvas backed by tiny-skia.
//!
//! Segments are recorded in snowflake units as they are stroked. When the
//! canvas is written, the drawing is fitted into a pixmap, stroked in one
//! pass and saved as PNG through the `image` crate.

use std::path::Path;

use flake_core::{
    canvas::{Canvas, StrokeSink},
    segment::{Bounds, LineSegment},
    types::Point,
};
use image::{ImageFormat, RgbaImage};
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{debug, info};

use crate::error::RenderError;

/// Pixels per snowflake unit.
pub const PIXELS_PER_UNIT: f64 = 100.0;

/// Blank border around the drawing, in snowflake units.
pub const MARGIN: f64 = 0.25;

/// Longest image side in pixels; larger drawings get a smaller scale.
pub const MAX_SIDE: u32 = 8192;

/// Stroke width in pixels.
pub const LINE_WIDTH: f32 = 2.0;

/// Maps snowflake units to pixel coordinates.
///
/// The y axis is flipped so that "up" in the snowflake is up in the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// Pixels per snowflake unit.
    pub scale: f64,
    min_x: f64,
    max_y: f64,
}

impl Layout {
    /// Fits `bounds` plus [`MARGIN`] on every side.
    ///
    /// Uses [`PIXELS_PER_UNIT`] unless the longer side would exceed
    /// [`MAX_SIDE`], in which case the scale shrinks to fit.
    pub fn fit(bounds: &Bounds) -> Self {
        let padded = bounds.size() + 2.0 * MARGIN;
        let scale = PIXELS_PER_UNIT.min(f64::from(MAX_SIDE) / padded.max_element());
        let to_px = |extent: f64| ((extent * scale).ceil().max(1.0) as u32).min(MAX_SIDE);
        Self {
            width: to_px(padded.x),
            height: to_px(padded.y),
            scale,
            min_x: bounds.min.x,
            max_y: bounds.max.y,
        }
    }

    pub fn to_pixel(&self, p: Point) -> (f32, f32) {
        let x = (p.x - self.min_x + MARGIN) * self.scale;
        let y = (self.max_y - p.y + MARGIN) * self.scale;
        (x as f32, y as f32)
    }
}

/// A [`Canvas`] that rasterizes to PNG.
#[derive(Debug, Default)]
pub struct RasterCanvas {
    segments: Vec<LineSegment>,
}

impl RasterCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Pixel layout for the current drawing, `None` while nothing is stroked.
    pub fn layout(&self) -> Option<Layout> {
        Bounds::from_segments(&self.segments).map(|b| Layout::fit(&b))
    }

    fn build_path(&self, layout: &Layout) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for seg in &self.segments {
            let (x0, y0) = layout.to_pixel(seg.start);
            let (x1, y1) = layout.to_pixel(seg.end);
            pb.move_to(x0, y0);
            pb.line_to(x1, y1);
        }
        pb.finish()
    }

    /// Rasterizes everything stroked so far.
    pub fn render(&self) -> Result<RgbaImage, RenderError> {
        if self.is_empty() {
            return Err(RenderError::EmptyDrawing);
        }
        let layout = self.layout().ok_or(RenderError::EmptyDrawing)?;
        let (width, height) = (layout.width, layout.height);

        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::PixmapSize { width, height })?;
        pixmap.fill(Color::WHITE);

        let path = self.build_path(&layout).ok_or(RenderError::Path)?;

        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: LINE_WIDTH,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        debug!(width, height, segments = self.len(), "rasterized");

        // The background is opaque, so premultiplied and straight alpha agree.
        RgbaImage::from_raw(width, height, pixmap.take())
            .ok_or(RenderError::PixmapSize { width, height })
    }
}

impl StrokeSink for RasterCanvas {
    fn stroke(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }
}

impl Canvas for RasterCanvas {
    type Error = RenderError;

    fn write_to(&self, path: &Path) -> Result<(), RenderError> {
        let img = self.render()?;
        info!(path = %path.display(), width = img.width(), height = img.height(), "writing png");
        img.save_with_format(path, ImageFormat::Png)
            .map_err(|source| RenderError::Image {
                path: path.to_path_buf(),
                source,
            })
    }
}
