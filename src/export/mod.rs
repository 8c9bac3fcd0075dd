//! Hand-off of generated paths to vector drawing formats.
//!
//! The generator never depends on a drawing backend. Paths are pushed into a
//! [`VectorPathSink`] one segment at a time, and the sink decides how to
//! serialize them.

mod naming;
mod svg;

use std::path::Path;

pub use naming::coil_file_name;
pub use svg::SvgPathSink;

use crate::error::Result;
use crate::geometry::SpiralParameters;
use crate::math::Point2;

/// Default canvas side as a multiple of the outer diameter.
pub const DEFAULT_CANVAS_SCALE: f64 = 1.2;

/// Default margin around the drawing, as a fraction of its extent.
pub const DEFAULT_MARGIN: f64 = 0.1;

/// Physical canvas size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Canvas settings used when a coil is written out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportConfig {
    /// Canvas side as a multiple of the outer diameter.
    pub canvas_scale: f64,
    /// Margin around the drawing as a fraction of its extent.
    pub margin: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            canvas_scale: DEFAULT_CANVAS_SCALE,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl ExportConfig {
    /// Square canvas sized to the coil's outer diameter.
    #[must_use]
    pub fn dimensions_for(&self, params: &SpiralParameters) -> Dimensions {
        Dimensions::square(params.outer_diameter * self.canvas_scale)
    }
}

/// Receiver of connected line segments that can write them to a file.
pub trait VectorPathSink {
    /// Appends the segment `start → end`.
    fn append_segment(&mut self, start: Point2, end: Point2);

    /// Reverses segment order and the direction of every segment.
    fn reverse(&mut self);

    /// Sum of all segment lengths.
    fn total_length(&self) -> f64;

    /// Writes the drawing to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink is empty or the file cannot be written.
    fn serialize(&self, dimensions: Dimensions, margin: f64, path: &Path) -> Result<()>;
}
