//! Diagnostics of a generated coil, kept apart from how they are shown.

use std::fmt;

use tracing::info;

use crate::geometry::{SpiralParameters, SpiralPath};

/// Summary of one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralReport {
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub turns: u32,
    pub turn_spacing: f64,
    pub stitch_min: f64,
    pub stitch_max: f64,
    pub path_length: f64,
    pub point_count: usize,
}

impl SpiralReport {
    #[must_use]
    pub fn new(params: &SpiralParameters, path: &SpiralPath) -> Self {
        Self {
            outer_diameter: params.outer_diameter,
            inner_diameter: params.inner_diameter,
            turns: params.turns,
            turn_spacing: params.turn_spacing(),
            stitch_min: params.stitch_min,
            stitch_max: params.stitch_max,
            path_length: path.length(),
            point_count: path.point_count(),
        }
    }
}

impl fmt::Display for SpiralReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "outer diameter:\t\t{} mm", self.outer_diameter)?;
        writeln!(f, "inner diameter:\t\t{} mm", self.inner_diameter)?;
        writeln!(f, "turns:\t\t\t{}", self.turns)?;
        writeln!(f, "turn spacing:\t\t{:.4} mm", self.turn_spacing)?;
        writeln!(f, "min stitch length:\t{} mm", self.stitch_min)?;
        writeln!(f, "max stitch length:\t{} mm", self.stitch_max)?;
        writeln!(f, "path length:\t\t{:.0} mm", self.path_length)?;
        write!(f, "points:\t\t\t{}", self.point_count)
    }
}

/// Receiver of generation diagnostics.
pub trait ReportSink {
    fn report(&mut self, report: &SpiralReport);
}

/// Publishes reports as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ReportSink for TracingReporter {
    fn report(&mut self, report: &SpiralReport) {
        info!(
            outer_diameter = report.outer_diameter,
            inner_diameter = report.inner_diameter,
            turns = report.turns,
            turn_spacing = report.turn_spacing,
            stitch_min = report.stitch_min,
            stitch_max = report.stitch_max,
            path_length = report.path_length,
            points = report.point_count,
            "coil generated"
        );
    }
}
