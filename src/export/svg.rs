use std::fmt::{self, Write};
use std::path::Path;

use tracing::debug;

use super::{Dimensions, VectorPathSink};
use crate::error::{ExportError, Result};
use crate::math::{Point2, TOLERANCE};

/// Collects line segments and serializes them as a single SVG `<path>`.
#[derive(Debug, Clone, Default)]
pub struct SvgPathSink {
    segments: Vec<(Point2, Point2)>,
}

impl SvgPathSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn segments(&self) -> &[(Point2, Point2)] {
        &self.segments
    }

    /// Builds the SVG document.
    ///
    /// The `viewBox` is the bounding box of all segment endpoints, widened on
    /// every side by `margin` times its extent along that axis. Consecutive
    /// segments that share an endpoint are joined into one subpath.
    ///
    /// # Errors
    ///
    /// - `ExportError::EmptyPath` if no segment was appended
    /// - `ExportError::Format` if the document cannot be formatted
    pub fn to_svg(&self, dimensions: Dimensions, margin: f64) -> Result<String> {
        let (min, max) = self.bounds().ok_or(ExportError::EmptyPath)?;

        let mut dx = max.x - min.x;
        let mut dy = max.y - min.y;
        if dx < TOLERANCE {
            dx = 1.0;
        }
        if dy < TOLERANCE {
            dy = 1.0;
        }
        let x0 = min.x - margin * dx;
        let y0 = min.y - margin * dy;
        let dx = dx + 2.0 * margin * dx;
        let dy = dy + 2.0 * margin * dy;
        let stroke = 0.002 * dx.max(dy);

        let mut out = String::new();
        self.write_document(&mut out, dimensions, [x0, y0, dx, dy], stroke)
            .map_err(ExportError::from)?;
        Ok(out)
    }

    fn write_document<W: Write>(
        &self,
        out: &mut W,
        dimensions: Dimensions,
        [x0, y0, dx, dy]: [f64; 4],
        stroke: f64,
    ) -> fmt::Result {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}mm" height="{}mm" viewBox="{x0} {y0} {dx} {dy}">"#,
            dimensions.width, dimensions.height,
        )?;
        write!(out, r#"  <path d=""#)?;
        self.write_path_data(out)?;
        writeln!(out, r#"" fill="none" stroke="black" stroke-width="{stroke}"/>"#)?;
        writeln!(out, "</svg>")
    }

    fn bounds(&self) -> Option<(Point2, Point2)> {
        let mut endpoints = self.segments.iter().flat_map(|(a, b)| [a, b]);
        let first = *endpoints.next()?;
        Some(endpoints.fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// Writes `M`/`L` commands, starting a new subpath at every gap.
    fn write_path_data<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut pen: Option<Point2> = None;
        for (start, end) in &self.segments {
            let joined = pen.is_some_and(|p| (p - *start).norm() < TOLERANCE);
            if !joined {
                if pen.is_some() {
                    out.write_char(' ')?;
                }
                write!(out, "M {:.4} {:.4}", start.x, start.y)?;
            }
            write!(out, " L {:.4} {:.4}", end.x, end.y)?;
            pen = Some(*end);
        }
        Ok(())
    }
}

impl VectorPathSink for SvgPathSink {
    fn append_segment(&mut self, start: Point2, end: Point2) {
        self.segments.push((start, end));
    }

    fn reverse(&mut self) {
        self.segments.reverse();
        for (start, end) in &mut self.segments {
            std::mem::swap(start, end);
        }
    }

    fn total_length(&self) -> f64 {
        self.segments.iter().map(|(a, b)| (b - a).norm()).sum()
    }

    fn serialize(&self, dimensions: Dimensions, margin: f64, path: &Path) -> Result<()> {
        let svg = self.to_svg(dimensions, margin)?;
        std::fs::write(path, svg).map_err(ExportError::from)?;
        debug!(path = %path.display(), segments = self.segments.len(), "wrote svg");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{SpiralParameters, SpiralPath};
    use crate::operations::generate;

    fn l_shape() -> SvgPathSink {
        let mut sink = SvgPathSink::new();
        sink.append_segment(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        sink.append_segment(Point2::new(10.0, 0.0), Point2::new(10.0, 5.0));
        sink
    }

    #[test]
    fn connected_segments_form_one_subpath() {
        let svg = l_shape().to_svg(Dimensions::square(12.0), 0.1).unwrap();
        assert!(svg.contains(r#"d="M 0.0000 0.0000 L 10.0000 0.0000 L 10.0000 5.0000""#));
        assert!(svg.contains(r#"width="12mm" height="12mm""#));
        assert_eq!(svg.matches('M').count(), 1);
    }

    #[test]
    fn disconnected_segment_starts_new_subpath() {
        let mut sink = l_shape();
        sink.append_segment(Point2::new(20.0, 20.0), Point2::new(21.0, 20.0));
        let svg = sink.to_svg(Dimensions::square(30.0), 0.0).unwrap();
        assert!(svg.contains("L 10.0000 5.0000 M 20.0000 20.0000 L 21.0000 20.0000"));
    }

    #[test]
    fn view_box_includes_margin() {
        let svg = l_shape().to_svg(Dimensions::square(12.0), 0.1).unwrap();
        assert!(svg.contains(r#"viewBox="-1 -0.5 12 6""#), "{svg}");
    }

    struct Refuse;

    impl fmt::Write for Refuse {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn formatter_failure_is_propagated() {
        let sink = l_shape();
        assert!(sink.write_path_data(&mut Refuse).is_err());
        let result = sink.write_document(&mut Refuse, Dimensions::square(1.0), [0.0; 4], 1.0);
        let err: crate::error::CoilError = ExportError::from(result.unwrap_err()).into();
        assert!(matches!(
            err,
            crate::error::CoilError::Export(ExportError::Format(_))
        ));
    }

    #[test]
    fn reverse_swaps_order_and_direction() {
        let mut sink = l_shape();
        sink.reverse();
        assert_eq!(
            sink.segments()[0],
            (Point2::new(10.0, 5.0), Point2::new(10.0, 0.0))
        );
        assert_eq!(
            sink.segments()[1],
            (Point2::new(10.0, 0.0), Point2::new(0.0, 0.0))
        );
        assert!((sink.total_length() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn empty_sink_cannot_be_serialized() {
        let err = SvgPathSink::new()
            .to_svg(Dimensions::square(1.0), 0.1)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoilError::Export(ExportError::EmptyPath)
        ));
    }

    #[test]
    fn spiral_path_round_trips_length_through_sink() {
        let path = generate(SpiralParameters::new(40.0, 10.0, 5)).unwrap();
        let mut sink = SvgPathSink::new();
        path.write_to(&mut sink);
        assert_eq!(sink.segments().len(), path.segment_count());
        assert!((sink.total_length() - path.length()).abs() < 1e-9);
    }

    #[test]
    fn sink_reverse_matches_path_reverse() {
        let path = SpiralPath::from_points(vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-2.0, 0.0),
        ]);
        let mut forward = SvgPathSink::new();
        path.write_to(&mut forward);
        forward.reverse();

        let mut backward = SvgPathSink::new();
        path.clone().reversed().write_to(&mut backward);
        assert_eq!(forward.segments(), backward.segments());
    }

    #[test]
    fn serialize_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("coil.svg");
        l_shape()
            .serialize(Dimensions::square(12.0), 0.1, &file)
            .unwrap();
        let written = std::fs::read_to_string(&file).unwrap();
        assert!(written.starts_with("<?xml"));
        assert!(written.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn serialize_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing").join("coil.svg");
        let err = l_shape()
            .serialize(Dimensions::square(12.0), 0.1, &file)
            .unwrap_err();
        assert!(matches!(err, crate::error::CoilError::Export(ExportError::Io(_))));
    }
}
