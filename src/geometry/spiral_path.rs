use crate::export::VectorPathSink;
use crate::math::Point2;

/// An ordered open polyline sampled along a spiral.
///
/// Points are stored in generation order (inside out) unless the path has
/// been reversed. Coordinates never change after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralPath {
    points: Vec<Point2>,
    reversed: bool,
}

impl SpiralPath {
    /// Creates a path from points in generation order.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self {
            points,
            reversed: false,
        }
    }

    /// Returns the same points in the opposite order.
    ///
    /// Every segment `p[i] → p[i+1]` becomes `p[i+1] → p[i]`; no coordinate
    /// is touched.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self.reversed = !self.reversed;
        self
    }

    /// Returns `true` if the path runs opposite to its generation order.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Returns the number of line segments between consecutive points.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Iterates over `(start, end)` pairs of consecutive points.
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Polyline length: the sum of the distances between consecutive points.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }

    /// Appends every segment of this path to `sink`, in path order.
    pub fn write_to<S: VectorPathSink + ?Sized>(&self, sink: &mut S) {
        for (start, end) in self.segments() {
            sink.append_segment(start, end);
        }
    }
}
