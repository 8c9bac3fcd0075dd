use std::f64::consts::TAU;

use tracing::{debug, warn};

use crate::error::{OperationError, Result};
use crate::geometry::{SpiralParameters, SpiralPath};
use crate::math::{chord_angle, map_range, Point2};

/// Extra iterations allowed on top of the doubled point-count bound.
const ITERATION_HEADROOM: usize = 16;

/// Generates the stitch path of an Archimedean coil spiral.
///
/// # Algorithm
///
/// Starting at angle 0 on the inner radius, each iteration:
/// 1. emits the point at the current angle/radius;
/// 2. picks the target stitch length for the current diameter;
/// 3. converts it to an angle increment with [`chord_angle`];
/// 4. stops once the point lies on or beyond the outer radius;
/// 5. otherwise advances the angle by that increment and the radius by the same
///    fraction of one turn spacing.
///
/// The radius therefore grows by exactly `outer_radius - inner_radius` over
/// `turns` full revolutions, however the increments vary. The last point is
/// the first one at or past the outer radius.
#[derive(Debug)]
pub struct MakeSpiral {
    params: SpiralParameters,
    max_iterations: Option<usize>,
}

/// Angle/radius pair advanced by the generator.
#[derive(Debug, Clone, Copy)]
struct SpiralState {
    theta: f64,
    dist: f64,
}

impl SpiralState {
    fn point(self) -> Point2 {
        Point2::new(self.dist * self.theta.cos(), self.dist * self.theta.sin())
    }

    fn advance(&mut self, alpha: f64, spacing: f64) {
        self.theta += alpha;
        self.dist += spacing * (alpha / TAU);
    }
}

impl MakeSpiral {
    /// Creates a new `MakeSpiral` operation.
    #[must_use]
    pub fn new(params: SpiralParameters) -> Self {
        Self {
            params,
            max_iterations: None,
        }
    }

    /// Overrides the iteration cap derived from the parameters.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Upper bound on the number of emitted points.
    ///
    /// Every increment is at least `stitch_min / outer_radius` radians while
    /// the spiral is inside its outer radius, and the whole run needs
    /// `turns · 2π` radians, so the point count never exceeds
    /// `turns · 2π · outer_radius / stitch_min`. The cap doubles that.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        if let Some(cap) = self.max_iterations {
            return cap;
        }
        let p = &self.params;
        let bound = (f64::from(p.turns) * TAU * p.outer_radius() / p.stitch_min).ceil();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bound = bound.min(f64::from(u32::MAX)) as usize;
        bound.saturating_mul(2).saturating_add(ITERATION_HEADROOM)
    }

    /// Executes the generation.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidParameter` if the parameters fail validation
    /// - `GeometryError::Degenerate` if the inner diameter is zero or a target
    ///   stitch length exceeds the current diameter
    /// - `OperationError::NonTerminating` if the iteration cap is reached
    pub fn execute(&self) -> Result<SpiralPath> {
        let p = &self.params;
        p.validate()?;

        let outer_radius = p.outer_radius();
        let spacing = p.turn_spacing();
        let max_iterations = self.max_iterations();
        debug!(
            outer_diameter = p.outer_diameter,
            inner_diameter = p.inner_diameter,
            turns = p.turns,
            stitch_min = p.stitch_min,
            stitch_max = p.stitch_max,
            spacing,
            max_iterations,
            "generating spiral"
        );

        let mut state = SpiralState {
            theta: 0.0,
            dist: p.inner_radius(),
        };
        let mut points = Vec::new();

        loop {
            if points.len() >= max_iterations {
                warn!(
                    max_iterations,
                    theta = state.theta,
                    dist = state.dist,
                    "spiral stalled before reaching its outer radius"
                );
                return Err(OperationError::NonTerminating { max_iterations }.into());
            }

            let point = state.point();
            points.push(point);
            let r = point.x.hypot(point.y);

            let step = if p.has_constant_stitch() {
                p.stitch_min
            } else {
                map_range(
                    r * 2.0,
                    p.inner_diameter,
                    p.outer_diameter,
                    p.stitch_min,
                    p.stitch_max,
                )
            };
            let alpha = chord_angle(step, r)?;
            if r >= outer_radius {
                break;
            }
            state.advance(alpha, spacing);
        }

        let mut path = SpiralPath::from_points(points);
        if p.reverse {
            path = path.reversed();
        }
        debug!(
            points = path.point_count(),
            length = path.length(),
            reversed = path.is_reversed(),
            "spiral generated"
        );
        Ok(path)
    }
}

/// Generates the spiral described by `params`.
///
/// Shorthand for `MakeSpiral::new(params).execute()`.
///
/// # Errors
///
/// See [`MakeSpiral::execute`].
pub fn generate(params: SpiralParameters) -> Result<SpiralPath> {
    MakeSpiral::new(params).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn coil() -> SpiralParameters {
        SpiralParameters::new(50.0, 11.0, 78).with_stitch(2.0, 4.0)
    }

    fn norm(p: &Point2) -> f64 {
        p.x.hypot(p.y)
    }

    #[test]
    fn reference_coil_matches_frozen_values() {
        let path = generate(coil().with_reverse(true)).unwrap();
        assert_eq!(path.point_count(), 2397);
        assert_relative_eq!(path.length(), 7462.719_888_964_13, max_relative = 1e-6);
    }

    #[test]
    fn reference_coil_point_count_within_stitch_estimates() {
        let p = coil();
        let path = generate(p).unwrap();
        // Mean circumference times turns.
        let arc = PI * (p.outer_diameter + p.inner_diameter) / 2.0 * f64::from(p.turns);
        #[allow(clippy::cast_precision_loss)]
        let count = path.point_count() as f64;
        assert!(count > arc / p.stitch_max, "count={count}");
        assert!(count < arc / p.stitch_min, "count={count}");
    }

    #[test]
    fn first_point_on_inner_radius() {
        let path = generate(coil()).unwrap();
        let first = path.first().unwrap();
        assert_relative_eq!(norm(first), 5.5, max_relative = 1e-9);
        assert!(first.y.abs() < f64::EPSILON);
    }

    #[test]
    fn last_point_overshoots_by_less_than_one_stitch() {
        for p in [
            coil(),
            SpiralParameters::new(40.0, 10.0, 5).with_stitch(1.0, 1.0),
            SpiralParameters::new(20.0, 2.0, 3),
        ] {
            let path = generate(p).unwrap();
            let r = norm(path.last().unwrap());
            assert!(r >= p.outer_radius(), "{p:?}: r={r}");
            assert!(r < p.outer_radius() + p.stitch_max, "{p:?}: r={r}");
            // Every earlier point is still inside.
            let pts = path.points();
            assert!(pts[..pts.len() - 1].iter().all(|q| norm(q) < p.outer_radius()));
        }
    }

    #[test]
    fn radius_never_decreases() {
        let path = generate(coil()).unwrap();
        for w in path.points().windows(2) {
            assert!(norm(&w[1]) >= norm(&w[0]) - 1e-12);
        }
    }

    #[test]
    fn reverse_is_exact_mirror_of_forward() {
        let forward = generate(coil()).unwrap();
        let backward = generate(coil().with_reverse(true)).unwrap();
        assert!(backward.is_reversed());
        let mut expected = forward.points().to_vec();
        expected.reverse();
        assert_eq!(backward.points(), expected.as_slice());
        assert_relative_eq!(backward.length(), forward.length(), max_relative = 1e-12);
    }

    #[test]
    fn constant_stitch_spacing_is_close_to_target() {
        let stitch = 1.0;
        let p = SpiralParameters::new(40.0, 10.0, 5).with_stitch(stitch, stitch);
        let path = generate(p).unwrap();
        assert_eq!(path.point_count(), 393);
        for (a, b) in path.segments() {
            let d = (b - a).norm();
            assert!((d - stitch).abs() < 0.05 * stitch, "segment length {d}");
        }
    }

    #[test]
    fn varying_stitch_grows_outward() {
        let path = generate(coil()).unwrap();
        let segs: Vec<f64> = path.segments().map(|(a, b)| (b - a).norm()).collect();
        let inner = segs[0];
        let outer = segs[segs.len() - 2];
        assert!((inner - 2.0).abs() < 0.1, "inner stitch {inner}");
        assert!((outer - 4.0).abs() < 0.2, "outer stitch {outer}");
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate(coil()).unwrap();
        let b = generate(coil()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.length().to_bits(), b.length().to_bits());
    }

    #[test]
    fn zero_inner_diameter_is_degenerate() {
        let err = generate(SpiralParameters::new(50.0, 0.0, 10)).unwrap_err();
        assert!(err.is_degenerate(), "{err}");
    }

    #[test]
    fn stitch_bigger_than_inner_diameter_is_invalid() {
        let err = generate(SpiralParameters::new(50.0, 1.0, 10)).unwrap_err();
        assert!(err.is_invalid_parameter(), "{err}");
    }

    #[test]
    fn stitch_outgrowing_diameter_is_degenerate() {
        let p = SpiralParameters::new(10.0, 4.0, 2).with_stitch(1.0, 30.0);
        let err = generate(p).unwrap_err();
        assert!(err.is_degenerate(), "{err}");
    }

    #[test]
    fn stitch_outgrowing_diameter_at_last_point_is_degenerate() {
        // Only the point past the outer radius asks for a step wider than its diameter.
        let p = SpiralParameters::new(10.0, 1.0, 1).with_stitch(0.5, 10.0);
        let err = generate(p).unwrap_err();
        assert!(err.is_degenerate(), "{err}");
    }

    #[test]
    fn iteration_cap_reports_non_terminating() {
        let err = MakeSpiral::new(coil())
            .with_max_iterations(100)
            .execute()
            .unwrap_err();
        assert!(err.is_non_terminating(), "{err}");
    }

    #[test]
    fn default_cap_covers_reference_coil() {
        let op = MakeSpiral::new(coil());
        assert!(op.max_iterations() > 2397);
        op.execute().unwrap();
    }
}
