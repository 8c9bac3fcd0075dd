use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;

/// Returns the angle `α = 2·asin(step / 2r)` subtended by a chord of length
/// `step` on a circle of the given `radius`.
///
/// The local spiral segment is treated as an arc of the circle through the
/// current point, so the chord between consecutive samples has length
/// `step` only approximately.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` unless `0 < step <= 2 * radius`
/// (both finite). A ratio that exceeds 1 only by rounding is clamped.
pub fn chord_angle(step: f64, radius: f64) -> Result<f64> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::Degenerate(format!(
            "radius {radius} cannot carry a chord"
        ))
        .into());
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(GeometryError::Degenerate(format!(
            "step length {step} must be positive"
        ))
        .into());
    }

    let ratio = step / (2.0 * radius);
    if ratio > 1.0 + TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "step length {step} exceeds the diameter {} at radius {radius}",
            2.0 * radius
        ))
        .into());
    }

    Ok(2.0 * ratio.min(1.0).asin())
}
