/// Linearly remaps `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range are extrapolated along the same line.
/// The result is undefined (infinite or NaN) when `in_min == in_max`;
/// callers must rule that case out.
#[must_use]
pub fn map_range(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    debug_assert!(in_min != in_max, "map_range: empty input range");
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
