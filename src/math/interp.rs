//! Scalar interpolation helpers.

#[inline]
/// Linearly interpolate from `start` to `end` by `elapsed / interval`.
///
/// Not clamped: `elapsed > interval` extrapolates past `end`. The playback engine resets its
/// interval anchor on the first tick past `interval`, so overshoot never accumulates.
pub fn interpolate_value_by_time(elapsed: f64, interval: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * (elapsed / interval)
}
