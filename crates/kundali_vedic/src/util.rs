//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs; that
/// rounds back to 0.0 so the result never leaves the half-open range.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
