//! Mean sidereal time in degrees.
//!
//! Linear GMST in the day count since J2000.0 (Meeus Eq. 12.4 without the
//! T² and T³ terms).

use crate::julian::J2000_JD;

/// GMST at J2000.0, degrees.
const GMST_AT_J2000_DEG: f64 = 280.460_618_37;

/// Sidereal rotation per solar day, degrees.
const GMST_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich Mean Sidereal Time, degrees in [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    (GMST_AT_J2000_DEG + GMST_RATE_DEG_PER_DAY * (jd - J2000_JD)).rem_euclid(360.0)
}

/// Local Mean Sidereal Time for an east-positive longitude, degrees in [0, 360).
pub fn local_sidereal_time_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd) + longitude_east_deg).rem_euclid(360.0)
}
