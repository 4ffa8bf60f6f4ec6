//! Linear Lahiri ayanamsha.
//!
//! The offset between the tropical and sidereal zodiacs grows with the
//! precession of the equinox. This model keeps only the linear term: a
//! J2000.0 reference value plus a constant rate per Julian century.

use kundali_time::julian_centuries;

use crate::util::normalize_360;

/// Lahiri ayanamsha at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.85;

/// Linear precession rate of the model, degrees per Julian century.
pub const PRECESSION_RATE_DEG_PER_CENTURY: f64 = 0.013_972;

/// Ayanamsha at a Julian Day, degrees: 23.85 + 0.013972·T.
pub fn ayanamsa_deg(jd: f64) -> f64 {
    LAHIRI_J2000_DEG + PRECESSION_RATE_DEG_PER_CENTURY * julian_centuries(jd)
}

/// Convert a tropical longitude to sidereal at a Julian Day.
pub fn tropical_to_sidereal(tropical_lon_deg: f64, jd: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsa_deg(jd))
}
