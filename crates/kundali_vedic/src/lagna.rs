//! Lagna (Ascendant) from mean sidereal time.
//!
//! Formula (Meeus Ch. 13, with the mean obliquity):
//! `Asc = atan2(sin(LST), cos(LST)*cos(eps) + tan(phi)*sin(eps))`
//! The tropical result is shifted by the ayanamsha to give the sidereal
//! lagna.

use kundali_time::{julian_centuries, local_sidereal_time_deg};

use crate::ayanamsha::tropical_to_sidereal;
use crate::error::VedicError;
use crate::util::normalize_360;

/// Mean obliquity at J2000.0, degrees.
const OBLIQUITY_J2000_DEG: f64 = 23.4393;

/// Linear change of the mean obliquity, degrees per Julian century.
const OBLIQUITY_RATE_DEG_PER_CENTURY: f64 = -0.0130;

/// Observer position on the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location, rejecting non-finite values and latitudes beyond
    /// the poles.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("coordinates must be finite"));
        }
        if latitude_deg.abs() > 90.0 {
            return Err(VedicError::InvalidLocation(
                "latitude must be within [-90, 90] deg",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// Mean obliquity of the ecliptic, degrees: 23.4393 − 0.0130·T.
pub fn obliquity_deg(jd: f64) -> f64 {
    OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG_PER_CENTURY * julian_centuries(jd)
}

/// Tropical ascendant, degrees in [0, 360).
pub fn tropical_lagna_deg(jd: f64, location: &GeoLocation) -> f64 {
    let lst = local_sidereal_time_deg(jd, location.longitude_deg).to_radians();
    let eps = obliquity_deg(jd).to_radians();
    let phi = location.latitude_deg.to_radians();

    let asc = f64::atan2(lst.sin(), lst.cos() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}

/// Sidereal ascendant, degrees in [0, 360).
pub fn lagna_deg(jd: f64, location: &GeoLocation) -> f64 {
    tropical_to_sidereal(tropical_lagna_deg(jd, location), jd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::{J2000_JD, gmst_deg};

    #[test]
    fn rejects_bad_latitude() {
        assert!(matches!(
            GeoLocation::new(91.0, 0.0),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
        assert!(GeoLocation::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn equator_lst_zero_gives_zero_ascendant() {
        // At the equator with LST = 0 the formula reduces to atan2(0, cos eps) = 0.
        let jd = J2000_JD;
        let loc = GeoLocation::new(0.0, -gmst_deg(jd)).unwrap();
        let asc = tropical_lagna_deg(jd, &loc);
        assert!(asc < 1e-6 || asc > 360.0 - 1e-6, "asc = {asc}");
    }

    #[test]
    fn equator_lst_ninety_gives_ninety() {
        let jd = J2000_JD;
        let loc = GeoLocation::new(0.0, 90.0 - gmst_deg(jd)).unwrap();
        let asc = tropical_lagna_deg(jd, &loc);
        assert!((asc - 90.0).abs() < 1e-6, "asc = {asc}");
    }

    #[test]
    fn sidereal_is_tropical_minus_ayanamsha() {
        let loc = GeoLocation::new(28.6139, 77.2090).unwrap();
        let jd = 2_448_027.104_166_667;
        let trop = tropical_lagna_deg(jd, &loc);
        let sid = lagna_deg(jd, &loc);
        let diff = normalize_360(trop - sid);
        assert!((diff - crate::ayanamsha::ayanamsa_deg(jd)).abs() < 1e-9);
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((obliquity_deg(J2000_JD) - 23.4393).abs() < 1e-12);
    }
}
