//! Mean-motion positions of the seven classical grahas.
//!
//! Each body moves linearly from its J2000.0 mean longitude at a constant
//! rate per Julian century. This is an approximation, not an ephemeris:
//! no perturbations, no equation of center, no retrograde motion. Rahu and
//! Ketu have no mean elements here and yield `None`.

use kundali_time::julian_centuries;

use crate::ayanamsha::tropical_to_sidereal;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::util::normalize_360;

/// Linear mean elements of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// Mean tropical longitude at J2000.0, degrees.
    pub base_deg: f64,
    /// Motion per Julian century, degrees.
    pub rate_deg_per_century: f64,
    /// Reported daily motion, degrees per day.
    pub daily_motion_deg: f64,
}

/// Mean elements for a graha, `None` for Rahu and Ketu.
pub const fn mean_elements(graha: Graha) -> Option<MeanElements> {
    let (base_deg, rate_deg_per_century, daily_motion_deg) = match graha {
        Graha::Surya => (280.4665, 36_000.7698, 0.9856),
        Graha::Chandra => (218.3165, 481_267.8813, 13.1763),
        Graha::Mangal => (355.4330, 19_140.2993, 0.5240),
        Graha::Buddh => (252.2510, 149_472.6746, 1.3833),
        Graha::Guru => (34.3515, 3_034.9057, 0.0831),
        Graha::Shukra => (181.9798, 58_517.8156, 1.6022),
        Graha::Shani => (50.0774, 1_222.1138, 0.0334),
        Graha::Rahu | Graha::Ketu => return None,
    };
    Some(MeanElements {
        base_deg,
        rate_deg_per_century,
        daily_motion_deg,
    })
}

/// Tropical longitude at a Julian Day, degrees in [0, 360).
pub fn tropical_longitude(graha: Graha, jd: f64) -> Option<f64> {
    let el = mean_elements(graha)?;
    Some(normalize_360(
        el.base_deg + el.rate_deg_per_century * julian_centuries(jd),
    ))
}

/// Sidereal longitude at a Julian Day, degrees in [0, 360).
///
/// Public so calendar-element consumers can read the Sun and Moon directly.
pub fn sidereal_longitude(graha: Graha, jd: f64) -> Option<f64> {
    tropical_longitude(graha, jd).map(|lon| tropical_to_sidereal(lon, jd))
}

/// Mean daily motion, degrees per day.
pub fn daily_motion(graha: Graha) -> Option<f64> {
    mean_elements(graha).map(|el| el.daily_motion_deg)
}

/// Mean motion never reverses.
pub const fn is_retrograde(_graha: Graha) -> bool {
    false
}

/// Sidereal longitudes of the seven classical grahas, in chart order.
pub fn sidereal_positions(jd: f64) -> Vec<(Graha, f64)> {
    SAPTA_GRAHAS
        .iter()
        .filter_map(|&g| sidereal_longitude(g, jd).map(|lon| (g, lon)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ayanamsha::LAHIRI_J2000_DEG;
    use kundali_time::J2000_JD;

    #[test]
    fn sun_at_j2000() {
        let lon = tropical_longitude(Graha::Surya, J2000_JD).unwrap();
        assert!((lon - 280.4665).abs() < 1e-12);
        let sid = sidereal_longitude(Graha::Surya, J2000_JD).unwrap();
        assert!((sid - (280.4665 - LAHIRI_J2000_DEG)).abs() < 1e-9);
    }

    #[test]
    fn nodes_have_no_mean_elements() {
        assert!(mean_elements(Graha::Rahu).is_none());
        assert!(tropical_longitude(Graha::Ketu, J2000_JD).is_none());
        assert!(daily_motion(Graha::Rahu).is_none());
    }

    #[test]
    fn moon_moves_about_thirteen_degrees_a_day() {
        let a = tropical_longitude(Graha::Chandra, J2000_JD).unwrap();
        let b = tropical_longitude(Graha::Chandra, J2000_JD + 1.0).unwrap();
        let step = normalize_360(b - a);
        assert!((step - 13.176).abs() < 0.01, "step = {step}");
    }

    #[test]
    fn all_positions_in_range() {
        for jd in [2_415_020.5, J2000_JD, 2_460_000.5, 2_488_070.0] {
            let pos = sidereal_positions(jd);
            assert_eq!(pos.len(), 7);
            for (g, lon) in pos {
                assert!((0.0..360.0).contains(&lon), "{} at {jd}: {lon}", g.name());
            }
        }
    }

    #[test]
    fn speeds_are_prograde() {
        for g in SAPTA_GRAHAS {
            assert!(daily_motion(g).unwrap() > 0.0);
            assert!(!is_retrograde(g));
        }
    }
}
