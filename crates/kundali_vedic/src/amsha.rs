//! Divisional (amsha) longitude mapping.
//!
//! Each sign is cut into `n` parts and the position is projected into a new
//! zodiac. Navamsa (D9) counts its parts continuously from the sign's
//! navamsa start; every other division uses the harmonic projection
//! sign' = n·s mod 12, d' = n·d mod 30.

use crate::rashi::RASHI_SPAN;
use crate::util::normalize_360;

/// Navamsa division number.
pub const NAVAMSA: u16 = 9;

/// Divisional longitude of a sidereal longitude, degrees in [0, 360).
///
/// `division` must be at least 1; D1 returns the input unchanged.
pub fn divisional_longitude(sidereal_lon_deg: f64, division: u16) -> f64 {
    let lon = normalize_360(sidereal_lon_deg);
    let sign_idx = (lon / RASHI_SPAN).floor() as u32;
    let degree = lon % RASHI_SPAN;
    let n = u32::from(division);
    let nf = f64::from(division);

    let projected = if division == NAVAMSA {
        let part = (degree * nf / RASHI_SPAN).floor() as u32;
        let sign = (sign_idx * n + part) % 12;
        f64::from(sign) * RASHI_SPAN + (degree * nf) % RASHI_SPAN
    } else {
        let sign = (sign_idx * n) % 12;
        f64::from(sign) * RASHI_SPAN + (degree * nf) % RASHI_SPAN
    };
    normalize_360(projected)
}

/// Conventional name of a divisional chart, if it has one.
pub const fn division_name(division: u16) -> Option<&'static str> {
    match division {
        1 => Some("Rashi"),
        2 => Some("Hora"),
        3 => Some("Drekkana"),
        4 => Some("Chaturthamsa"),
        7 => Some("Saptamsa"),
        9 => Some("Navamsa"),
        10 => Some("Dasamsa"),
        12 => Some("Dwadasamsa"),
        16 => Some("Shodasamsa"),
        20 => Some("Vimsamsa"),
        24 => Some("Chaturvimsamsa"),
        27 => Some("Saptavimsamsa"),
        30 => Some("Trimsamsa"),
        40 => Some("Khavedamsa"),
        45 => Some("Akshavedamsa"),
        60 => Some("Shashtiamsa"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d1_is_identity() {
        for lon in [0.0, 15.0, 123.456, 359.5] {
            assert!((divisional_longitude(lon, 1) - lon).abs() < 1e-9);
        }
    }

    #[test]
    fn navamsa_of_fifteen_degrees() {
        // Mesha 15 deg: fifth navamsa → sign index 4, degree 15
        let d9 = divisional_longitude(15.0, NAVAMSA);
        assert!((d9 - 135.0).abs() < 1e-9, "d9 = {d9}");
        assert_eq!((d9 / 30.0).floor() as u8, 4);
        assert!((d9 % 30.0 - 15.0).abs() < 1e-9);
    }

    #[test]
    fn navamsa_continues_across_signs() {
        // Vrishabha 0 deg: 9·1 + 0 = sign index 9 (Makara)
        let d9 = divisional_longitude(30.0, NAVAMSA);
        assert!((d9 - 270.0).abs() < 1e-9, "d9 = {d9}");
    }

    #[test]
    fn harmonic_projection() {
        // D2 of Mithuna 20 deg: sign (2·2) mod 12 = 4, degree 40 mod 30 = 10
        let d2 = divisional_longitude(80.0, 2);
        assert!((d2 - 130.0).abs() < 1e-9, "d2 = {d2}");
        // D10 of Meena 29 deg: sign (11·10) mod 12 = 2, degree 290 mod 30 = 20
        let d10 = divisional_longitude(359.0, 10);
        assert!((d10 - 80.0).abs() < 1e-9, "d10 = {d10}");
    }

    #[test]
    fn results_in_range() {
        for n in [2, 3, 9, 10, 12, 60] {
            for i in 0..360 {
                let v = divisional_longitude(f64::from(i) + 0.37, n);
                assert!((0.0..360.0).contains(&v), "D{n} of {i}: {v}");
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(division_name(9), Some("Navamsa"));
        assert_eq!(division_name(2), Some("Hora"));
        assert_eq!(division_name(5), None);
    }
}
