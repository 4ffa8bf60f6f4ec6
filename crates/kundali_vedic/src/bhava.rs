//! Equal-house (bhava) cusps and house placement.
//!
//! House 1 begins at the lagna and each house spans exactly 30 degrees:
//! cusp(n) = (lagna + (n − 1)·30) mod 360.

use crate::util::normalize_360;

/// Number of houses in a chart.
pub const HOUSE_COUNT: usize = 12;

/// Span of one equal house in degrees.
pub const HOUSE_SPAN: f64 = 30.0;

/// Cusp longitudes of the 12 equal houses, house 1 first.
pub fn house_cusps(lagna_deg: f64) -> [f64; HOUSE_COUNT] {
    let mut cusps = [0.0; HOUSE_COUNT];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(lagna_deg + i as f64 * HOUSE_SPAN);
    }
    cusps
}

/// 1-based house of a longitude relative to the lagna.
pub fn house_of(lon_deg: f64, lagna_deg: f64) -> u8 {
    let relative = (lon_deg - lagna_deg + 360.0).rem_euclid(360.0);
    let house = (relative / HOUSE_SPAN).floor() as u8 + 1;
    if house > 12 { house - 12 } else { house }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cusps_step_thirty_degrees() {
        let cusps = house_cusps(350.0);
        assert!((cusps[0] - 350.0).abs() < 1e-12);
        assert!((cusps[1] - 20.0).abs() < 1e-12);
        assert!((cusps[11] - 320.0).abs() < 1e-12);
    }

    #[test]
    fn lagna_is_house_one() {
        assert_eq!(house_of(123.4, 123.4), 1);
    }

    #[test]
    fn thirty_past_lagna_is_house_two() {
        assert_eq!(house_of(150.0, 120.0), 2);
        assert_eq!(house_of(153.5, 123.4), 2);
    }

    #[test]
    fn wraps_from_twelve_to_one() {
        assert_eq!(house_of(123.3, 123.4), 12);
        assert_eq!(house_of(5.0, 350.0), 1);
        assert_eq!(house_of(340.0, 10.0), 12);
    }

    #[test]
    fn every_house_reachable() {
        for n in 0..12u8 {
            let lon = 200.0 + f64::from(n) * 30.0 + 15.0;
            assert_eq!(house_of(lon, 200.0), n + 1);
        }
    }
}
