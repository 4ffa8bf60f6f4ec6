//! Degree ↔ degree/minute/second conversion.
//!
//! The sign belongs to the whole value: -0.5° is `-0° 30' 0"`, not
//! `0° -30' 0"`.

use std::fmt;

/// An angle split into degrees, arcminutes and arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u8,
    pub seconds: f64,
}

/// Split decimal degrees into [`Dms`].
pub fn deg_to_dms(deg: f64) -> Dms {
    let negative = deg < 0.0;
    let abs = deg.abs();
    let degrees = abs.trunc();
    let min_total = (abs - degrees) * 60.0;
    let minutes = min_total.trunc();
    let seconds = (min_total - minutes) * 60.0;
    Dms {
        negative,
        degrees: degrees as u32,
        minutes: minutes as u8,
        seconds,
    }
}

/// Join a [`Dms`] back into decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    let abs = f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0;
    if dms.negative { -abs } else { abs }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}° {:02}' {:05.2}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_split() {
        let d = deg_to_dms(23.5);
        assert!(!d.negative);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 30);
        assert!(d.seconds.abs() < 1e-9);
    }

    #[test]
    fn negative_small_angle_keeps_sign() {
        let d = deg_to_dms(-0.5);
        assert!(d.negative);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, 30);
        assert!((dms_to_deg(&d) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn roundtrip() {
        for v in [0.0, 12.345_678, -45.999_9, 359.999_999] {
            let back = dms_to_deg(&deg_to_dms(v));
            assert!((back - v).abs() < 1e-9, "{v} -> {back}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(deg_to_dms(15.25).to_string(), "15° 15' 00.00\"");
        assert_eq!(deg_to_dms(-0.5).to_string(), "-0° 30' 00.00\"");
    }
}
