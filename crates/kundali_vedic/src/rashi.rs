//! Rashi (zodiac sign) lookup.
//!
//! Twelve equal signs of 30 degrees starting from Mesha at 0 deg. Sign
//! numbers are 1-based (Mesha = 1) to match chart and record conventions;
//! `Rashi::index` stays 0-based for table indexing.

use kundali_time::{Dms, deg_to_dms};

use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Hindi (Devanagari) name of the rashi.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Mesha => "मेष",
            Self::Vrishabha => "वृष",
            Self::Mithuna => "मिथुन",
            Self::Karka => "कर्क",
            Self::Simha => "सिंह",
            Self::Kanya => "कन्या",
            Self::Tula => "तुला",
            Self::Vrischika => "वृश्चिक",
            Self::Dhanu => "धनु",
            Self::Makara => "मकर",
            Self::Kumbha => "कुम्भ",
            Self::Meena => "मीन",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi for a 1-based sign number, `None` outside 1..=12.
    pub const fn from_number(sign: u8) -> Option<Self> {
        if sign >= 1 && sign <= 12 {
            Some(ALL_RASHIS[(sign - 1) as usize])
        } else {
            None
        }
    }
}

/// Position of a longitude within its rashi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 1-based sign number.
    pub sign: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// 1-based sign number of a sidereal longitude: ⌊lon/30⌋ + 1, at most 12.
pub fn sign_number(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon / RASHI_SPAN).floor() as u8 + 1).min(12)
}

/// Degrees elapsed within the sign, [0, 30).
pub fn degree_in_sign(sidereal_lon_deg: f64) -> f64 {
    normalize_360(sidereal_lon_deg) % RASHI_SPAN
}

/// Rashi, sign number and in-sign position of a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let sign = sign_number(sidereal_lon_deg);
    let degrees_in_rashi = degree_in_sign(sidereal_lon_deg);
    RashiInfo {
        rashi: ALL_RASHIS[(sign - 1) as usize],
        sign,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        assert_eq!(sign_number(0.0), 1);
        assert_eq!(sign_number(29.999), 1);
        assert_eq!(sign_number(30.0), 2);
        assert_eq!(sign_number(359.999_999), 12);
    }

    #[test]
    fn sign_of_negative_longitude_wraps() {
        assert_eq!(sign_number(-1.0), 12);
    }

    #[test]
    fn degree_in_sign_basic() {
        assert!((degree_in_sign(45.5) - 15.5).abs() < 1e-12);
        assert!(degree_in_sign(60.0).abs() < 1e-12);
    }

    #[test]
    fn from_number_roundtrip() {
        for r in ALL_RASHIS {
            assert_eq!(Rashi::from_number(r.number()), Some(r));
        }
        assert_eq!(Rashi::from_number(0), None);
        assert_eq!(Rashi::from_number(13), None);
    }

    #[test]
    fn info_for_dhanu() {
        let info = rashi_from_longitude(256.647);
        assert_eq!(info.rashi, Rashi::Dhanu);
        assert_eq!(info.sign, 9);
        assert!((info.degrees_in_rashi - 16.647).abs() < 1e-9);
        assert_eq!(info.dms.degrees, 16);
        assert_eq!(info.dms.minutes, 38);
    }

    #[test]
    fn names() {
        assert_eq!(Rashi::Meena.western_name(), "Pisces");
        assert_eq!(Rashi::Mesha.hindi_name(), "मेष");
        assert_eq!(Rashi::Kumbha.name(), "Kumbha");
    }
}
