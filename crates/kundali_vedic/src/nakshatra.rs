//! Nakshatra (lunar mansion) and pada lookup.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20', each
//! with 4 padas of 3 deg 20'. Numbers are 1-based throughout.

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 1-based nakshatra number (Ashwini=1 .. Revati=27).
    pub fn number(self) -> u8 {
        ALL_NAKSHATRAS
            .iter()
            .position(|&n| n == self)
            .map_or(0, |i| i as u8 + 1)
    }

    /// Nakshatra for a 1-based number, `None` outside 1..=27.
    pub fn from_number(number: u8) -> Option<Self> {
        let idx = usize::from(number).checked_sub(1)?;
        ALL_NAKSHATRAS.get(idx).copied()
    }
}

/// Nakshatra placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 1-based nakshatra number.
    pub number: u8,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
}

/// 1-based nakshatra number: ⌊lon·27/360⌋ + 1, at most 27.
pub fn nakshatra_number(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon * 27.0 / 360.0).floor() as u8 + 1).min(27)
}

/// Pada: ⌊(lon·27·4/360) mod 4⌋ + 1.
pub fn pada(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    (((lon * 27.0 * 4.0 / 360.0) % 4.0).floor() as u8 + 1).min(4)
}

/// Fractional part of lon·27/360: how far the longitude sits into its
/// nakshatra.
pub fn elapsed_fraction(sidereal_lon_deg: f64) -> f64 {
    let lon = normalize_360(sidereal_lon_deg);
    (lon * 27.0 / 360.0) % 1.0
}

/// Determine nakshatra and pada from sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let number = nakshatra_number(sidereal_lon_deg);
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[usize::from(number - 1)],
        number,
        pada: pada(sidereal_lon_deg),
        elapsed_fraction: elapsed_fraction(sidereal_lon_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ashwini_at_zero() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.number, 1);
        assert_eq!(info.pada, 1);
        assert!(info.elapsed_fraction.abs() < 1e-15);
    }

    #[test]
    fn revati_near_360() {
        let info = nakshatra_from_longitude(359.999);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.number, 27);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn pada_steps_every_three_and_a_third_degrees() {
        assert_eq!(pada(PADA_SPAN * 0.5), 1);
        assert_eq!(pada(PADA_SPAN * 1.5), 2);
        assert_eq!(pada(PADA_SPAN * 2.5), 3);
        assert_eq!(pada(PADA_SPAN * 3.5), 4);
        assert_eq!(pada(PADA_SPAN * 4.5), 1);
    }

    #[test]
    fn rohini_start() {
        // 40 deg is exactly the start of Rohini.
        assert_eq!(nakshatra_number(40.0), 4);
        assert_eq!(nakshatra_from_longitude(40.0).nakshatra, Nakshatra::Rohini);
    }

    #[test]
    fn midpoint_fraction() {
        let f = elapsed_fraction(NAKSHATRA_SPAN_27 * 10.5);
        assert!((f - 0.5).abs() < 1e-9, "f = {f}");
    }

    #[test]
    fn number_roundtrip() {
        for n in ALL_NAKSHATRAS {
            assert_eq!(Nakshatra::from_number(n.number()), Some(n));
        }
        assert_eq!(Nakshatra::from_number(0), None);
        assert_eq!(Nakshatra::from_number(28), None);
    }
}
