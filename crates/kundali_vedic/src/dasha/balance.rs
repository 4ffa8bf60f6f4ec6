//! Birth balance: how much of the first mahadasha remains at birth.
//!
//! The Moon's progress through its nakshatra is the fraction of the
//! starting lord's period already spent.

use crate::graha::Graha;
use crate::nakshatra::{elapsed_fraction, nakshatra_number};

use super::vimshottari_data::{VIMSHOTTARI_SEQUENCE, lord_index_for_nakshatra};

/// Starting lord and its unexpired years at birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// 1-based nakshatra of the Moon.
    pub nakshatra: u8,
    /// Index of the starting lord in the Vimshottari sequence.
    pub lord_index: usize,
    pub lord: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Unexpired years of the first mahadasha.
    pub balance_years: f64,
}

/// Birth balance from the Moon's sidereal longitude.
pub fn birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let nakshatra = nakshatra_number(moon_sidereal_lon);
    let lord_index = lord_index_for_nakshatra(nakshatra);
    let (lord, full_years) = VIMSHOTTARI_SEQUENCE[lord_index];
    let fraction = elapsed_fraction(moon_sidereal_lon);
    BirthBalance {
        nakshatra,
        lord_index,
        lord,
        elapsed_fraction: fraction,
        balance_years: full_years * (1.0 - fraction),
    }
}
