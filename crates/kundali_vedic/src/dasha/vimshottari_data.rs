//! Vimshottari lord sequence and period lengths.
//!
//! Nine lords rule in a fixed order; each nakshatra hands the first
//! mahadasha to the lord at (nakshatra − 1) mod 9 in this sequence.

use crate::graha::Graha;

/// Length of a full Vimshottari cycle, years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Lord sequence with full mahadasha lengths in years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Position of a lord in the sequence.
pub fn sequence_index(lord: Graha) -> Option<usize> {
    VIMSHOTTARI_SEQUENCE.iter().position(|&(g, _)| g == lord)
}

/// Full mahadasha length of a lord, years.
pub fn mahadasha_years(lord: Graha) -> Option<f64> {
    sequence_index(lord).map(|i| VIMSHOTTARI_SEQUENCE[i].1)
}

/// Sequence index of the lord owning a 1-based nakshatra.
pub fn lord_index_for_nakshatra(nakshatra: u8) -> usize {
    usize::from(nakshatra.saturating_sub(1)) % VIMSHOTTARI_SEQUENCE.len()
}
