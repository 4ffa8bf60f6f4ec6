//! Antardasha (sub-period) generation.
//!
//! Sub-periods start with the mahadasha's own lord and follow the
//! Vimshottari order. Each lasts (full length / 120) of the mahadasha's
//! years. The walk stops as soon as the running end reaches the mahadasha
//! end; the last sub-period is not clipped.

use crate::config::VimshottariConfig;

use super::types::{DashaLevel, DashaPeriod, years_to_duration};
use super::vimshottari_data::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, sequence_index};

/// Antardashas of a mahadasha, at most nine.
pub fn antardashas(mahadasha: &DashaPeriod, config: &VimshottariConfig) -> Vec<DashaPeriod> {
    let Some(start_index) = sequence_index(mahadasha.lord) else {
        return Vec::new();
    };

    let n = VIMSHOTTARI_SEQUENCE.len();
    let mut periods = Vec::with_capacity(n);
    let mut cursor = mahadasha.start;

    for i in 0..n {
        let (lord, full_years) = VIMSHOTTARI_SEQUENCE[(start_index + i) % n];
        let years = (full_years / VIMSHOTTARI_TOTAL_YEARS) * mahadasha.duration_years;
        let Some(end) = cursor.checked_add_signed(years_to_duration(years, config.days_per_year))
        else {
            break;
        };

        periods.push(DashaPeriod {
            lord,
            start: cursor,
            end,
            duration_years: years,
            level: DashaLevel::Antardasha,
            parent: Some(mahadasha.lord),
        });
        cursor = end;

        if cursor >= mahadasha.end {
            break;
        }
    }
    periods
}
