//! Mahadasha generation.
//!
//! Walks the Vimshottari sequence from the birth lord: the first period is
//! the birth balance, every later one a full lord length. The walk is an
//! explicit bounded loop over `cycle_count` cycles of nine lords and stops
//! early once the whole days elapsed since birth exceed `horizon_days`.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::chart::Chart;
use crate::config::VimshottariConfig;
use crate::error::VedicError;
use crate::graha::Graha;

use super::balance::{BirthBalance, birth_balance};
use super::types::{DashaLevel, DashaPeriod, DashaTimeline, years_to_duration};
use super::vimshottari_data::VIMSHOTTARI_SEQUENCE;

/// Contiguous mahadashas starting at `birth`.
pub fn mahadashas(
    birth: DateTime<Utc>,
    balance: &BirthBalance,
    config: &VimshottariConfig,
) -> Vec<DashaPeriod> {
    let n = VIMSHOTTARI_SEQUENCE.len();
    let mut periods = Vec::with_capacity(usize::from(config.cycle_count) * n);
    let mut cursor = birth;

    for cycle in 0..config.cycle_count {
        for i in 0..n {
            let (lord, full_years) = VIMSHOTTARI_SEQUENCE[(balance.lord_index + i) % n];
            let years = if cycle == 0 && i == 0 {
                balance.balance_years
            } else {
                full_years
            };

            let Some(end) =
                cursor.checked_add_signed(years_to_duration(years, config.days_per_year))
            else {
                warn!(lord = lord.english_name(), "mahadasha end out of range, truncating timeline");
                return periods;
            };

            periods.push(DashaPeriod {
                lord,
                start: cursor,
                end,
                duration_years: years,
                level: DashaLevel::Mahadasha,
                parent: None,
            });
            cursor = end;

            if (cursor - birth).num_days() > config.horizon_days {
                return periods;
            }
        }
    }
    periods
}

/// Timeline from a birth moment and the Moon's sidereal longitude.
pub fn vimshottari_timeline(
    birth: DateTime<Utc>,
    moon_sidereal_lon: f64,
    config: &VimshottariConfig,
) -> DashaTimeline {
    let balance = birth_balance(moon_sidereal_lon);
    let mahadashas = mahadashas(birth, &balance, config);
    debug!(
        moon_nakshatra = balance.nakshatra,
        start_lord = balance.lord.english_name(),
        balance_years = balance.balance_years,
        periods = mahadashas.len(),
        "generated vimshottari timeline"
    );
    DashaTimeline {
        birth,
        balance,
        config: *config,
        mahadashas,
    }
}

/// Timeline seeded by a chart's Moon.
pub fn timeline_from_chart(
    chart: &Chart,
    config: &VimshottariConfig,
) -> Result<DashaTimeline, VedicError> {
    let moon = chart.graha(Graha::Chandra).ok_or(VedicError::MissingMoon)?;
    Ok(vimshottari_timeline(chart.birth(), moon.longitude, config))
}
