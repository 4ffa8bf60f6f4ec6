//! Core types for Vimshottari dasha periods.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::VimshottariConfig;
use crate::graha::Graha;

use super::balance::BirthBalance;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Hierarchical level of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

impl DashaLevel {
    /// Lowercase label used in records.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "mahadasha",
            Self::Antardasha => "antardasha",
        }
    }
}

/// A single dasha period. Both endpoints are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Length in dasha years (the birth balance for the first mahadasha).
    pub duration_years: f64,
    pub level: DashaLevel,
    /// Ruling mahadasha lord, for antardashas.
    pub parent: Option<Graha>,
}

impl DashaPeriod {
    /// Whole days between start and end.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whole days left at `at`; 0 once the period has ended.
    pub fn remaining_days(&self, at: DateTime<Utc>) -> i64 {
        if at > self.end {
            0
        } else {
            (self.end - at).num_days()
        }
    }

    /// Whether `at` lies within [start, end].
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// Interchange form, with remaining days and activity relative to `at`.
    pub fn to_record(&self, at: DateTime<Utc>) -> DashaPeriodRecord {
        DashaPeriodRecord {
            planet: self.lord.english_name().to_string(),
            start_date: self.start,
            end_date: self.end,
            duration_years: self.duration_years,
            duration_days: self.duration_days(),
            remaining_days: self.remaining_days(at),
            level: self.level.name().to_string(),
            parent_dasha: self.parent.map(|g| g.english_name().to_string()),
            is_active: self.is_active_at(at),
        }
    }
}

/// Convert dasha years to a duration rounded to the microsecond.
pub(crate) fn years_to_duration(years: f64, days_per_year: f64) -> Duration {
    Duration::microseconds((years * days_per_year * MICROS_PER_DAY).round() as i64)
}

/// Mahadasha sequence anchored at a birth moment.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaTimeline {
    pub(crate) birth: DateTime<Utc>,
    pub(crate) balance: BirthBalance,
    pub(crate) config: VimshottariConfig,
    pub(crate) mahadashas: Vec<DashaPeriod>,
}

impl DashaTimeline {
    pub fn birth(&self) -> DateTime<Utc> {
        self.birth
    }

    /// 1-based nakshatra of the natal Moon.
    pub fn moon_nakshatra(&self) -> u8 {
        self.balance.nakshatra
    }

    pub fn balance(&self) -> &BirthBalance {
        &self.balance
    }

    /// Contiguous mahadashas in order; each one starts where the previous
    /// ends.
    pub fn mahadashas(&self) -> &[DashaPeriod] {
        &self.mahadashas
    }

    /// Antardashas of one mahadasha, computed on demand.
    pub fn antardashas(&self, mahadasha: &DashaPeriod) -> Vec<DashaPeriod> {
        super::subperiod::antardashas(mahadasha, &self.config)
    }

    /// Records for every mahadasha relative to `at`.
    pub fn records(&self, at: DateTime<Utc>) -> Vec<DashaPeriodRecord> {
        self.mahadashas.iter().map(|p| p.to_record(at)).collect()
    }
}

/// Result of a current-period query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentDasha {
    pub mahadasha: Option<DashaPeriod>,
    pub antardasha: Option<DashaPeriod>,
    pub query_date: DateTime<Utc>,
}

impl CurrentDasha {
    pub fn to_record(&self) -> CurrentDashaRecord {
        CurrentDashaRecord {
            mahadasha: self.mahadasha.map(|p| p.to_record(self.query_date)),
            antardasha: self.antardasha.map(|p| p.to_record(self.query_date)),
            query_date: self.query_date,
        }
    }
}

/// Interchange form of a [`DashaPeriod`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriodRecord {
    pub planet: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_years: f64,
    pub duration_days: i64,
    pub remaining_days: i64,
    pub level: String,
    pub parent_dasha: Option<String>,
    pub is_active: bool,
}

/// Interchange form of a [`CurrentDasha`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentDashaRecord {
    pub mahadasha: Option<DashaPeriodRecord>,
    pub antardasha: Option<DashaPeriodRecord>,
    pub query_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn period() -> DashaPeriod {
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).single().unwrap();
        DashaPeriod {
            lord: Graha::Shukra,
            start,
            end: start + Duration::days(100),
            duration_years: 100.0 / DAYS_PER_YEAR,
            level: DashaLevel::Antardasha,
            parent: Some(Graha::Ketu),
        }
    }

    #[test]
    fn endpoints_are_inclusive() {
        let p = period();
        assert!(p.is_active_at(p.start));
        assert!(p.is_active_at(p.end));
        assert!(!p.is_active_at(p.end + Duration::microseconds(1)));
        assert!(!p.is_active_at(p.start - Duration::microseconds(1)));
    }

    #[test]
    fn remaining_days() {
        let p = period();
        assert_eq!(p.duration_days(), 100);
        assert_eq!(p.remaining_days(p.start), 100);
        assert_eq!(p.remaining_days(p.start + Duration::hours(36)), 98);
        assert_eq!(p.remaining_days(p.end + Duration::days(3)), 0);
    }

    #[test]
    fn record_fields() {
        let p = period();
        let r = p.to_record(p.start + Duration::days(10));
        assert_eq!(r.planet, "Venus");
        assert_eq!(r.level, "antardasha");
        assert_eq!(r.parent_dasha.as_deref(), Some("Ketu"));
        assert_eq!(r.remaining_days, 90);
        assert!(r.is_active);
    }

    #[test]
    fn year_duration_rounds_to_microseconds() {
        let d = years_to_duration(1.0, DAYS_PER_YEAR);
        assert_eq!(d, Duration::microseconds(31_557_600_000_000));
    }
}
