//! Bridge between `chrono` moments and Julian Days.
//!
//! Zoned moments are moved to UTC before conversion; naive moments are read
//! as UTC. The day fraction keeps microsecond resolution.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, jd_to_calendar, julian_day};

/// Largest Julian Day accepted by [`from_julian_day`].
///
/// Keeps the recovered year inside `i32`; `chrono` rejects anything it
/// cannot represent before this bound is reached.
pub const MAX_JULIAN_DAY: f64 = 100_000_000.0;

/// Julian Day of a zoned moment.
pub fn to_julian_day<Tz: TimeZone>(moment: &DateTime<Tz>) -> f64 {
    naive_to_julian_day(&moment.naive_utc())
}

/// Julian Day of a naive moment, interpreted as UTC.
pub fn naive_to_julian_day(moment: &NaiveDateTime) -> f64 {
    let micros = f64::from(moment.nanosecond() / 1_000);
    let seconds = f64::from(moment.second()) + micros / 1e6;
    let hours = f64::from(moment.hour()) + f64::from(moment.minute()) / 60.0 + seconds / 3600.0;
    julian_day(moment.year(), moment.month(), moment.day(), hours / 24.0)
}

/// UTC moment for a Julian Day, rounded to the nearest microsecond.
pub fn from_julian_day(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFiniteDay(jd));
    }
    if !(0.0..MAX_JULIAN_DAY).contains(&jd) {
        return Err(TimeError::OutOfRange(jd));
    }

    let parts = jd_to_calendar(jd);
    let invalid = TimeError::InvalidCalendarDate {
        year: parts.year,
        month: parts.month,
        day: parts.day,
    };
    let midnight = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(invalid)?;

    let micros = (parts.day_fraction * SECONDS_PER_DAY * 1e6).round() as i64;
    let naive = midnight
        .checked_add_signed(Duration::microseconds(micros))
        .ok_or(TimeError::OutOfRange(jd))?;
    Ok(Utc.from_utc_datetime(&naive))
}
