//! Julian Day ↔ calendar conversion.
//!
//! Dates before 1582-10-15 are read with the Julian leap-year rule and dates
//! on or after it with the Gregorian rule (Meeus, "Astronomical Algorithms",
//! Ch. 7). Calendar components are taken as given: a date such as
//! 1582-10-10 is simply interpreted as a Julian-calendar date.

/// Julian Date of the J2000.0 reference epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First integer day number (JD + 0.5, truncated) on the Gregorian calendar.
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// First Gregorian calendar date.
const GREGORIAN_REFORM_DATE: (i32, u32, u32) = (1582, 10, 15);

/// Calendar date recovered from a Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Fraction of the day elapsed since midnight, [0, 1) for JD >= 0.
    pub day_fraction: f64,
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Whether a calendar date falls on or after the Gregorian reform.
pub fn is_gregorian(year: i32, month: u32, day: u32) -> bool {
    (year, month, day) >= GREGORIAN_REFORM_DATE
}

/// Julian Day for a calendar date plus a fraction of the day.
///
/// January and February count as months 13 and 14 of the previous year;
/// the reform test runs on those shifted components.
pub fn julian_day(year: i32, month: u32, day: u32, day_fraction: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let b: i64 = if is_gregorian(y, m, day) {
        let a = i64::from(y).div_euclid(100);
        2 - a + a.div_euclid(4)
    } else {
        0
    };

    let whole = (365.25 * (i64::from(y) + 4716) as f64) as i64
        + (30.6001 * f64::from(m + 1)) as i64
        + i64::from(day)
        + b;
    whole as f64 - 1524.5 + day_fraction
}

/// Julian Day from a year, month and fractional day of month.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor();
    julian_day(year, month, day as u32, day_frac - day)
}

/// Calendar date for a Julian Day.
///
/// Uses the Gregorian branch for day numbers on or after
/// [`GREGORIAN_REFORM_JDN`] and the Julian calendar before it.
pub fn jd_to_calendar(jd: f64) -> CalendarParts {
    let shifted = jd + 0.5;
    let z = shifted as i64;
    let f = shifted - z as f64;

    let a = if z >= GREGORIAN_REFORM_JDN {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25) as i64;
        z + 1 + alpha - alpha.div_euclid(4)
    } else {
        z
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25) as i64;
    let d = (365.25 * c as f64) as i64;
    let e = ((b - d) as f64 / 30.6001) as i64;

    let day = b - d - (30.6001 * e as f64) as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    CalendarParts {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        day_fraction: f,
    }
}
