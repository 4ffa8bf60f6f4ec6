//! Error types for calendar conversions.

use thiserror::Error;

/// Errors from Julian Day ↔ calendar conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The Julian Day is NaN or infinite.
    #[error("julian day {0} is not finite")]
    NonFiniteDay(f64),
    /// The computed calendar date has no counterpart on the proleptic
    /// Gregorian calendar (e.g. a Julian-only leap day before 1582).
    #[error("calendar date {year:04}-{month:02}-{day:02} cannot be represented")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    /// The instant falls outside the range supported by `chrono`.
    #[error("julian day {0} is outside the supported date range")]
    OutOfRange(f64),
}
