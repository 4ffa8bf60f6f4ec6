//! Calendar and angle primitives for kundali computation.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversion with the 1582 Gregorian switch
//! - A `chrono` bridge for zoned and naive moments
//! - Linear mean sidereal time
//! - Sign-aware degree/minute/second helpers

pub mod dms;
pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use dms::{Dms, deg_to_dms, dms_to_deg};
pub use error::TimeError;
pub use julian::{
    CalendarParts, DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
    jd_to_calendar, julian_centuries, julian_day,
};
pub use moment::{from_julian_day, naive_to_julian_day, to_julian_day};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
