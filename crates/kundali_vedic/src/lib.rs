//! Vedic chart and dasha computation on a mean-motion sky.
//!
//! This crate provides:
//! - Linear ayanamsha and mean-motion sidereal longitudes of the seven
//!   classical grahas
//! - Lagna from mean sidereal time and equal-house cusps
//! - Natal chart assembly, divisional (amsha) charts and serializable
//!   chart records
//! - Vimshottari mahadasha/antardasha timelines with point-in-time queries
//! - Aspect and sign-strength helpers
//!
//! Positions come from a linear model and are not ephemeris-grade.

pub mod amsha;
pub mod aspect;
pub mod ayanamsha;
pub mod bhava;
pub mod chart;
pub mod config;
pub mod dasha;
pub mod ephemeris;
pub mod error;
pub mod graha;
pub mod kundali;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use amsha::{NAVAMSA, division_name, divisional_longitude};
pub use aspect::{
    ALL_ASPECTS, Aspect, DEFAULT_ORB_DEG, SEXTILE_ORB_DEG, angular_distance, aspects_between,
    exaltation_degree, is_conjunction, is_opposition, is_sextile, is_square, is_trine,
    planetary_strength,
};
pub use ayanamsha::{ayanamsa_deg, tropical_to_sidereal};
pub use bhava::{HOUSE_COUNT, house_cusps, house_of};
pub use chart::{
    ASCENDANT_NAME, Chart, ChartPoint, ChartRecord, ChartType, House, HouseRecord,
    PlanetPosition, PlanetRecord,
};
pub use config::{KundaliConfig, Locale, VimshottariConfig};
pub use dasha::{
    CurrentDasha, CurrentDashaRecord, DashaInterpretation, DashaLevel, DashaPeriod,
    DashaPeriodRecord, DashaTimeline, current_period,
};
pub use ephemeris::{
    MeanElements, daily_motion, mean_elements, sidereal_longitude, sidereal_positions,
    tropical_longitude,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, UNKNOWN_LORD, rashi_lord, sign_lord_name};
pub use kundali::{ChartBuilder, build_natal_chart, dasha_timeline, derive_divisional_chart};
pub use lagna::{GeoLocation, lagna_deg, obliquity_deg, tropical_lagna_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude,
    nakshatra_number, pada,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, degree_in_sign, rashi_from_longitude, sign_number};
pub use util::normalize_360;
