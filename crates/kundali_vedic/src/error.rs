//! Error types for Vedic calculations.

use kundali_time::TimeError;
use thiserror::Error;

/// Errors from chart construction and dasha generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from calendar conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// The chart has no Moon entry to seed a dasha timeline.
    #[error("Moon position required for dasha calculation")]
    MissingMoon,
    /// Divisional chart requested with a zero division.
    #[error("invalid divisional chart D{0}: division must be at least 1")]
    InvalidDivision(u16),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}
