//! Vimshottari dasha (planetary period) engine.
//!
//! The Moon's natal nakshatra picks the first of nine period lords and how
//! much of its period remains at birth. Mahadashas then follow the fixed
//! 120-year sequence; antardashas subdivide any mahadasha on demand.

pub mod balance;
pub mod interpretation;
pub mod mahadasha;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari_data;

pub use balance::{BirthBalance, birth_balance};
pub use interpretation::{
    DashaInterpretation, GENERIC_NOTE, interpretation, interpretation_by_name,
};
pub use mahadasha::{mahadashas, timeline_from_chart, vimshottari_timeline};
pub use query::current_period;
pub use subperiod::antardashas;
pub use types::{
    CurrentDasha, CurrentDashaRecord, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaPeriodRecord,
    DashaTimeline,
};
pub use vimshottari_data::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, mahadasha_years, sequence_index,
};
