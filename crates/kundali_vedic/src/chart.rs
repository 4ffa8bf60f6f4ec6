//! Chart types: placed points, houses and the chart snapshot.
//!
//! A [`Chart`] is immutable once built. Divisional charts are derived as new
//! values (see [`crate::kundali`]); nothing here mutates a chart in place.

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};
use kundali_time::{Dms, deg_to_dms};
use serde::{Deserialize, Serialize};

use crate::aspect::planetary_strength;
use crate::config::Locale;
use crate::graha::{Graha, sign_lord_name};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{Rashi, degree_in_sign, sign_number};

/// Name used for the ascendant pseudo-body.
pub const ASCENDANT_NAME: &str = "Ascendant";

/// A point placed in a chart: one of the grahas or the lagna itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPoint {
    Graha(Graha),
    Lagna,
}

impl ChartPoint {
    /// English name as used in records and name lookups.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Lagna => ASCENDANT_NAME,
        }
    }
}

/// Which chart a snapshot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    /// Natal (rashi) chart.
    Lagna,
    /// Harmonic chart D<n>.
    Divisional(u16),
}

impl Display for ChartType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lagna => write!(f, "lagna"),
            Self::Divisional(n) => write!(f, "D{n}"),
        }
    }
}

/// Sidereal placement of one chart point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub point: ChartPoint,
    /// Sidereal longitude, degrees in [0, 360).
    pub longitude: f64,
    /// Mean daily motion, degrees per day (0 for the lagna).
    pub speed: f64,
    pub is_retrograde: bool,
    /// 1-based house.
    pub house: u8,
}

impl PlanetPosition {
    pub fn name(&self) -> &'static str {
        self.point.name()
    }

    /// 1-based sign number.
    pub fn sign(&self) -> u8 {
        sign_number(self.longitude)
    }

    pub fn rashi(&self) -> Rashi {
        Rashi::from_number(self.sign()).unwrap_or(Rashi::Meena)
    }

    /// Degrees within the sign, [0, 30).
    pub fn degree(&self) -> f64 {
        degree_in_sign(self.longitude)
    }

    pub fn dms(&self) -> Dms {
        deg_to_dms(self.degree())
    }

    /// In-sign position as whole degrees, minutes and seconds, e.g. `15°30'0"`.
    pub fn dms_string(&self) -> String {
        let dms = self.dms();
        format!(
            "{}°{}'{}\"",
            dms.degrees,
            dms.minutes,
            dms.seconds.trunc() as u32
        )
    }

    pub fn nakshatra_info(&self) -> NakshatraInfo {
        nakshatra_from_longitude(self.longitude)
    }

    /// 1-based nakshatra number.
    pub fn nakshatra(&self) -> u8 {
        self.nakshatra_info().number
    }

    pub fn pada(&self) -> u8 {
        self.nakshatra_info().pada
    }

    /// Sign-position strength in [0, 100].
    pub fn strength(&self) -> f64 {
        planetary_strength(self.longitude, self.sign())
    }

    fn to_record(self, locale: Locale) -> PlanetRecord {
        let nak = self.nakshatra_info();
        PlanetRecord {
            name: self.name().to_string(),
            longitude: self.longitude,
            sign: self.sign(),
            sign_name: locale.sign_name(self.rashi()).to_string(),
            degree: self.degree(),
            dms: self.dms_string(),
            nakshatra: nak.number,
            nakshatra_name: nak.nakshatra.name().to_string(),
            nakshatra_pada: nak.pada,
            house: self.house,
            speed: self.speed,
            is_retrograde: self.is_retrograde,
        }
    }
}

/// One equal house.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    /// 1-based house number.
    pub number: u8,
    /// English name of the lord of the cusp sign, or `"Unknown"`.
    pub lord: &'static str,
    /// 1-based sign of the cusp.
    pub sign: u8,
    /// Degrees of the cusp within its sign.
    pub degree: f64,
    /// Cusp longitude, degrees.
    pub cusp: f64,
    /// Names of the points placed in this house, in chart order.
    pub occupants: Vec<&'static str>,
}

impl House {
    pub(crate) fn from_cusp(number: u8, cusp: f64, planets: &[PlanetPosition]) -> Self {
        let sign = sign_number(cusp);
        Self {
            number,
            lord: sign_lord_name(sign),
            sign,
            degree: degree_in_sign(cusp),
            cusp,
            occupants: planets
                .iter()
                .filter(|p| p.house == number)
                .map(PlanetPosition::name)
                .collect(),
        }
    }

    pub fn is_occupied(&self) -> bool {
        !self.occupants.is_empty()
    }

    pub fn planet_count(&self) -> usize {
        self.occupants.len()
    }

    fn to_record(&self, locale: Locale) -> HouseRecord {
        HouseRecord {
            number: self.number,
            lord: self.lord.to_string(),
            sign: self.sign,
            sign_name: Rashi::from_number(self.sign)
                .map(|r| locale.sign_name(r).to_string())
                .unwrap_or_default(),
            degree: self.degree,
            cusp: self.cusp,
            planets: self.occupants.iter().map(|s| s.to_string()).collect(),
            is_occupied: self.is_occupied(),
            planet_count: self.planet_count(),
        }
    }
}

/// A natal or divisional chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub(crate) birth: DateTime<Utc>,
    pub(crate) jd: f64,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) timezone: String,
    pub(crate) chart_type: ChartType,
    pub(crate) ayanamsa: f64,
    pub(crate) ascendant: f64,
    pub(crate) planets: Vec<PlanetPosition>,
    pub(crate) houses: Vec<House>,
}

impl Chart {
    /// Birth moment in UTC.
    pub fn birth(&self) -> DateTime<Utc> {
        self.birth
    }

    /// Julian Day of the birth moment.
    pub fn julian_day(&self) -> f64 {
        self.jd
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Timezone label given at construction. Informational only.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn ayanamsa(&self) -> f64 {
        self.ayanamsa
    }

    /// Sidereal ascendant, degrees.
    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    /// Placed points in chart order.
    pub fn planets(&self) -> &[PlanetPosition] {
        &self.planets
    }

    /// The 12 houses, house 1 first.
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// Case-insensitive exact lookup by English name (or `"Ascendant"`).
    pub fn get_planet(&self, name: &str) -> Option<&PlanetPosition> {
        self.planets
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn graha(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets
            .iter()
            .find(|p| p.point == ChartPoint::Graha(graha))
    }

    /// House by 1-based number; `None` outside 1..=12.
    pub fn get_house(&self, number: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.number == number)
    }

    pub fn planets_in_house(&self, number: u8) -> Vec<&PlanetPosition> {
        self.planets.iter().filter(|p| p.house == number).collect()
    }

    pub fn planets_in_sign(&self, sign: u8) -> Vec<&PlanetPosition> {
        self.planets.iter().filter(|p| p.sign() == sign).collect()
    }

    /// Lord of the ascendant's sign (the chart ruler).
    pub fn lagna_lord(&self) -> &'static str {
        sign_lord_name(sign_number(self.ascendant))
    }

    /// Serializable snapshot with sign names in `locale`.
    pub fn to_record(&self, locale: Locale) -> ChartRecord {
        ChartRecord {
            birth_date: self.birth,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone.clone(),
            ayanamsa: self.ayanamsa,
            ascendant: self.ascendant,
            lagna_lord: self.lagna_lord().to_string(),
            chart_type: self.chart_type.to_string(),
            planets: self.planets.iter().map(|p| p.to_record(locale)).collect(),
            houses: self.houses.iter().map(|h| h.to_record(locale)).collect(),
        }
    }
}

/// Interchange form of a [`PlanetPosition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    pub longitude: f64,
    pub sign: u8,
    pub sign_name: String,
    pub degree: f64,
    pub dms: String,
    pub nakshatra: u8,
    pub nakshatra_name: String,
    pub nakshatra_pada: u8,
    pub house: u8,
    pub speed: f64,
    pub is_retrograde: bool,
}

/// Interchange form of a [`House`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    pub number: u8,
    pub lord: String,
    pub sign: u8,
    pub sign_name: String,
    pub degree: f64,
    pub cusp: f64,
    pub planets: Vec<String>,
    pub is_occupied: bool,
    pub planet_count: usize,
}

/// Interchange form of a [`Chart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub birth_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub ayanamsa: f64,
    pub ascendant: f64,
    pub lagna_lord: String,
    pub chart_type: String,
    pub planets: Vec<PlanetRecord>,
    pub houses: Vec<HouseRecord>,
}
