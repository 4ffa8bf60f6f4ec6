//! Natal and divisional chart construction.
//!
//! [`ChartBuilder`] owns a [`KundaliConfig`] and ties together the
//! ephemeris, lagna, bhava and amsha modules. The free functions at the
//! bottom use the default configuration.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use kundali_time::to_julian_day;
use tracing::debug;

use crate::amsha::{division_name, divisional_longitude};
use crate::ayanamsha::ayanamsa_deg;
use crate::bhava::{house_cusps, house_of};
use crate::chart::{Chart, ChartPoint, ChartRecord, ChartType, House, PlanetPosition};
use crate::config::KundaliConfig;
use crate::dasha::{DashaTimeline, timeline_from_chart};
use crate::ephemeris::{daily_motion, is_retrograde, sidereal_positions};
use crate::error::VedicError;
use crate::lagna::{GeoLocation, lagna_deg};

/// Builds charts and dasha timelines under one configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartBuilder {
    config: KundaliConfig,
}

impl ChartBuilder {
    pub fn new(config: KundaliConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KundaliConfig {
        &self.config
    }

    /// Natal chart for a zoned birth moment.
    ///
    /// `timezone` is a display label stored on the chart; the moment's own
    /// offset drives the computation. `None` uses the configured default.
    pub fn build_natal_chart<Tz: TimeZone>(
        &self,
        birth: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
        timezone: Option<&str>,
    ) -> Result<Chart, VedicError> {
        let location = GeoLocation::new(latitude, longitude)?;
        let birth = birth.with_timezone(&Utc);
        let jd = to_julian_day(&birth);
        let ayanamsa = ayanamsa_deg(jd);
        let ascendant = lagna_deg(jd, &location);

        let mut planets: Vec<PlanetPosition> = sidereal_positions(jd)
            .into_iter()
            .map(|(graha, lon)| PlanetPosition {
                point: ChartPoint::Graha(graha),
                longitude: lon,
                speed: daily_motion(graha).unwrap_or(0.0),
                is_retrograde: is_retrograde(graha),
                house: house_of(lon, ascendant),
            })
            .collect();
        planets.push(PlanetPosition {
            point: ChartPoint::Lagna,
            longitude: ascendant,
            speed: 0.0,
            is_retrograde: false,
            house: 1,
        });

        let houses: Vec<House> = house_cusps(ascendant)
            .iter()
            .zip(1u8..)
            .map(|(&cusp, number)| House::from_cusp(number, cusp, &planets))
            .collect();

        debug!(
            birth = %birth,
            jd,
            latitude,
            longitude,
            ayanamsa,
            ascendant,
            "built natal chart"
        );

        Ok(Chart {
            birth,
            jd,
            latitude,
            longitude,
            timezone: timezone
                .unwrap_or(self.config.default_timezone.as_str())
                .to_string(),
            chart_type: ChartType::Lagna,
            ayanamsa,
            ascendant,
            planets,
            houses,
        })
    }

    /// Natal chart for a moment without a zone, read as UTC.
    pub fn build_natal_chart_naive(
        &self,
        birth: &NaiveDateTime,
        latitude: f64,
        longitude: f64,
        timezone: Option<&str>,
    ) -> Result<Chart, VedicError> {
        self.build_natal_chart(&Utc.from_utc_datetime(birth), latitude, longitude, timezone)
    }

    /// Divisional chart D<division> derived from `chart`.
    ///
    /// Every placed graha is projected into the division and re-housed
    /// against the natal ascendant. The ascendant entry is dropped and the
    /// natal houses are kept as they are.
    pub fn derive_divisional_chart(
        &self,
        chart: &Chart,
        division: u16,
    ) -> Result<Chart, VedicError> {
        if division == 0 {
            return Err(VedicError::InvalidDivision(division));
        }

        let planets: Vec<PlanetPosition> = chart
            .planets
            .iter()
            .filter(|p| p.point != ChartPoint::Lagna)
            .map(|p| {
                let lon = divisional_longitude(p.longitude, division);
                PlanetPosition {
                    longitude: lon,
                    house: house_of(lon, chart.ascendant),
                    ..*p
                }
            })
            .collect();

        debug!(
            division,
            name = division_name(division),
            planets = planets.len(),
            "derived divisional chart"
        );

        Ok(Chart {
            chart_type: ChartType::Divisional(division),
            planets,
            ..chart.clone()
        })
    }

    /// Vimshottari timeline seeded by the chart's Moon.
    pub fn dasha_timeline(&self, chart: &Chart) -> Result<DashaTimeline, VedicError> {
        timeline_from_chart(chart, &self.config.dasha)
    }

    /// Chart record with sign names in the configured locale.
    pub fn chart_record(&self, chart: &Chart) -> ChartRecord {
        chart.to_record(self.config.locale)
    }
}

/// Natal chart with the default configuration.
pub fn build_natal_chart<Tz: TimeZone>(
    birth: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<Chart, VedicError> {
    ChartBuilder::default().build_natal_chart(birth, latitude, longitude, timezone)
}

/// Divisional chart with the default configuration.
pub fn derive_divisional_chart(chart: &Chart, division: u16) -> Result<Chart, VedicError> {
    ChartBuilder::default().derive_divisional_chart(chart, division)
}

/// Dasha timeline with the default configuration.
pub fn dasha_timeline(chart: &Chart) -> Result<DashaTimeline, VedicError> {
    ChartBuilder::default().dasha_timeline(chart)
}
