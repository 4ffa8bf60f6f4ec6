//! Point-in-time queries over a dasha timeline.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::types::{CurrentDasha, DashaPeriod, DashaTimeline};

impl DashaTimeline {
    /// First mahadasha whose [start, end] contains `at`.
    pub fn current_mahadasha(&self, at: DateTime<Utc>) -> Option<&DashaPeriod> {
        self.mahadashas.iter().find(|p| p.is_active_at(at))
    }

    /// Every mahadasha active at `at`. Two when `at` is exactly a boundary.
    pub fn active_periods(&self, at: DateTime<Utc>) -> Vec<&DashaPeriod> {
        self.mahadashas
            .iter()
            .filter(|p| p.is_active_at(at))
            .collect()
    }
}

/// Active mahadasha and antardasha at `at`.
///
/// Both are `None` before birth or past the end of the timeline.
pub fn current_period(timeline: &DashaTimeline, at: DateTime<Utc>) -> CurrentDasha {
    let mahadasha = timeline.current_mahadasha(at).copied();
    let antardasha = mahadasha.and_then(|maha| {
        timeline
            .antardashas(&maha)
            .into_iter()
            .find(|p| p.is_active_at(at))
    });
    debug!(
        query = %at,
        mahadasha = mahadasha.map(|p| p.lord.english_name()),
        antardasha = antardasha.map(|p| p.lord.english_name()),
        "current dasha query"
    );
    CurrentDasha {
        mahadasha,
        antardasha,
        query_date: at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    use crate::config::VimshottariConfig;
    use crate::dasha::mahadasha::vimshottari_timeline;
    use crate::graha::Graha;

    fn timeline() -> DashaTimeline {
        let birth = Utc.with_ymd_and_hms(1990, 5, 15, 14, 30, 0).single().unwrap();
        vimshottari_timeline(birth, 0.0, &VimshottariConfig::default())
    }

    #[test]
    fn before_birth_is_empty() {
        let tl = timeline();
        let q = current_period(&tl, tl.birth() - Duration::days(1));
        assert!(q.mahadasha.is_none());
        assert!(q.antardasha.is_none());
    }

    #[test]
    fn at_birth_first_sub_period() {
        let tl = timeline();
        let q = current_period(&tl, tl.birth());
        assert_eq!(q.mahadasha.map(|p| p.lord), Some(Graha::Ketu));
        assert_eq!(q.antardasha.map(|p| p.lord), Some(Graha::Ketu));
    }

    #[test]
    fn mid_timeline() {
        let tl = timeline();
        // Ketu 7y then Shukra 20y; 10 years in sits in Shukra.
        let at = tl.birth() + Duration::days(3653);
        let q = current_period(&tl, at);
        assert_eq!(q.mahadasha.map(|p| p.lord), Some(Graha::Shukra));
        let antar = q.antardasha.unwrap();
        assert_eq!(antar.parent, Some(Graha::Shukra));
        assert!(antar.is_active_at(at));
    }

    #[test]
    fn boundary_belongs_to_both_but_query_picks_first() {
        let tl = timeline();
        let boundary = tl.mahadashas()[0].end;
        assert_eq!(tl.active_periods(boundary).len(), 2);
        assert_eq!(
            tl.current_mahadasha(boundary).map(|p| p.lord),
            Some(Graha::Ketu)
        );
    }

    #[test]
    fn past_the_end_is_empty() {
        let tl = timeline();
        let last = tl.mahadashas()[tl.mahadashas().len() - 1];
        let q = current_period(&tl, last.end + Duration::days(1));
        assert!(q.mahadasha.is_none());
        assert!(q.antardasha.is_none());
    }
}
