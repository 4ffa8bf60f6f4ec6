//! Short general notes for each mahadasha lord.

use serde::Serialize;

use crate::graha::Graha;

/// Note returned for a lord with no entry.
pub const GENERIC_NOTE: &str = "Consult astrologer for specific predictions";

/// General, career, health and relationship notes for a period lord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashaInterpretation {
    pub general: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<&'static str>,
}

impl DashaInterpretation {
    const fn full(
        general: &'static str,
        career: &'static str,
        health: &'static str,
        relationships: &'static str,
    ) -> Self {
        Self {
            general,
            career: Some(career),
            health: Some(health),
            relationships: Some(relationships),
        }
    }

    /// Fallback carrying only the generic note.
    pub const fn generic() -> Self {
        Self {
            general: GENERIC_NOTE,
            career: None,
            health: None,
            relationships: None,
        }
    }
}

/// Notes for a period lord.
pub const fn interpretation(lord: Graha) -> DashaInterpretation {
    match lord {
        Graha::Surya => DashaInterpretation::full(
            "Authority, government favor, success in leadership roles",
            "Promotion, recognition, government jobs",
            "Heart, eyes, bones - take care",
            "Ego conflicts possible",
        ),
        Graha::Chandra => DashaInterpretation::full(
            "Emotional growth, travel, public recognition",
            "Success in creative fields, public relations",
            "Mental health, stomach issues",
            "Strong emotional bonds",
        ),
        Graha::Mangal => DashaInterpretation::full(
            "Energy, courage, property gains",
            "Technical fields, sports, military",
            "Blood pressure, accidents - be careful",
            "Passionate but conflict prone",
        ),
        Graha::Buddh => DashaInterpretation::full(
            "Communication, learning, business success",
            "Writing, teaching, commerce",
            "Nervous system, skin issues",
            "Good communication with partner",
        ),
        Graha::Guru => DashaInterpretation::full(
            "Wisdom, spirituality, children's happiness",
            "Teaching, law, consulting",
            "Liver, weight gain",
            "Marriage prospects, harmony",
        ),
        Graha::Shukra => DashaInterpretation::full(
            "Luxury, arts, beauty, relationships",
            "Arts, entertainment, fashion",
            "Reproductive system, diabetes",
            "Love, marriage, harmony",
        ),
        Graha::Shani => DashaInterpretation::full(
            "Discipline, hard work, delays but steady progress",
            "Slow but steady growth, mining, oil",
            "Chronic diseases, bones, teeth",
            "Delays in marriage, older partners",
        ),
        Graha::Rahu => DashaInterpretation::full(
            "Foreign connections, technology, sudden changes",
            "IT, foreign companies, unconventional fields",
            "Mysterious ailments, mental stress",
            "Unconventional relationships",
        ),
        Graha::Ketu => DashaInterpretation::full(
            "Spirituality, detachment, research",
            "Research, occult sciences, healing",
            "Mysterious diseases, accidents",
            "Detachment, spiritual connections",
        ),
    }
}

/// Notes for a lord given by name; unknown names get the generic note.
pub fn interpretation_by_name(name: &str) -> DashaInterpretation {
    Graha::from_name(name).map_or(DashaInterpretation::generic(), interpretation)
}
