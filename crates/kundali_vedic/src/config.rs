//! Configuration for chart construction and dasha generation.
//!
//! Every field has a default, so a partial JSON document such as
//! `{"locale": "hi"}` is a complete configuration.

use serde::{Deserialize, Serialize};

use crate::dasha::DAYS_PER_YEAR;
use crate::error::VedicError;
use crate::rashi::Rashi;

/// Language used for sign names in records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    /// Sign name in this locale.
    pub const fn sign_name(self, rashi: Rashi) -> &'static str {
        match self {
            Self::En => rashi.western_name(),
            Self::Hi => rashi.hindi_name(),
        }
    }
}

/// Vimshottari timeline generation limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VimshottariConfig {
    /// Maximum number of full 9-lord cycles to walk.
    pub cycle_count: u8,
    /// Generation stops once whole days since birth exceed this.
    pub horizon_days: i64,
    /// Length of a dasha year in days.
    pub days_per_year: f64,
}

impl Default for VimshottariConfig {
    fn default() -> Self {
        Self {
            cycle_count: 3,
            horizon_days: 120 * 365,
            days_per_year: DAYS_PER_YEAR,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KundaliConfig {
    /// Timezone label stored on a chart when the caller gives none.
    pub default_timezone: String,
    pub locale: Locale,
    pub dasha: VimshottariConfig,
}

impl Default for KundaliConfig {
    fn default() -> Self {
        Self {
            default_timezone: "UTC".to_string(),
            locale: Locale::default(),
            dasha: VimshottariConfig::default(),
        }
    }
}

impl KundaliConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, VedicError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| VedicError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the dasha engine relies on.
    pub fn validate(&self) -> Result<(), VedicError> {
        let dasha = &self.dasha;
        if dasha.cycle_count == 0 {
            return Err(VedicError::Config("dasha.cycle_count must be at least 1".into()));
        }
        if dasha.horizon_days <= 0 {
            return Err(VedicError::Config("dasha.horizon_days must be positive".into()));
        }
        if !dasha.days_per_year.is_finite() || dasha.days_per_year <= 0.0 {
            return Err(VedicError::Config(
                "dasha.days_per_year must be a positive number".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = KundaliConfig::default();
        assert_eq!(c.default_timezone, "UTC");
        assert_eq!(c.locale, Locale::En);
        assert_eq!(c.dasha.cycle_count, 3);
        assert_eq!(c.dasha.horizon_days, 43_800);
        assert!((c.dasha.days_per_year - 365.25).abs() < 1e-15);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = KundaliConfig::from_json_str(r#"{"locale": "hi", "dasha": {"cycle_count": 2}}"#)
            .unwrap();
        assert_eq!(c.locale, Locale::Hi);
        assert_eq!(c.dasha.cycle_count, 2);
        assert_eq!(c.dasha.horizon_days, 43_800);
        assert_eq!(c.default_timezone, "UTC");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(KundaliConfig::from_json_str("{}").unwrap(), KundaliConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            KundaliConfig::from_json_str("{locale"),
            Err(VedicError::Config(_))
        ));
        assert!(matches!(
            KundaliConfig::from_json_str(r#"{"locale": "fr"}"#),
            Err(VedicError::Config(_))
        ));
    }

    #[test]
    fn zero_cycles_rejected() {
        assert!(matches!(
            KundaliConfig::from_json_str(r#"{"dasha": {"cycle_count": 0}}"#),
            Err(VedicError::Config(_))
        ));
    }

    #[test]
    fn locale_sign_names() {
        assert_eq!(Locale::En.sign_name(Rashi::Simha), "Leo");
        assert_eq!(Locale::Hi.sign_name(Rashi::Simha), "सिंह");
    }
}
