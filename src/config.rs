//! Clinical threshold tables.
//!
//! Scoring thresholds and factor-analysis normal ranges are deliberately two
//! independent tables: they agree on their defaults, but different clinical
//! guidelines may move one without the other.

use crate::core::Range;
use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Thresholds used by the composite risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// Hemoglobin threshold below which the deficit term applies, male (g/dL)
    #[serde(default = "default_male_hemoglobin")]
    pub male_hemoglobin: f64,

    /// Hemoglobin threshold below which the deficit term applies, female (g/dL)
    #[serde(default = "default_female_hemoglobin")]
    pub female_hemoglobin: f64,

    /// Serum iron below this adds the iron-deficiency points (µg/dL)
    #[serde(default = "default_low_iron")]
    pub low_iron: f64,

    /// Ferritin below this adds the depleted-stores points (ng/mL)
    #[serde(default = "default_low_ferritin")]
    pub low_ferritin: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            male_hemoglobin: default_male_hemoglobin(),
            female_hemoglobin: default_female_hemoglobin(),
            low_iron: default_low_iron(),
            low_ferritin: default_low_ferritin(),
        }
    }
}

impl ScoringThresholds {
    /// Sex-specific hemoglobin threshold (gender: 0 = female, 1 = male).
    pub fn hemoglobin_threshold(&self, gender: f64) -> f64 {
        if gender == 1.0 {
            self.male_hemoglobin
        } else {
            self.female_hemoglobin
        }
    }
}

fn default_male_hemoglobin() -> f64 {
    13.5
}
fn default_female_hemoglobin() -> f64 {
    12.0
}
fn default_low_iron() -> f64 {
    50.0
}
fn default_low_ferritin() -> f64 {
    30.0
}

/// Normal ranges used by the per-factor analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalRanges {
    #[serde(default = "default_hemoglobin_male")]
    pub hemoglobin_male: Range,

    #[serde(default = "default_hemoglobin_female")]
    pub hemoglobin_female: Range,

    #[serde(default = "default_iron")]
    pub iron: Range,

    #[serde(default = "default_ferritin")]
    pub ferritin: Range,

    #[serde(default = "default_rbc_male")]
    pub rbc_male: Range,

    #[serde(default = "default_rbc_female")]
    pub rbc_female: Range,

    #[serde(default = "default_bmi")]
    pub bmi: Range,
}

impl Default for NormalRanges {
    fn default() -> Self {
        Self {
            hemoglobin_male: default_hemoglobin_male(),
            hemoglobin_female: default_hemoglobin_female(),
            iron: default_iron(),
            ferritin: default_ferritin(),
            rbc_male: default_rbc_male(),
            rbc_female: default_rbc_female(),
            bmi: default_bmi(),
        }
    }
}

impl NormalRanges {
    /// Sex-specific hemoglobin range (gender: 0 = female, 1 = male).
    pub fn hemoglobin(&self, gender: f64) -> Range {
        if gender == 1.0 {
            self.hemoglobin_male
        } else {
            self.hemoglobin_female
        }
    }

    /// Sex-specific RBC count range (gender: 0 = female, 1 = male).
    pub fn rbc(&self, gender: f64) -> Range {
        if gender == 1.0 {
            self.rbc_male
        } else {
            self.rbc_female
        }
    }
}

fn default_hemoglobin_male() -> Range {
    Range::new(13.5, 17.5)
}
fn default_hemoglobin_female() -> Range {
    Range::new(12.0, 16.0)
}
fn default_iron() -> Range {
    Range::new(60.0, 170.0)
}
fn default_ferritin() -> Range {
    Range::new(20.0, 250.0)
}
fn default_rbc_male() -> Range {
    Range::new(4.5, 5.5)
}
fn default_rbc_female() -> Range {
    Range::new(4.0, 5.0)
}
fn default_bmi() -> Range {
    Range::new(18.5, 24.9)
}

/// Complete engine configuration: both threshold tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringThresholds,

    #[serde(default)]
    pub ranges: NormalRanges,
}

impl EngineConfig {
    /// Load configuration from a TOML file. Absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            EngineError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw)
            .map_err(|e| EngineError::config(format!("invalid config {}: {}", path.display(), e)))
    }
}
