//! Composite risk scoring and risk-level banding.

pub mod alerts;
pub mod factors;
pub mod projection;
pub mod recommendations;

use crate::config::ScoringThresholds;
use crate::core::{round1, PatientRecord, RiskLevel, Severity};

const SEVERITY_STEP: f64 = 13.3;
const HEMOGLOBIN_DEFICIT_CEILING: f64 = 20.0;
const SYMPTOM_POINTS: f64 = 3.0;
const HISTORY_POINTS: f64 = 5.0;

const SYMPTOMS: [&str; 5] = [
    "fatigue",
    "pale_skin",
    "shortness_of_breath",
    "dizziness",
    "cold_hands_feet",
];

const HISTORY: [&str; 3] = ["chronic_disease", "pregnancy", "family_history_anemia"];

/// Deterministic weighted composite of severity, labs, demographics,
/// symptoms, and history.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    thresholds: ScoringThresholds,
}

impl RiskScorer {
    pub fn new(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    /// Composite 0-100 risk score, rounded to 1 decimal.
    ///
    /// Contributions are summed and the total clamped; only the
    /// hemoglobin-deficit term carries its own ceiling before summation.
    pub fn score(&self, record: &PatientRecord, severity: Severity) -> f64 {
        let mut score = severity.index() as f64 * SEVERITY_STEP;

        // Hemoglobin deficit, proportional to the sex-specific threshold
        let hb = record.value_or("hemoglobin", 14.0);
        let threshold = self
            .thresholds
            .hemoglobin_threshold(record.value_or("gender", 0.0));
        if hb < threshold {
            let deficit = (threshold - hb) / threshold;
            score += (deficit * 40.0).min(HEMOGLOBIN_DEFICIT_CEILING);
        }

        // Age bands, evaluated in priority order
        let age = record.value_or("age", 30.0);
        if age < 5.0 || age > 65.0 {
            score += 8.0;
        } else if age < 12.0 || age > 50.0 {
            score += 5.0;
        }

        let symptom_count = SYMPTOMS.iter().filter(|s| record.flag(s)).count();
        score += symptom_count as f64 * SYMPTOM_POINTS;

        for item in HISTORY {
            if record.flag(item) {
                score += HISTORY_POINTS;
            }
        }

        let diet = record.value_or("diet_quality", 1.0);
        if diet == 0.0 {
            score += 5.0;
        } else if diet == 1.0 {
            score += 2.0;
        }

        if record.value_or("iron_level", 80.0) < self.thresholds.low_iron {
            score += 5.0;
        }
        if record.value_or("ferritin", 100.0) < self.thresholds.low_ferritin {
            score += 5.0;
        }

        round1(score).min(100.0)
    }
}

/// Map a composite score to its ordinal risk band.
///
/// Bands are inclusive-low/exclusive-high; the final band includes 100.
pub fn risk_level(score: f64) -> RiskLevel {
    match score {
        s if s < 20.0 => RiskLevel::Low,
        s if s < 40.0 => RiskLevel::Moderate,
        s if s < 60.0 => RiskLevel::High,
        s if s < 80.0 => RiskLevel::VeryHigh,
        _ => RiskLevel::Critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> RiskScorer {
        RiskScorer::default()
    }

    #[test]
    fn severity_contributes_13_3_per_class() {
        let record = PatientRecord::new().with("diet_quality", 2.0);
        assert_eq!(scorer().score(&record, Severity::Normal), 0.0);
        assert_eq!(scorer().score(&record, Severity::Mild), 13.3);
        assert_eq!(scorer().score(&record, Severity::Severe), 39.9);
    }

    #[test]
    fn hemoglobin_deficit_uses_sex_specific_threshold() {
        let base = PatientRecord::new().with("diet_quality", 2.0).with("hemoglobin", 13.0);

        // Female threshold is 12.0, so 13.0 adds nothing
        let female = base.clone().with("gender", 0.0);
        assert_eq!(scorer().score(&female, Severity::Normal), 0.0);

        // Male threshold is 13.5: deficit (13.5-13)/13.5 * 40 = 1.481...
        let male = base.with("gender", 1.0);
        assert_eq!(scorer().score(&male, Severity::Normal), 1.5);
    }

    #[test]
    fn hemoglobin_deficit_is_capped_at_20() {
        let record = PatientRecord::new()
            .with("diet_quality", 2.0)
            .with("gender", 0.0)
            .with("hemoglobin", 2.0);
        // Uncapped deficit would be (12-2)/12*40 = 33.3
        assert_eq!(scorer().score(&record, Severity::Normal), 20.0);
    }

    #[test]
    fn age_bands_are_mutually_exclusive() {
        let base = PatientRecord::new().with("diet_quality", 2.0);
        assert_eq!(scorer().score(&base.clone().with("age", 3.0), Severity::Normal), 8.0);
        assert_eq!(scorer().score(&base.clone().with("age", 70.0), Severity::Normal), 8.0);
        assert_eq!(scorer().score(&base.clone().with("age", 10.0), Severity::Normal), 5.0);
        assert_eq!(scorer().score(&base.clone().with("age", 55.0), Severity::Normal), 5.0);
        assert_eq!(scorer().score(&base.with("age", 30.0), Severity::Normal), 0.0);
    }

    #[test]
    fn symptoms_history_diet_and_stores_accumulate() {
        let record = PatientRecord::new()
            .with("fatigue", 1.0)
            .with("dizziness", 1.0)
            .with("chronic_disease", 1.0)
            .with("diet_quality", 0.0)
            .with("iron_level", 40.0)
            .with("ferritin", 20.0);
        // 2 symptoms (6) + history (5) + poor diet (5) + iron (5) + ferritin (5)
        assert_eq!(scorer().score(&record, Severity::Normal), 26.0);
    }

    #[test]
    fn average_diet_adds_two_points_by_default() {
        // diet_quality baseline is 1 (average)
        assert_eq!(scorer().score(&PatientRecord::new(), Severity::Normal), 2.0);
    }

    #[test]
    fn total_clamps_at_100() {
        let record = PatientRecord::new()
            .with("gender", 0.0)
            .with("hemoglobin", 3.0)
            .with("age", 70.0)
            .with("fatigue", 1.0)
            .with("pale_skin", 1.0)
            .with("shortness_of_breath", 1.0)
            .with("dizziness", 1.0)
            .with("cold_hands_feet", 1.0)
            .with("chronic_disease", 1.0)
            .with("pregnancy", 1.0)
            .with("family_history_anemia", 1.0)
            .with("diet_quality", 0.0)
            .with("iron_level", 10.0)
            .with("ferritin", 5.0);
        assert_eq!(scorer().score(&record, Severity::Severe), 100.0);
    }

    #[test]
    fn risk_level_band_edges() {
        assert_eq!(risk_level(0.0), RiskLevel::Low);
        assert_eq!(risk_level(19.9), RiskLevel::Low);
        assert_eq!(risk_level(20.0), RiskLevel::Moderate);
        assert_eq!(risk_level(39.9), RiskLevel::Moderate);
        assert_eq!(risk_level(40.0), RiskLevel::High);
        assert_eq!(risk_level(59.9), RiskLevel::High);
        assert_eq!(risk_level(60.0), RiskLevel::VeryHigh);
        assert_eq!(risk_level(79.9), RiskLevel::VeryHigh);
        assert_eq!(risk_level(80.0), RiskLevel::Critical);
        assert_eq!(risk_level(100.0), RiskLevel::Critical);
    }
}
