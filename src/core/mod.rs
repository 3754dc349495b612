//! Core domain types shared across the assessment pipeline.

use im::Vector;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of anemia severity classes the classifier distinguishes.
pub const SEVERITY_CLASSES: usize = 4;

/// Ordinal anemia severity class produced by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; SEVERITY_CLASSES] = [
        Severity::Normal,
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label used in reports and probability breakdowns.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::Mild => "Mild Anemia",
            Severity::Moderate => "Moderate Anemia",
            Severity::Severe => "Severe Anemia",
        }
    }

    /// Display color (hex) associated with the class.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Normal => "#22c55e",
            Severity::Mild => "#eab308",
            Severity::Moderate => "#f97316",
            Severity::Severe => "#ef4444",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the bare class index to match the classifier contract.
impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index() as u8)
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u8::deserialize(deserializer)?;
        Severity::from_index(index as usize)
            .ok_or_else(|| de::Error::custom(format!("severity class out of range: {index}")))
    }
}

/// A patient's raw feature values, keyed by feature name.
///
/// Records are partial: any subset of fields may be present. Each consumer
/// substitutes its documented clinical baseline for a missing field, so a
/// sparse record never fails an assessment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientRecord(BTreeMap<String, f64>);

impl PatientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: f64) {
        self.0.insert(field.to_string(), value);
    }

    /// Builder-style insertion.
    pub fn with(mut self, field: &str, value: f64) -> Self {
        self.set(field, value);
        self
    }

    pub fn value(&self, field: &str) -> Option<f64> {
        self.0.get(field).copied()
    }

    /// Field value with a clinical baseline substituted when absent.
    pub fn value_or(&self, field: &str, baseline: f64) -> f64 {
        self.value(field).unwrap_or(baseline)
    }

    /// Binary field interpreted as present/true when nonzero.
    pub fn flag(&self, field: &str) -> bool {
        self.value(field).is_some_and(|v| v != 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Severity class plus class probabilities, as returned by a classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifierOutput {
    pub severity: Severity,
    pub probabilities: [f64; SEVERITY_CLASSES],
}

impl ClassifierOutput {
    /// Probability of the predicted class, as a percentage.
    pub fn confidence(&self) -> f64 {
        self.probabilities
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max)
            * 100.0
    }

    pub fn probability_sum(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Per-class probability breakdown in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeverityProbabilities {
    pub normal: f64,
    pub mild: f64,
    pub moderate: f64,
    pub severe: f64,
}

impl SeverityProbabilities {
    pub fn from_distribution(probabilities: &[f64; SEVERITY_CLASSES]) -> Self {
        Self {
            normal: round2(probabilities[0] * 100.0),
            mild: round2(probabilities[1] * 100.0),
            moderate: round2(probabilities[2] * 100.0),
            severe: round2(probabilities[3] * 100.0),
        }
    }
}

/// Ordinal risk band derived from the composite score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Critical,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category tag on a recommendation record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Info,
    Diet,
    Urgent,
    Medical,
    Supplement,
    Pregnancy,
    Lifestyle,
    Followup,
}

/// A single actionable guidance record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub icon: String,
    pub title: String,
    pub text: String,
}

impl Recommendation {
    pub fn new(
        kind: RecommendationKind,
        icon: &str,
        title: &str,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            icon: icon.to_string(),
            title: title.to_string(),
            text: text.into(),
        }
    }
}

/// Urgency tag on an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Critical,
    Emergency,
    High,
    Warning,
}

/// An urgent or emergency notice, independent of recommendations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub action: String,
}

impl Alert {
    pub fn new(level: AlertLevel, message: &str, action: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
            action: action.to_string(),
        }
    }
}

/// Where a measured value sits relative to its normal range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Normal,
    Low,
    High,
}

/// Fixed clinical weight of a risk factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorImpact {
    High,
    Medium,
    Low,
}

/// Clinically defined healthy interval for a lab value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn status(&self, value: f64) -> FactorStatus {
        if value < self.low {
            FactorStatus::Low
        } else if value > self.high {
            FactorStatus::High
        } else {
            FactorStatus::Normal
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// One lab/vital value compared against its normal range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub normal_range: Range,
    pub status: FactorStatus,
    pub impact: FactorImpact,
}

impl RiskFactor {
    pub fn new(name: &str, value: f64, unit: &str, normal_range: Range, impact: FactorImpact) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            status: normal_range.status(value),
            normal_range,
            impact,
        }
    }
}

/// Direction of the projected risk trend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Stable,
}

/// Multi-horizon future anemia risk, in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FutureRisk {
    #[serde(rename = "3_months")]
    pub three_months: f64,
    #[serde(rename = "6_months")]
    pub six_months: f64,
    #[serde(rename = "12_months")]
    pub twelve_months: f64,
    pub trend: Trend,
    pub preventable: bool,
}

/// The complete assessment produced for one patient record.
///
/// Stateless and immutable: the same record against the same classifier
/// always serializes to identical bytes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub severity: Severity,
    pub severity_label: String,
    pub severity_color: String,
    pub confidence: f64,
    pub probabilities: SeverityProbabilities,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vector<Recommendation>,
    pub alerts: Vector<Alert>,
    pub risk_factors: Vector<RiskFactor>,
    pub future_risk: FutureRisk,
    pub model_accuracy: f64,
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_and_colors() {
        assert_eq!(Severity::Normal.label(), "Normal");
        assert_eq!(Severity::Severe.label(), "Severe Anemia");
        assert_eq!(Severity::Normal.color(), "#22c55e");
        assert_eq!(Severity::Severe.color(), "#ef4444");
    }

    #[test]
    fn severity_index_roundtrip() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_index(severity.index()), Some(severity));
        }
        assert_eq!(Severity::from_index(4), None);
    }

    #[test]
    fn severity_serializes_as_class_index() {
        let json = serde_json::to_string(&Severity::Moderate).unwrap();
        assert_eq!(json, "2");
        let back: Severity = serde_json::from_str("3").unwrap();
        assert_eq!(back, Severity::Severe);
        assert!(serde_json::from_str::<Severity>("7").is_err());
    }

    #[test]
    fn severity_ordering_follows_class_index() {
        assert!(Severity::Severe > Severity::Moderate);
        assert!(Severity::Mild >= Severity::Mild);
        assert!(Severity::Normal < Severity::Mild);
    }

    #[test]
    fn record_baseline_substitution() {
        let record = PatientRecord::new().with("hemoglobin", 9.5);
        assert_eq!(record.value_or("hemoglobin", 14.0), 9.5);
        assert_eq!(record.value_or("iron_level", 80.0), 80.0);
    }

    #[test]
    fn record_flag_is_nonzero() {
        let record = PatientRecord::new()
            .with("pregnancy", 1.0)
            .with("fatigue", 0.0);
        assert!(record.flag("pregnancy"));
        assert!(!record.flag("fatigue"));
        assert!(!record.flag("chronic_disease"));
    }

    #[test]
    fn range_status_tagging() {
        let range = Range::new(12.0, 16.0);
        assert_eq!(range.status(11.9), FactorStatus::Low);
        assert_eq!(range.status(12.0), FactorStatus::Normal);
        assert_eq!(range.status(16.0), FactorStatus::Normal);
        assert_eq!(range.status(16.1), FactorStatus::High);
    }

    #[test]
    fn confidence_is_max_probability_in_percent() {
        let output = ClassifierOutput {
            severity: Severity::Mild,
            probabilities: [0.1, 0.6, 0.2, 0.1],
        };
        assert!((output.confidence() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn probability_breakdown_rounds_to_percent() {
        let breakdown = SeverityProbabilities::from_distribution(&[0.12345, 0.5, 0.25, 0.12655]);
        assert_eq!(breakdown.normal, 12.35);
        assert_eq!(breakdown.mild, 50.0);
        assert_eq!(breakdown.severe, 12.66);
    }
}
