//! Assessment assembler: orchestrates the feature adapter, classifier, and
//! risk policies into the final assessment.

use crate::config::{EngineConfig, NormalRanges};
use crate::core::{
    round2, PatientRecord, RiskAssessment, SeverityProbabilities,
};
use crate::errors::EngineError;
use crate::features::{feature_vector, FEATURE_COLUMNS};
use crate::model::Classify;
use crate::risk::{self, alerts, factors, projection, recommendations, RiskScorer};

const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// The assessment engine.
///
/// Pure per request: the classifier handle is read-only, the threshold tables
/// are fixed at construction, and `assess` takes `&self`, so one engine may
/// serve any number of concurrent requests.
pub struct AssessmentEngine<C: Classify> {
    classifier: C,
    scorer: RiskScorer,
    ranges: NormalRanges,
}

impl<C: Classify> AssessmentEngine<C> {
    pub fn new(classifier: C, config: EngineConfig) -> Self {
        Self {
            classifier,
            scorer: RiskScorer::new(config.scoring),
            ranges: config.ranges,
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Produce the full risk assessment for one patient record.
    ///
    /// # Errors
    /// Fails when the classifier's declared feature order does not match the
    /// engine's, or when the returned probability vector violates the
    /// classifier contract. Missing patient fields are never an error.
    pub fn assess(&self, record: &PatientRecord) -> Result<RiskAssessment, EngineError> {
        self.check_feature_order()?;

        let features = feature_vector(record);
        let output = self.classifier.classify(&features)?;

        let sum = output.probability_sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(EngineError::ProbabilityIntegrity { sum });
        }

        let severity = output.severity;
        let risk_score = self.scorer.score(record, severity);
        let risk_level = risk::risk_level(risk_score);

        log::debug!(
            "assessed: severity={}, score={:.1}, level={}",
            severity.label(),
            risk_score,
            risk_level
        );

        Ok(RiskAssessment {
            severity,
            severity_label: severity.label().to_string(),
            severity_color: severity.color().to_string(),
            confidence: output.confidence(),
            probabilities: SeverityProbabilities::from_distribution(&output.probabilities),
            risk_score,
            risk_level,
            recommendations: recommendations::generate(record, severity, risk_score),
            alerts: alerts::generate(record, severity, risk_score),
            risk_factors: factors::analyze(record, &self.ranges),
            future_risk: projection::project(record, severity, risk_score),
            model_accuracy: round2(self.classifier.reported_accuracy() * 100.0),
        })
    }

    fn check_feature_order(&self) -> Result<(), EngineError> {
        let declared = self.classifier.feature_names();
        let matches = declared.len() == FEATURE_COLUMNS.len()
            && declared
                .iter()
                .zip(FEATURE_COLUMNS.iter())
                .all(|(d, e)| d == e);
        if !matches {
            return Err(EngineError::FeatureOrderMismatch {
                expected: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
                declared: declared.to_vec(),
            });
        }
        Ok(())
    }
}
