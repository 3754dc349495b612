//! Classifier gateway: owns the loaded artifact, standardization transform,
//! and metadata, and exposes the single `classify` operation.
//!
//! The gateway is loaded once at startup, is immutable afterwards, and may be
//! shared by reference across any number of concurrent assessments. The
//! statistical model behind it is opaque: anything expressible as per-class
//! decision scores satisfies the contract, and other models can implement
//! [`Classify`] directly.

pub mod artifact;

pub use artifact::{LinearModel, ModelMetadata, StandardScaler};

use crate::core::{ClassifierOutput, Severity, SEVERITY_CLASSES};
use crate::errors::EngineError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// File names inside a model directory.
pub const MODEL_FILE: &str = "model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const METADATA_FILE: &str = "model_metadata.json";

/// Black-box classification capability.
pub trait Classify {
    /// Feature order the model expects, as declared by its metadata.
    fn feature_names(&self) -> &[String];

    /// Classify an ordered feature vector into a severity class plus class
    /// probabilities.
    fn classify(&self, features: &[f64]) -> Result<ClassifierOutput, EngineError>;

    /// Held-out accuracy reported by the training pipeline, as a fraction.
    fn reported_accuracy(&self) -> f64;
}

/// Descriptive model information for display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub model_name: String,
    /// Held-out accuracy in percent.
    pub accuracy: f64,
    /// Mean cross-validation accuracy in percent.
    pub cv_score: f64,
    pub features: Vec<String>,
    pub training_samples: u64,
    pub feature_importance: HashMap<String, f64>,
}

/// The artifact-backed classifier.
#[derive(Debug)]
pub struct ClassifierGateway {
    model: LinearModel,
    scaler: StandardScaler,
    metadata: ModelMetadata,
}

impl ClassifierGateway {
    /// Load the three artifact files from a model directory.
    ///
    /// # Errors
    /// Fatal if any file is absent or malformed, or if the files disagree on
    /// dimensions. The gateway cannot serve until a load succeeds.
    pub fn load(model_dir: &Path) -> Result<Self, EngineError> {
        let model: LinearModel = read_json(&model_dir.join(MODEL_FILE))?;
        let scaler: StandardScaler = read_json(&model_dir.join(SCALER_FILE))?;
        let metadata: ModelMetadata = read_json(&model_dir.join(METADATA_FILE))?;

        metadata.validate(SEVERITY_CLASSES)?;
        let features = metadata.features.len();
        model.validate(SEVERITY_CLASSES, features)?;
        scaler.validate(features)?;

        log::info!(
            "loaded {} classifier: {} features, accuracy {:.2}%",
            metadata.model_name,
            features,
            metadata.accuracy * 100.0
        );

        Ok(Self {
            model,
            scaler,
            metadata,
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Model information for display.
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            model_name: self.metadata.model_name.clone(),
            accuracy: crate::core::round2(self.metadata.accuracy * 100.0),
            cv_score: crate::core::round2(self.metadata.cv_mean * 100.0),
            features: self.metadata.features.clone(),
            training_samples: self.metadata.training_samples,
            feature_importance: self.metadata.feature_importance.clone(),
        }
    }
}

impl Classify for ClassifierGateway {
    fn feature_names(&self) -> &[String] {
        &self.metadata.features
    }

    fn classify(&self, features: &[f64]) -> Result<ClassifierOutput, EngineError> {
        let expected = self.metadata.features.len();
        if features.len() != expected {
            return Err(EngineError::FeatureVectorLength {
                expected,
                actual: features.len(),
            });
        }

        let scaled = self.scaler.transform(features);
        let scores = self.model.decision_scores(&scaled);
        let distribution = softmax(&scores);

        let (class, _) = distribution
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .ok_or_else(|| EngineError::contract("empty probability distribution"))?;
        let severity = Severity::from_index(class)
            .ok_or_else(|| EngineError::contract(format!("class index {class} out of range")))?;

        let mut probabilities = [0.0; SEVERITY_CLASSES];
        probabilities.copy_from_slice(&distribution);

        log::debug!(
            "classified as {} (p = {:.4})",
            severity.label(),
            probabilities[class]
        );

        Ok(ClassifierOutput {
            severity,
            probabilities,
        })
    }

    fn reported_accuracy(&self) -> f64 {
        self.metadata.accuracy
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, EngineError> {
    let raw = fs::read_to_string(path).map_err(|e| EngineError::artifact_io(path, e))?;
    serde_json::from_str(&raw)
        .map_err(|e| EngineError::artifact_load(format!("invalid JSON: {e}"), path))
}

/// Numerically stable softmax.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
