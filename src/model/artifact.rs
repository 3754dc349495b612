//! Serialized artifact files produced by the offline training pipeline.
//!
//! A model directory holds three files: the decision function, the
//! feature-standardization transform, and the metadata descriptor. The
//! engine treats their production as an external step and only consumes them.

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Multinomial linear decision function: one coefficient row and one
/// intercept per severity class. Probabilities come from a softmax over the
/// per-class decision scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Per-class coefficient rows, `[classes][features]`.
    pub coefficients: Vec<Vec<f64>>,
    /// Per-class intercepts, `[classes]`.
    pub intercepts: Vec<f64>,
}

impl LinearModel {
    pub fn validate(&self, classes: usize, features: usize) -> Result<(), EngineError> {
        if self.coefficients.len() != classes {
            return Err(EngineError::contract(format!(
                "model has {} coefficient rows, expected {} classes",
                self.coefficients.len(),
                classes
            )));
        }
        if self.intercepts.len() != classes {
            return Err(EngineError::contract(format!(
                "model has {} intercepts, expected {} classes",
                self.intercepts.len(),
                classes
            )));
        }
        for (class, row) in self.coefficients.iter().enumerate() {
            if row.len() != features {
                return Err(EngineError::contract(format!(
                    "coefficient row for class {} has {} entries, expected {} features",
                    class,
                    row.len(),
                    features
                )));
            }
        }
        Ok(())
    }

    /// Raw per-class decision scores `W·x + b` for a standardized vector.
    pub fn decision_scores(&self, features: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect()
    }
}

/// Per-feature mean/scale standardization fixed at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn validate(&self, features: usize) -> Result<(), EngineError> {
        if self.mean.len() != features || self.scale.len() != features {
            return Err(EngineError::contract(format!(
                "scaler dimensions {}x{} do not match {} features",
                self.mean.len(),
                self.scale.len(),
                features
            )));
        }
        Ok(())
    }

    /// Standardize a raw feature vector. Zero-variance features pass through
    /// centered but unscaled.
    pub fn transform(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect()
    }
}

/// Metadata descriptor saved alongside the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_name: String,
    /// Held-out accuracy as a fraction.
    pub accuracy: f64,
    /// Mean cross-validation accuracy as a fraction.
    #[serde(default)]
    pub cv_mean: f64,
    /// Feature order the model was trained on.
    pub features: Vec<String>,
    /// Class index (as string key) to display label.
    pub classes: BTreeMap<String, String>,
    #[serde(default)]
    pub training_samples: u64,
    #[serde(default)]
    pub feature_importance: HashMap<String, f64>,
}

impl ModelMetadata {
    pub fn validate(&self, classes: usize) -> Result<(), EngineError> {
        if self.features.is_empty() {
            return Err(EngineError::contract(
                "metadata declares an empty feature order",
            ));
        }
        if self.classes.len() != classes {
            return Err(EngineError::contract(format!(
                "metadata declares {} classes, expected {}",
                self.classes.len(),
                classes
            )));
        }
        Ok(())
    }
}
