//! Shared error types for the assessment engine.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for engine operations.
///
/// The per-request calculators are total functions and never fail; errors
/// arise only at artifact load time and at the classifier boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Classifier artifact file missing or unreadable.
    #[error("failed to load classifier artifact: {message}")]
    ArtifactLoad {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Artifact files are internally inconsistent (dimensions, class count).
    #[error("classifier artifact contract violation: {0}")]
    ArtifactContract(String),

    /// Configuration file errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// The feature order computed by the engine does not match the order the
    /// artifact metadata declares. Never recovered by truncation or
    /// reordering: a misaligned vector is clinically meaningless.
    #[error("feature order mismatch: engine computes {expected:?}, artifact declares {declared:?}")]
    FeatureOrderMismatch {
        expected: Vec<String>,
        declared: Vec<String>,
    },

    /// A feature vector of the wrong length was passed to the classifier.
    #[error("feature vector length {actual} does not match model dimension {expected}")]
    FeatureVectorLength { expected: usize, actual: usize },

    /// The classifier returned a probability vector that does not sum to ~1.
    /// Surfaced rather than normalized silently.
    #[error("class probabilities sum to {sum}, expected 1")]
    ProbabilityIntegrity { sum: f64 },
}

impl EngineError {
    /// Create an artifact load error with path context.
    pub fn artifact_load(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ArtifactLoad {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create an artifact load error wrapping an I/O failure.
    pub fn artifact_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::ArtifactLoad {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Create an artifact contract violation error.
    pub fn contract(message: impl Into<String>) -> Self {
        Self::ArtifactContract(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Path associated with the error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ArtifactLoad { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}
