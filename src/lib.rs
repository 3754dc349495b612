// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod features;
pub mod io;
pub mod model;
pub mod risk;

// Re-export commonly used types
pub use crate::config::{EngineConfig, NormalRanges, ScoringThresholds};

pub use crate::core::{
    Alert, AlertLevel, ClassifierOutput, FactorImpact, FactorStatus, FutureRisk, PatientRecord,
    Range, Recommendation, RecommendationKind, RiskAssessment, RiskFactor, RiskLevel, Severity,
    SeverityProbabilities, Trend, SEVERITY_CLASSES,
};

pub use crate::engine::AssessmentEngine;

pub use crate::errors::EngineError;

pub use crate::features::{feature_vector, DerivedIndices, FEATURE_COLUMNS};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::model::{
    Classify, ClassifierGateway, LinearModel, ModelInfo, ModelMetadata, StandardScaler,
};

pub use crate::risk::{risk_level, RiskScorer};
