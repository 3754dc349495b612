// Test utility module for hemoscan integration tests
#![allow(dead_code)]

use hemoscan::core::{PatientRecord, Severity, SEVERITY_CLASSES};
use hemoscan::features::FEATURE_COLUMNS;
use hemoscan::model::{ClassifierGateway, METADATA_FILE, MODEL_FILE, SCALER_FILE};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn canonical_features() -> Vec<String> {
    FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect()
}

/// Write a consistent artifact directory with the given feature order.
///
/// The model is intercept-only (all coefficients zero), so the predicted
/// class is fixed by the largest intercept regardless of input.
pub fn write_artifact_with_features(
    dir: &Path,
    intercepts: [f64; SEVERITY_CLASSES],
    accuracy: f64,
    features: &[String],
) {
    let n = features.len();
    let model = json!({
        "coefficients": vec![vec![0.0; n]; SEVERITY_CLASSES],
        "intercepts": intercepts.to_vec(),
    });
    let scaler = json!({
        "mean": vec![0.0; n],
        "scale": vec![1.0; n],
    });
    let metadata = json!({
        "model_name": "ensemble",
        "accuracy": accuracy,
        "cv_mean": accuracy,
        "features": features,
        "classes": {
            "0": "Normal",
            "1": "Mild Anemia",
            "2": "Moderate Anemia",
            "3": "Severe Anemia",
        },
        "training_samples": 12000,
    });

    fs::write(
        dir.join(MODEL_FILE),
        serde_json::to_string_pretty(&model).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(SCALER_FILE),
        serde_json::to_string_pretty(&scaler).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(METADATA_FILE),
        serde_json::to_string_pretty(&metadata).unwrap(),
    )
    .unwrap();
}

pub fn write_artifact(dir: &Path, intercepts: [f64; SEVERITY_CLASSES], accuracy: f64) {
    write_artifact_with_features(dir, intercepts, accuracy, &canonical_features());
}

/// Gateway whose intercept-only model always predicts `severity`.
pub fn gateway_predicting(severity: Severity) -> (TempDir, ClassifierGateway) {
    let dir = TempDir::new().unwrap();
    let mut intercepts = [0.0; SEVERITY_CLASSES];
    intercepts[severity.index()] = 6.0;
    write_artifact(dir.path(), intercepts, 0.968);
    let gateway = ClassifierGateway::load(dir.path()).unwrap();
    (dir, gateway)
}

pub fn patient(fields: &[(&str, f64)]) -> PatientRecord {
    fields
        .iter()
        .fold(PatientRecord::new(), |record, (name, value)| {
            record.with(name, *value)
        })
}
