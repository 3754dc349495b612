mod common;

use common::{canonical_features, gateway_predicting, write_artifact, write_artifact_with_features};
use hemoscan::config::EngineConfig;
use hemoscan::core::{PatientRecord, Severity};
use hemoscan::engine::AssessmentEngine;
use hemoscan::errors::EngineError;
use hemoscan::features::feature_vector;
use hemoscan::model::{Classify, ClassifierGateway, MODEL_FILE};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn missing_artifact_directory_is_fatal() {
    let err = ClassifierGateway::load(Path::new("/nonexistent/models")).unwrap_err();
    assert!(matches!(err, EngineError::ArtifactLoad { .. }));
}

#[test]
fn malformed_model_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), [1.0, 0.0, 0.0, 0.0], 0.95);
    fs::write(dir.path().join(MODEL_FILE), "not json").unwrap();

    let err = ClassifierGateway::load(dir.path()).unwrap_err();
    match err {
        EngineError::ArtifactLoad { message, .. } => assert!(message.contains("invalid JSON")),
        other => panic!("expected ArtifactLoad, got {other:?}"),
    }
}

#[test]
fn class_dimension_mismatch_is_a_contract_violation() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), [1.0, 0.0, 0.0, 0.0], 0.95);

    let n = canonical_features().len();
    let three_class = serde_json::json!({
        "coefficients": vec![vec![0.0; n]; 3],
        "intercepts": vec![0.0; 3],
    });
    fs::write(
        dir.path().join(MODEL_FILE),
        serde_json::to_string(&three_class).unwrap(),
    )
    .unwrap();

    let err = ClassifierGateway::load(dir.path()).unwrap_err();
    assert!(matches!(err, EngineError::ArtifactContract(_)));
}

#[test]
fn classify_rejects_wrong_vector_length() {
    let (_dir, gateway) = gateway_predicting(Severity::Normal);
    let err = gateway.classify(&[0.0; 5]).unwrap_err();
    match err {
        EngineError::FeatureVectorLength { expected, actual } => {
            assert_eq!(expected, canonical_features().len());
            assert_eq!(actual, 5);
        }
        other => panic!("expected FeatureVectorLength, got {other:?}"),
    }
}

#[test]
fn classify_returns_a_valid_distribution() {
    let (_dir, gateway) = gateway_predicting(Severity::Moderate);
    let vector = feature_vector(&PatientRecord::new());
    let output = gateway.classify(&vector).unwrap();

    assert_eq!(output.severity, Severity::Moderate);
    assert!((output.probability_sum() - 1.0).abs() < 1e-9);
    assert!(output.probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
    assert!(output.probabilities[2] > 0.9);
}

#[test]
fn engine_rejects_artifact_with_different_feature_order() {
    let dir = TempDir::new().unwrap();
    let mut features = canonical_features();
    features.swap(0, 1);
    write_artifact_with_features(dir.path(), [6.0, 0.0, 0.0, 0.0], 0.95, &features);

    let gateway = ClassifierGateway::load(dir.path()).unwrap();
    let engine = AssessmentEngine::new(gateway, EngineConfig::default());

    let err = engine.assess(&PatientRecord::new()).unwrap_err();
    assert!(matches!(err, EngineError::FeatureOrderMismatch { .. }));
}

#[test]
fn engine_rejects_artifact_with_truncated_feature_order() {
    let dir = TempDir::new().unwrap();
    let mut features = canonical_features();
    features.pop();
    write_artifact_with_features(dir.path(), [6.0, 0.0, 0.0, 0.0], 0.95, &features);

    let gateway = ClassifierGateway::load(dir.path()).unwrap();
    let engine = AssessmentEngine::new(gateway, EngineConfig::default());

    let err = engine.assess(&PatientRecord::new()).unwrap_err();
    assert!(matches!(err, EngineError::FeatureOrderMismatch { .. }));
}

#[test]
fn model_info_reports_percentages_and_features() {
    let (_dir, gateway) = gateway_predicting(Severity::Normal);
    let info = gateway.info();

    assert_eq!(info.model_name, "ensemble");
    assert_eq!(info.accuracy, 96.8);
    assert_eq!(info.cv_score, 96.8);
    assert_eq!(info.training_samples, 12000);
    assert_eq!(info.features, canonical_features());
}

#[test]
fn gateway_is_shareable_across_threads_by_reference() {
    let (_dir, gateway) = gateway_predicting(Severity::Mild);
    let engine = AssessmentEngine::new(gateway, EngineConfig::default());

    let record = PatientRecord::new().with("hemoglobin", 10.0);
    let baseline = engine.assess(&record).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let assessment = engine.assess(&record).unwrap();
                assert_eq!(assessment, baseline);
            });
        }
    });
}
