use std::fs;

use onboard_core::config::ModelConfig;
use onboard_core::errors::PredictionError;
use onboard_core::models::{FeatureVector, OnboardingStatus};
use onboard_prediction::model::{
    ClassifierArtifact, ModelBackedClassifier, ScalerArtifact, CLASS_LABELS,
};

fn identity_scaler() -> ScalerArtifact {
    ScalerArtifact {
        version: 1,
        mean: vec![0.0; 4],
        std: vec![1.0; 4],
    }
}

fn features(completion_rate: f64, overdue_tasks: u32) -> FeatureVector {
    FeatureVector {
        completion_rate,
        days_elapsed: 30,
        overdue_tasks,
        avg_time_per_task: 7.5,
    }
}

#[test]
fn class_index_mapping_is_pinned() {
    // Training contract: 0 -> at-risk, 1 -> delayed, 2 -> on-track.
    assert_eq!(CLASS_LABELS[0], OnboardingStatus::AtRisk);
    assert_eq!(CLASS_LABELS[1], OnboardingStatus::Delayed);
    assert_eq!(CLASS_LABELS[2], OnboardingStatus::OnTrack);
}

#[test]
fn intercept_bias_selects_the_matching_label() {
    for (idx, want) in CLASS_LABELS.iter().enumerate() {
        let mut intercepts = vec![0.0; 3];
        intercepts[idx] = 4.0;
        let model = ModelBackedClassifier::from_artifacts(
            ClassifierArtifact {
                version: 1,
                coefficients: vec![vec![0.0; 4]; 3],
                intercepts,
            },
            identity_scaler(),
        )
        .unwrap();

        let prediction = model.predict(&features(0.6, 1));
        assert_eq!(prediction.status, *want);
        assert_eq!(prediction.confidence, prediction.probabilities.get(*want));
    }
}

#[test]
fn probabilities_sum_to_one_hundred_within_rounding() {
    let model = ModelBackedClassifier::from_artifacts(
        ClassifierArtifact {
            version: 1,
            coefficients: vec![
                vec![-0.8, 0.1, 1.2, 0.0],
                vec![-1.5, 0.2, 0.9, 0.1],
                vec![1.7, -0.1, -1.3, 0.0],
            ],
            intercepts: vec![0.2, -0.1, 0.4],
        },
        ScalerArtifact {
            version: 1,
            mean: vec![0.55, 20.0, 1.0, 5.0],
            std: vec![0.25, 12.0, 1.5, 3.0],
        },
    )
    .unwrap();

    for vector in [features(0.9, 0), features(0.5, 2), features(0.1, 4)] {
        let prediction = model.predict(&vector);
        assert!((prediction.probabilities.sum() - 100.0).abs() < 0.1);
        assert!(prediction.confidence >= 0.0 && prediction.confidence <= 100.0);
        // Confidence is the max of the distribution.
        let max = [
            prediction.probabilities.on_track,
            prediction.probabilities.at_risk,
            prediction.probabilities.delayed,
        ]
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(prediction.confidence, max);
    }
}

#[test]
fn high_overdue_weight_drives_delayed() {
    // Only the overdue feature carries weight, on the delayed class.
    let model = ModelBackedClassifier::from_artifacts(
        ClassifierArtifact {
            version: 1,
            coefficients: vec![
                vec![0.0; 4],
                vec![0.0, 0.0, 2.0, 0.0],
                vec![0.0; 4],
            ],
            intercepts: vec![0.0; 3],
        },
        identity_scaler(),
    )
    .unwrap();

    let prediction = model.predict(&features(0.9, 5));
    assert_eq!(prediction.status, OnboardingStatus::Delayed);
}

// ── Artifact validation ───────────────────────────────────────────────────

#[test]
fn wrong_class_count_fails_to_load() {
    let err = ModelBackedClassifier::from_artifacts(
        ClassifierArtifact {
            version: 1,
            coefficients: vec![vec![0.0; 4]; 2],
            intercepts: vec![0.0; 2],
        },
        identity_scaler(),
    )
    .unwrap_err();
    assert!(matches!(err, PredictionError::DimensionMismatch { .. }));
}

#[test]
fn wrong_feature_count_fails_to_load() {
    let err = ModelBackedClassifier::from_artifacts(
        ClassifierArtifact {
            version: 1,
            coefficients: vec![vec![0.0; 3]; 3],
            intercepts: vec![0.0; 3],
        },
        identity_scaler(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        PredictionError::DimensionMismatch {
            expected: 4,
            actual: 3
        }
    ));
}

#[test]
fn zero_std_scaler_fails_to_load() {
    let err = ModelBackedClassifier::from_artifacts(
        ClassifierArtifact {
            version: 1,
            coefficients: vec![vec![0.0; 4]; 3],
            intercepts: vec![0.0; 3],
        },
        ScalerArtifact {
            version: 1,
            mean: vec![0.0; 4],
            std: vec![1.0, 0.0, 1.0, 1.0],
        },
    )
    .unwrap_err();
    assert!(matches!(err, PredictionError::InvalidArtifact { .. }));
}

// ── Loading from disk ─────────────────────────────────────────────────────

#[test]
fn loads_both_artifacts_from_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let classifier_path = dir.path().join("model.json");
    let scaler_path = dir.path().join("scaler.json");

    fs::write(
        &classifier_path,
        serde_json::to_string(&ClassifierArtifact {
            version: 1,
            coefficients: vec![vec![0.0; 4]; 3],
            intercepts: vec![0.0, 0.0, 2.0],
        })
        .unwrap(),
    )
    .unwrap();
    fs::write(
        &scaler_path,
        serde_json::to_string(&identity_scaler()).unwrap(),
    )
    .unwrap();

    let config = ModelConfig {
        classifier_path,
        scaler_path,
    };
    let model = ModelBackedClassifier::try_load(&config).unwrap();
    assert_eq!(model.predict(&features(0.8, 0)).status, OnboardingStatus::OnTrack);
}

#[test]
fn missing_artifact_selects_the_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelConfig {
        classifier_path: dir.path().join("missing-model.json"),
        scaler_path: dir.path().join("missing-scaler.json"),
    };
    assert!(ModelBackedClassifier::try_load(&config).is_none());
}

#[test]
fn corrupt_artifact_selects_the_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let classifier_path = dir.path().join("model.json");
    let scaler_path = dir.path().join("scaler.json");
    fs::write(&classifier_path, "not json").unwrap();
    fs::write(
        &scaler_path,
        serde_json::to_string(&identity_scaler()).unwrap(),
    )
    .unwrap();

    let config = ModelConfig {
        classifier_path,
        scaler_path,
    };
    assert!(ModelBackedClassifier::try_load(&config).is_none());
}
