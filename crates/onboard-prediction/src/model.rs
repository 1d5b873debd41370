//! Model-backed classification from externally trained artifacts.
//!
//! Two versioned JSON blobs are loaded once at process start: a multinomial
//! logistic-regression classifier and the standard scaler it was trained
//! with. If either is absent or invalid the classifier reports unavailable
//! and the engine runs rule-based for the rest of the process lifetime;
//! there is no per-request retry.

use std::path::Path;

use serde::{Deserialize, Serialize};

use onboard_core::config::ModelConfig;
use onboard_core::errors::PredictionError;
use onboard_core::models::{FeatureVector, OnboardingStatus, StatusProbabilities};

/// Class-index → status label mapping.
///
/// The index order is a silent contract with the training pipeline: class 0
/// is at-risk, class 1 is delayed, class 2 is on-track. Changing this order
/// requires retraining the artifacts.
pub const CLASS_LABELS: [OnboardingStatus; 3] = [
    OnboardingStatus::AtRisk,
    OnboardingStatus::Delayed,
    OnboardingStatus::OnTrack,
];

const CLASS_COUNT: usize = CLASS_LABELS.len();

/// Trained multinomial logistic-regression weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub version: u32,
    /// One row per class in [`CLASS_LABELS`] order, one column per feature.
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// Standard-scaler parameters captured at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub version: u32,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

/// A single model inference.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub status: OnboardingStatus,
    /// Max class probability as a percentage, rounded to 2 decimals.
    pub confidence: f64,
    pub probabilities: StatusProbabilities,
}

/// Wraps the classifier and scaler artifacts. Immutable after load; safe
/// for concurrent read access.
#[derive(Debug)]
pub struct ModelBackedClassifier {
    classifier: ClassifierArtifact,
    scaler: ScalerArtifact,
}

impl ModelBackedClassifier {
    /// Load both artifacts, validating their shapes against
    /// [`FeatureVector::DIM`] and [`CLASS_LABELS`].
    pub fn load(config: &ModelConfig) -> Result<Self, PredictionError> {
        let classifier: ClassifierArtifact = read_artifact(&config.classifier_path)?;
        let scaler: ScalerArtifact = read_artifact(&config.scaler_path)?;
        Self::from_artifacts(classifier, scaler)
    }

    /// Load, logging the outcome instead of surfacing it. `None` selects
    /// the rule-based path for the process lifetime.
    pub fn try_load(config: &ModelConfig) -> Option<Self> {
        match Self::load(config) {
            Ok(model) => {
                tracing::info!(
                    classifier = %config.classifier_path.display(),
                    scaler = %config.scaler_path.display(),
                    "model artifacts loaded; model-backed classification active"
                );
                Some(model)
            }
            Err(e) => {
                tracing::warn!(error = %e, "model unavailable; rule-based classification active");
                None
            }
        }
    }

    /// Build from already-parsed artifacts (used by tests and the loader).
    pub fn from_artifacts(
        classifier: ClassifierArtifact,
        scaler: ScalerArtifact,
    ) -> Result<Self, PredictionError> {
        validate_classifier(&classifier)?;
        validate_scaler(&scaler)?;
        Ok(Self { classifier, scaler })
    }

    /// Scale the features, score each class, and return the argmax label
    /// with its probability distribution.
    pub fn predict(&self, features: &FeatureVector) -> Prediction {
        let scaled = self.scale(features.as_array());

        let mut scores = [0.0f64; CLASS_COUNT];
        for (class_idx, score) in scores.iter_mut().enumerate() {
            let row = &self.classifier.coefficients[class_idx];
            *score = self.classifier.intercepts[class_idx]
                + row.iter().zip(scaled.iter()).map(|(w, x)| w * x).sum::<f64>();
        }

        let probs = softmax(scores);

        let (best_idx, best_prob) = probs
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .unwrap_or((0, 0.0));

        let mut probabilities = StatusProbabilities::zero();
        for (label, prob) in CLASS_LABELS.iter().zip(probs.iter()) {
            probabilities.set(*label, round2(prob * 100.0));
        }

        Prediction {
            status: CLASS_LABELS[best_idx],
            confidence: round2(best_prob * 100.0),
            probabilities,
        }
    }

    fn scale(&self, raw: [f64; FeatureVector::DIM]) -> [f64; FeatureVector::DIM] {
        let mut scaled = [0.0f64; FeatureVector::DIM];
        for (i, value) in raw.iter().enumerate() {
            scaled[i] = (value - self.scaler.mean[i]) / self.scaler.std[i];
        }
        scaled
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, PredictionError> {
    let raw = std::fs::read_to_string(path).map_err(|e| PredictionError::ArtifactUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| PredictionError::InvalidArtifact {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn validate_classifier(artifact: &ClassifierArtifact) -> Result<(), PredictionError> {
    if artifact.coefficients.len() != CLASS_LABELS.len()
        || artifact.intercepts.len() != CLASS_LABELS.len()
    {
        return Err(PredictionError::DimensionMismatch {
            expected: CLASS_LABELS.len(),
            actual: artifact.coefficients.len().max(artifact.intercepts.len()),
        });
    }
    for row in &artifact.coefficients {
        if row.len() != FeatureVector::DIM {
            return Err(PredictionError::DimensionMismatch {
                expected: FeatureVector::DIM,
                actual: row.len(),
            });
        }
    }
    Ok(())
}

fn validate_scaler(artifact: &ScalerArtifact) -> Result<(), PredictionError> {
    if artifact.mean.len() != FeatureVector::DIM || artifact.std.len() != FeatureVector::DIM {
        return Err(PredictionError::DimensionMismatch {
            expected: FeatureVector::DIM,
            actual: artifact.mean.len().min(artifact.std.len()),
        });
    }
    if artifact.std.iter().any(|s| *s == 0.0) {
        return Err(PredictionError::InvalidArtifact {
            path: "scaler".to_string(),
            reason: "zero standard deviation".to_string(),
        });
    }
    Ok(())
}

/// Numerically stable softmax.
fn softmax<const N: usize>(scores: [f64; N]) -> [f64; N] {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut out = [0.0f64; N];
    let mut sum = 0.0;
    for (i, s) in scores.iter().enumerate() {
        out[i] = (s - max).exp();
        sum += out[i];
    }
    for v in &mut out {
        *v /= sum;
    }
    out
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
