/// Errors raised while loading or applying the trained model artifacts.
///
/// Load failures never fail a request: the engine logs them and runs
/// rule-based for the rest of the process lifetime.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("model artifact {path} could not be read: {reason}")]
    ArtifactUnreadable { path: String, reason: String },

    #[error("model artifact {path} is invalid: {reason}")]
    InvalidArtifact { path: String, reason: String },

    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
