//! Error taxonomy for the Onboard system.
//!
//! Each subsystem gets its own thiserror enum; [`OnboardError`] is the
//! top-level type every public operation returns.

mod prediction_error;
mod storage_error;

pub use prediction_error::PredictionError;
pub use storage_error::StorageError;

/// Top-level error type for all Onboard operations.
#[derive(Debug, thiserror::Error)]
pub enum OnboardError {
    /// Employee id does not resolve. Surfaced as a client error, never retried.
    #[error("employee {id} not found")]
    EmployeeNotFound { id: i64 },

    /// Employee record carries no start date, so elapsed time is undefined.
    #[error("employee {id} has no start date")]
    MissingStartDate { id: i64 },

    /// A date field could not be parsed as `%Y-%m-%d`.
    #[error("invalid {field} date: {value}")]
    DateParse { field: &'static str, value: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Result alias used across the workspace.
pub type OnboardResult<T> = Result<T, OnboardError>;
