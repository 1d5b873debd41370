//! Error types for the gateway and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use onboard_core::errors::OnboardError;

/// Gateway error type. Everything crossing a route handler boundary ends
/// up here and is rendered as `{"error": "..."}` with a matching status.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Email and password required")]
    MissingCredentials,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("User not found")]
    UserNotFound,

    #[error("Task not found")]
    TaskNotFound,

    #[error(transparent)]
    Onboard(#[from] OnboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingCredentials => StatusCode::BAD_REQUEST,
            GatewayError::InvalidPassword => StatusCode::UNAUTHORIZED,
            GatewayError::UserNotFound | GatewayError::TaskNotFound => StatusCode::NOT_FOUND,
            GatewayError::Onboard(e) => match e {
                OnboardError::EmployeeNotFound { .. } => StatusCode::NOT_FOUND,
                OnboardError::MissingStartDate { .. } | OnboardError::DateParse { .. } => {
                    StatusCode::BAD_REQUEST
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            GatewayError::Io(_) | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            // Stable client-facing string, independent of the id inside.
            GatewayError::Onboard(OnboardError::EmployeeNotFound { .. }) => {
                "Employee not found".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            GatewayError::Onboard(OnboardError::EmployeeNotFound { id: 9 }).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::Onboard(OnboardError::MissingStartDate { id: 9 }).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::InvalidPassword.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn storage_failures_map_to_500() {
        let err = GatewayError::Onboard(OnboardError::Internal {
            message: "boom".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn employee_not_found_message_is_stable() {
        let err = GatewayError::Onboard(OnboardError::EmployeeNotFound { id: 42 });
        assert_eq!(err.message(), "Employee not found");
    }
}
