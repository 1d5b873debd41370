//! Demo-grade login endpoints.
//!
//! Credentials are hardcoded: one admin account, and a shared password for
//! every seeded employee. This is a deliberate stand-in for a real identity
//! provider, kept for compatibility with the existing frontend.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use onboard_core::traits::IRosterStorage;

use crate::gateway::AppState;
use crate::{GatewayError, Result};

pub const ADMIN_EMAIL: &str = "admin@company.com";
const ADMIN_PASSWORD: &str = "admin123";
const EMPLOYEE_DEMO_PASSWORD: &str = "employee123";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub role: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>> {
    let user = authenticate(&state.storage, &payload)?;
    let message = if user.role == "admin" {
        "Admin login successful"
    } else {
        "Employee login successful"
    };
    Ok(Json(json!({
        "success": true,
        "user": user,
        "message": message,
    })))
}

/// Check credentials against the hardcoded admin pair, then the roster.
pub fn authenticate<S: IRosterStorage>(
    storage: &S,
    request: &LoginRequest,
) -> Result<LoginUser> {
    let (email, password) = match (&request.email, &request.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email.as_str(), password.as_str())
        }
        _ => return Err(GatewayError::MissingCredentials),
    };

    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        return Ok(LoginUser {
            id: 0,
            email: ADMIN_EMAIL.to_string(),
            name: "Admin User".to_string(),
            department: None,
            role: "admin",
        });
    }

    let employee = storage
        .find_employee_by_email(email)?
        .ok_or(GatewayError::UserNotFound)?;

    if password != EMPLOYEE_DEMO_PASSWORD {
        return Err(GatewayError::InvalidPassword);
    }

    Ok(LoginUser {
        id: employee.id,
        email: employee.email,
        name: employee.name,
        department: employee.department,
        role: "employee",
    })
}

/// Session check. There is no token layer; a client passing back the user
/// object it got at login is considered valid.
pub async fn verify(Json(payload): Json<Value>) -> (StatusCode, Json<Value>) {
    match payload.get("user") {
        Some(user) if !user.is_null() => (
            StatusCode::OK,
            Json(json!({ "valid": true, "user": user })),
        ),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "valid": false }))),
    }
}

pub async fn logout() -> Json<Value> {
    Json(json!({ "success": true, "message": "Logged out successfully" }))
}
