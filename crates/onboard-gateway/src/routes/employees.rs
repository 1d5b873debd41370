//! Employee CRUD endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use onboard_core::errors::OnboardError;
use onboard_core::roster::{Employee, NewEmployee};
use onboard_core::traits::IRosterStorage;

use crate::gateway::AppState;
use crate::Result;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    Ok(Json(state.storage.list_employees()?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>> {
    let employee = state
        .storage
        .get_employee(id)?
        .ok_or(OnboardError::EmployeeNotFound { id })?;
    Ok(Json(employee))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Value>)> {
    let id = state.storage.create_employee(&payload)?;
    tracing::info!(employee_id = id, "employee created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Employee created" })),
    ))
}
