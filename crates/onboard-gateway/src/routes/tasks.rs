//! Task CRUD endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use onboard_core::roster::{NewTask, Task, TaskStatus};
use onboard_core::traits::IRosterStorage;

use crate::gateway::AppState;
use crate::{GatewayError, Result};

pub async fn for_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<Vec<Task>>> {
    Ok(Json(state.storage.tasks_for_employee(employee_id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewTask>,
) -> Result<(StatusCode, Json<Value>)> {
    let id = state.storage.create_task(&payload)?;
    tracing::info!(task_id = id, employee_id = payload.employee_id, "task created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Task created" })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub status: TaskStatus,
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Value>> {
    if !state.storage.update_task_status(id, payload.status)? {
        return Err(GatewayError::TaskNotFound);
    }
    Ok(Json(json!({ "message": "Task updated" })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    if !state.storage.delete_task(id)? {
        return Err(GatewayError::TaskNotFound);
    }
    Ok(Json(json!({ "message": "Task deleted" })))
}
