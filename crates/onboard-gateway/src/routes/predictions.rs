//! Onboarding status prediction endpoint.

use axum::extract::{Path, State};
use axum::Json;

use onboard_core::models::PredictionResult;

use crate::gateway::AppState;
use crate::Result;

/// `GET /api/predict/employee/:employee_id`
///
/// The response shape is the wire contract: `status`, `confidence`,
/// `recommendations`, `probabilities.{on-track,at-risk,delayed}`, and
/// `metrics.{completion_rate,days_elapsed,overdue_tasks,total_tasks,completed_tasks}`.
pub async fn predict(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<PredictionResult>> {
    Ok(Json(state.engine.predict_status(employee_id)?))
}
