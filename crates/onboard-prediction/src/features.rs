//! Feature derivation from an employee's task history.

use chrono::NaiveDate;

use onboard_core::constants::DATE_FORMAT;
use onboard_core::errors::{OnboardError, OnboardResult};
use onboard_core::models::FeatureVector;
use onboard_core::roster::{Employee, Task};

/// Outcome of feature extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Employee has no tasks assigned yet. Decided before any date parsing,
    /// so even a malformed start date short-circuits cleanly.
    NoTasks,
    Ready(ExtractedFeatures),
}

/// Feature vector plus the raw counts the API reports as metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFeatures {
    pub vector: FeatureVector,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

/// Derives a [`FeatureVector`] from an employee's start date and task list.
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Extract features as of the given date.
    ///
    /// Fails with a date-parse error when the start date is missing or
    /// malformed; that aborts the whole prediction. Malformed task due
    /// dates are recovered locally, see [`is_overdue`].
    pub fn extract(
        employee: &Employee,
        tasks: &[Task],
        as_of: NaiveDate,
    ) -> OnboardResult<Extraction> {
        if tasks.is_empty() {
            return Ok(Extraction::NoTasks);
        }

        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.status.is_completed()).count();
        let completion_rate = completed_tasks as f64 / total_tasks as f64;

        let start = parse_start_date(employee)?;
        let days_elapsed = (as_of - start).num_days().max(0);

        let overdue_tasks = tasks.iter().filter(|t| is_overdue(t, as_of)).count() as u32;

        // No per-task completion timestamps in the source data, so this
        // degrades to elapsed time spread evenly across the task list.
        let avg_time_per_task = days_elapsed as f64 / total_tasks as f64;

        Ok(Extraction::Ready(ExtractedFeatures {
            vector: FeatureVector {
                completion_rate,
                days_elapsed,
                overdue_tasks,
                avg_time_per_task,
            },
            total_tasks,
            completed_tasks,
        }))
    }
}

fn parse_start_date(employee: &Employee) -> OnboardResult<NaiveDate> {
    let raw = employee
        .start_date
        .as_deref()
        .ok_or(OnboardError::MissingStartDate { id: employee.id })?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| OnboardError::DateParse {
        field: "start_date",
        value: raw.to_string(),
    })
}

/// A task is overdue when it is not completed and its due date is strictly
/// before `as_of`. Recovery policy for bad data: a due date that fails to
/// parse is logged and treated as "no due date", never as an error.
pub fn is_overdue(task: &Task, as_of: NaiveDate) -> bool {
    if task.status.is_completed() {
        return false;
    }
    let Some(raw) = task.due_date.as_deref() else {
        return false;
    };
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(due) => due < as_of,
        Err(_) => {
            tracing::warn!(
                task_id = task.id,
                due_date = raw,
                "unparseable due date; treating task as not overdue"
            );
            false
        }
    }
}
