//! PredictionEngine — resolves an employee's task history and assembles the
//! full prediction response.
//!
//! Built once at startup and shared read-only across requests; the only
//! long-lived state is the loaded model pair, which is never mutated after
//! construction.

use chrono::{NaiveDate, Utc};

use onboard_core::errors::{OnboardError, OnboardResult};
use onboard_core::models::{PredictionMetrics, PredictionResult, StatusProbabilities};
use onboard_core::roster::Employee;
use onboard_core::traits::IRosterStorage;

use crate::features::{Extraction, FeatureExtractor};
use crate::model::{round2, ModelBackedClassifier};
use crate::{recommendations, rules};

/// Orchestrates extraction, classification, and recommendation per request.
pub struct PredictionEngine<S: IRosterStorage> {
    storage: S,
    /// Classifier strategy, fixed at construction. `Some` when both model
    /// artifacts loaded at startup; `None` runs the rule-based fallback.
    classifier: Option<ModelBackedClassifier>,
}

impl<S: IRosterStorage> PredictionEngine<S> {
    pub fn new(storage: S, classifier: Option<ModelBackedClassifier>) -> Self {
        Self {
            storage,
            classifier,
        }
    }

    /// Whether the model-backed path is active for this process.
    pub fn model_available(&self) -> bool {
        self.classifier.is_some()
    }

    /// Predict onboarding status as of today.
    pub fn predict_status(&self, employee_id: i64) -> OnboardResult<PredictionResult> {
        self.predict_status_as_of(employee_id, Utc::now().date_naive())
    }

    /// As-of variant; used directly by tests.
    pub fn predict_status_as_of(
        &self,
        employee_id: i64,
        as_of: NaiveDate,
    ) -> OnboardResult<PredictionResult> {
        let employee = self
            .storage
            .get_employee(employee_id)?
            .ok_or(OnboardError::EmployeeNotFound { id: employee_id })?;
        let tasks = self.storage.tasks_for_employee(employee_id)?;

        let features = match FeatureExtractor::extract(&employee, &tasks, as_of)? {
            Extraction::NoTasks => return Ok(no_tasks_result(employee)),
            Extraction::Ready(features) => features,
        };
        let vector = &features.vector;

        let (status, confidence, probabilities) = match &self.classifier {
            Some(model) => {
                let prediction = model.predict(vector);
                (
                    prediction.status,
                    prediction.confidence,
                    prediction.probabilities,
                )
            }
            None => (
                rules::classify(vector.completion_rate, vector.overdue_tasks),
                rules::RULE_CONFIDENCE,
                StatusProbabilities::zero(),
            ),
        };

        let recommendations =
            recommendations::generate(status, vector.completion_rate, vector.overdue_tasks);

        Ok(PredictionResult {
            employee_id: employee.id,
            employee_name: Some(employee.name),
            status,
            confidence,
            message: None,
            recommendations,
            probabilities: Some(probabilities),
            metrics: Some(PredictionMetrics {
                completion_rate: round2(vector.completion_rate * 100.0),
                days_elapsed: vector.days_elapsed,
                overdue_tasks: vector.overdue_tasks,
                total_tasks: features.total_tasks,
                completed_tasks: features.completed_tasks,
            }),
        })
    }
}

/// Short-circuit response for an employee with no tasks assigned yet.
/// The start date is never parsed on this branch.
fn no_tasks_result(employee: Employee) -> PredictionResult {
    PredictionResult {
        employee_id: employee.id,
        employee_name: Some(employee.name),
        status: onboard_core::models::OnboardingStatus::OnTrack,
        confidence: 100.0,
        message: Some(recommendations::NO_TASKS_MESSAGE.to_string()),
        recommendations: vec![recommendations::NO_TASKS_RECOMMENDATION.to_string()],
        probabilities: None,
        metrics: None,
    }
}
