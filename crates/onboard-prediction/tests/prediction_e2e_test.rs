//! E2E: prediction engine over real SQLite storage.
//!
//! Runs the full ResolveEmployee → ResolveTasks → Extract → Classify →
//! Recommend path against the seeded demo roster instead of a mock.

use std::sync::Arc;

use chrono::NaiveDate;

use onboard_core::errors::OnboardError;
use onboard_core::models::OnboardingStatus;
use onboard_core::roster::{NewEmployee, NewTask, TaskStatus};
use onboard_core::traits::IRosterStorage;
use onboard_prediction::PredictionEngine;
use onboard_storage::seed::seed_demo_roster;
use onboard_storage::StorageEngine;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn seeded_engine() -> PredictionEngine<Arc<StorageEngine>> {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    seed_demo_roster(&storage, today()).unwrap();
    PredictionEngine::new(storage, None)
}

#[test]
fn every_seeded_employee_with_tasks_gets_a_valid_prediction() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    seed_demo_roster(&storage, today()).unwrap();
    let engine = PredictionEngine::new(storage.clone(), None);

    for employee in storage.list_employees().unwrap() {
        let has_tasks = !storage.tasks_for_employee(employee.id).unwrap().is_empty();
        let result = engine.predict_status_as_of(employee.id, today()).unwrap();

        assert!(result.confidence >= 0.0 && result.confidence <= 100.0);
        assert!(!result.recommendations.is_empty());
        if has_tasks {
            let metrics = result.metrics.expect("metrics on the full path");
            assert_eq!(
                result.probabilities.expect("probabilities on the full path").sum(),
                0.0
            );
            assert!(metrics.completed_tasks <= metrics.total_tasks);
        } else {
            assert_eq!(result.status, OnboardingStatus::OnTrack);
            assert_eq!(result.confidence, 100.0);
        }
    }
}

#[test]
fn task_mutation_changes_the_prediction() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let employee_id = storage
        .create_employee(&NewEmployee {
            name: "Sneha Patil".to_string(),
            email: "sneha@company.com".to_string(),
            department: Some("Operations".to_string()),
            start_date: Some("2026-07-01".to_string()),
        })
        .unwrap();
    let task_id = storage
        .create_task(&NewTask {
            employee_id,
            title: "Policy reading".to_string(),
            description: None,
            status: TaskStatus::NotStarted,
            due_date: Some("2026-08-01".to_string()),
        })
        .unwrap();
    let engine = PredictionEngine::new(storage.clone(), None);

    // 0/1 completed, 1 overdue: delayed.
    let before = engine.predict_status_as_of(employee_id, today()).unwrap();
    assert_eq!(before.status, OnboardingStatus::Delayed);

    storage
        .update_task_status(task_id, TaskStatus::Completed)
        .unwrap();

    // 1/1 completed, nothing overdue: on-track.
    let after = engine.predict_status_as_of(employee_id, today()).unwrap();
    assert_eq!(after.status, OnboardingStatus::OnTrack);
}

#[test]
fn unknown_employee_surfaces_not_found_through_the_full_stack() {
    let engine = seeded_engine();
    let err = engine.predict_status_as_of(9999, today()).unwrap_err();
    assert!(matches!(err, OnboardError::EmployeeNotFound { id: 9999 }));
}
