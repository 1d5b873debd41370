//! Demo roster seeding for local development.
//!
//! Start and due dates are laid out relative to `today` so the seeded
//! roster always exercises all three status trajectories.

use chrono::{Duration, NaiveDate};

use onboard_core::constants::DATE_FORMAT;
use onboard_core::errors::OnboardResult;
use onboard_core::roster::{NewEmployee, NewTask, TaskStatus};
use onboard_core::traits::IRosterStorage;

/// Seed the demo employees and tasks. A second run is a no-op.
pub fn seed_demo_roster<S: IRosterStorage>(storage: &S, today: NaiveDate) -> OnboardResult<()> {
    if storage.find_employee_by_email("rahul@company.com")?.is_some() {
        tracing::info!("demo roster already present; skipping seed");
        return Ok(());
    }

    let date = |offset_days: i64| (today + Duration::days(offset_days)).format(DATE_FORMAT).to_string();

    let employees = [
        ("Rahul Sharma", "rahul@company.com", "Engineering", -66),
        ("Anjali Verma", "anjali@company.com", "HR", -57),
        ("Aman Gupta", "aman@company.com", "AI/ML", -36),
        ("Sneha Patil", "sneha@company.com", "Operations", -32),
    ];

    let mut ids = Vec::new();
    for (name, email, department, start_offset) in employees {
        let id = storage.create_employee(&NewEmployee {
            name: name.to_string(),
            email: email.to_string(),
            department: Some(department.to_string()),
            start_date: Some(date(start_offset)),
        })?;
        ids.push(id);
    }

    // (employee index, title, description, status, due-date offset from today)
    let tasks = [
        (0, "Complete onboarding", "Submit documents and forms", TaskStatus::Completed, -62),
        (0, "React training", "Finish React basics", TaskStatus::InProgress, -52),
        (1, "HR orientation", "Learn HR tools", TaskStatus::Completed, -55),
        (2, "ML dataset review", "Review training dataset", TaskStatus::NotStarted, -27),
        (3, "Policy reading", "Read company policies", TaskStatus::InProgress, -25),
    ];

    for (employee_idx, title, description, status, due_offset) in tasks {
        storage.create_task(&NewTask {
            employee_id: ids[employee_idx],
            title: title.to_string(),
            description: Some(description.to_string()),
            status,
            due_date: Some(date(due_offset)),
        })?;
    }

    // Demo account without a start date; logging in works, prediction
    // reports the missing date once tasks are assigned.
    storage.create_employee(&NewEmployee {
        name: "John Doe".to_string(),
        email: "john@company.com".to_string(),
        department: Some("Engineering".to_string()),
        start_date: None,
    })?;

    tracing::info!(employees = ids.len() + 1, "seeded demo roster");
    Ok(())
}
