//! Human-readable action items per predicted status.
//!
//! Entries are display hints, not machine-parsed. Order is significant:
//! most severe and actionable guidance first.

use onboard_core::models::OnboardingStatus;

/// Completion rate below which an at-risk employee also gets a
/// deadline-extension suggestion.
pub const EXTENSION_MAX_COMPLETION: f64 = 0.6;

/// Recommendation returned on the no-tasks short-circuit.
pub const NO_TASKS_RECOMMENDATION: &str = "Assign onboarding tasks to begin tracking";
/// Message returned on the no-tasks short-circuit.
pub const NO_TASKS_MESSAGE: &str = "No tasks assigned yet";

/// Generate the ordered recommendation list. Always at least one entry.
pub fn generate(
    status: OnboardingStatus,
    completion_rate: f64,
    overdue_tasks: u32,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match status {
        OnboardingStatus::Delayed => {
            recommendations.push("Immediate attention required".to_string());
            recommendations.push("Schedule 1-on-1 meeting with HR".to_string());
            if overdue_tasks > 0 {
                recommendations
                    .push(format!("Focus on completing {overdue_tasks} overdue tasks"));
            }
        }
        OnboardingStatus::AtRisk => {
            recommendations.push("Monitor progress closely".to_string());
            recommendations.push("Check if employee needs support".to_string());
            if completion_rate < EXTENSION_MAX_COMPLETION {
                recommendations.push("Consider extending deadlines".to_string());
            }
        }
        OnboardingStatus::OnTrack => {
            recommendations.push("Employee is progressing well".to_string());
            recommendations.push("Continue current pace".to_string());
        }
    }

    recommendations
}
