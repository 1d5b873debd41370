use serde::{Deserialize, Serialize};

use super::status::OnboardingStatus;

/// Probability share per status label, as percentages.
///
/// Sums to ≈100 on the model-backed path; all zeros on the rule-based path,
/// which reports no real probability distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusProbabilities {
    #[serde(rename = "on-track")]
    pub on_track: f64,
    #[serde(rename = "at-risk")]
    pub at_risk: f64,
    pub delayed: f64,
}

impl StatusProbabilities {
    /// The rule-based path carries no probability model.
    pub fn zero() -> Self {
        Self {
            on_track: 0.0,
            at_risk: 0.0,
            delayed: 0.0,
        }
    }

    pub fn get(&self, status: OnboardingStatus) -> f64 {
        match status {
            OnboardingStatus::OnTrack => self.on_track,
            OnboardingStatus::AtRisk => self.at_risk,
            OnboardingStatus::Delayed => self.delayed,
        }
    }

    pub fn set(&mut self, status: OnboardingStatus, value: f64) {
        match status {
            OnboardingStatus::OnTrack => self.on_track = value,
            OnboardingStatus::AtRisk => self.at_risk = value,
            OnboardingStatus::Delayed => self.delayed = value,
        }
    }

    pub fn sum(&self) -> f64 {
        self.on_track + self.at_risk + self.delayed
    }
}

/// Raw counts behind the feature vector, reported for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionMetrics {
    /// Completion rate as a percentage, rounded to 2 decimal places.
    pub completion_rate: f64,
    pub days_elapsed: i64,
    pub overdue_tasks: u32,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

/// The prediction API response. Field names and nesting are the wire
/// contract; existing callers depend on them exactly as serialized here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub employee_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    pub status: OnboardingStatus,
    /// Reported certainty in `[0, 100]`.
    pub confidence: f64,
    /// Present only on the no-tasks short-circuit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Ordered, most actionable first. Never empty.
    pub recommendations: Vec<String>,
    /// Absent on the no-tasks short-circuit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<StatusProbabilities>,
    /// Absent on the no-tasks short-circuit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<PredictionMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_stable() {
        let result = PredictionResult {
            employee_id: 7,
            employee_name: Some("Anjali Verma".into()),
            status: OnboardingStatus::AtRisk,
            confidence: 75.0,
            message: None,
            recommendations: vec!["Monitor progress closely".into()],
            probabilities: Some(StatusProbabilities::zero()),
            metrics: Some(PredictionMetrics {
                completion_rate: 66.67,
                days_elapsed: 30,
                overdue_tasks: 2,
                total_tasks: 3,
                completed_tasks: 2,
            }),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "at-risk");
        assert_eq!(json["probabilities"]["on-track"], 0.0);
        assert_eq!(json["probabilities"]["at-risk"], 0.0);
        assert_eq!(json["metrics"]["completion_rate"], 66.67);
        assert_eq!(json["metrics"]["completed_tasks"], 2);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn short_circuit_omits_metrics_and_probabilities() {
        let result = PredictionResult {
            employee_id: 3,
            employee_name: None,
            status: OnboardingStatus::OnTrack,
            confidence: 100.0,
            message: Some("No tasks assigned yet".into()),
            recommendations: vec!["Assign onboarding tasks to begin tracking".into()],
            probabilities: None,
            metrics: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("metrics").is_none());
        assert!(json.get("probabilities").is_none());
        assert_eq!(json["message"], "No tasks assigned yet");
    }
}
