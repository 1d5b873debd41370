use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted onboarding trajectory. Exactly one of these three values is
/// ever returned; there is no partial or unknown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStatus {
    OnTrack,
    AtRisk,
    Delayed,
}

impl OnboardingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OnboardingStatus::OnTrack => "on-track",
            OnboardingStatus::AtRisk => "at-risk",
            OnboardingStatus::Delayed => "delayed",
        }
    }
}

impl fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
