//! Rule-based onboarding status classification.
//!
//! Deterministic threshold logic requiring no trained model. This is the
//! single source of truth for the thresholds; every call site goes through
//! [`classify`] so the boundaries cannot drift between copies.

use onboard_core::models::OnboardingStatus;

/// Completion rate above which (strictly) an employee can be on track.
pub const ON_TRACK_MIN_COMPLETION: f64 = 0.7;
/// Most overdue tasks tolerated while on track (inclusive).
pub const ON_TRACK_MAX_OVERDUE: u32 = 1;
/// Completion rate below which (strictly) onboarding counts as delayed.
pub const DELAYED_MAX_COMPLETION: f64 = 0.5;
/// Overdue count at or above which onboarding counts as delayed.
pub const DELAYED_MIN_OVERDUE: u32 = 3;

/// Confidence reported whenever the rule-based path runs. The rules carry
/// no probability model, so this is a fixed constant for every caller.
pub const RULE_CONFIDENCE: f64 = 75.0;

/// Classify from completion rate and overdue count.
///
/// Boundary placement is part of the contract: `completion_rate == 0.7`
/// is not on-track, `overdue_tasks == 3` is delayed, and the branches are
/// mutually exclusive and exhaustive.
pub fn classify(completion_rate: f64, overdue_tasks: u32) -> OnboardingStatus {
    if completion_rate > ON_TRACK_MIN_COMPLETION && overdue_tasks <= ON_TRACK_MAX_OVERDUE {
        OnboardingStatus::OnTrack
    } else if completion_rate < DELAYED_MAX_COMPLETION || overdue_tasks >= DELAYED_MIN_OVERDUE {
        OnboardingStatus::Delayed
    } else {
        OnboardingStatus::AtRisk
    }
}
