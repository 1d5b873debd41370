//! Property tests: the three rule branches are mutually exclusive and
//! exhaustive over the whole input grid, boundaries included.

use proptest::prelude::*;

use onboard_core::models::OnboardingStatus;
use onboard_prediction::rules::{self, classify};

fn expected(completion_rate: f64, overdue_tasks: u32) -> OnboardingStatus {
    if completion_rate > rules::ON_TRACK_MIN_COMPLETION
        && overdue_tasks <= rules::ON_TRACK_MAX_OVERDUE
    {
        OnboardingStatus::OnTrack
    } else if completion_rate < rules::DELAYED_MAX_COMPLETION
        || overdue_tasks >= rules::DELAYED_MIN_OVERDUE
    {
        OnboardingStatus::Delayed
    } else {
        OnboardingStatus::AtRisk
    }
}

proptest! {
    #[test]
    fn exactly_one_branch_fires(
        completion_rate in 0.0f64..=1.0,
        overdue_tasks in 0u32..10,
    ) {
        prop_assert_eq!(
            classify(completion_rate, overdue_tasks),
            expected(completion_rate, overdue_tasks)
        );
    }

    #[test]
    fn overdue_never_improves_status(
        completion_rate in 0.0f64..=1.0,
        overdue_tasks in 0u32..9,
    ) {
        // Ranking: OnTrack best, Delayed worst. Adding an overdue task may
        // only hold or worsen the status.
        fn rank(status: OnboardingStatus) -> u8 {
            match status {
                OnboardingStatus::OnTrack => 0,
                OnboardingStatus::AtRisk => 1,
                OnboardingStatus::Delayed => 2,
            }
        }
        let before = rank(classify(completion_rate, overdue_tasks));
        let after = rank(classify(completion_rate, overdue_tasks + 1));
        prop_assert!(after >= before);
    }
}

#[test]
fn boundary_grid_is_pinned() {
    // (completion_rate, overdue_tasks) -> status, covering the inclusive/
    // strict boundaries the thresholds are written with.
    let cases = [
        (0.5, 1, OnboardingStatus::AtRisk),
        (0.5, 2, OnboardingStatus::AtRisk),
        (0.5, 3, OnboardingStatus::Delayed),
        (0.7, 1, OnboardingStatus::AtRisk),
        (0.7, 2, OnboardingStatus::AtRisk),
        (0.7, 3, OnboardingStatus::Delayed),
        (0.71, 1, OnboardingStatus::OnTrack),
        (0.71, 2, OnboardingStatus::AtRisk),
        (0.71, 3, OnboardingStatus::Delayed),
        (0.49, 0, OnboardingStatus::Delayed),
        (1.0, 0, OnboardingStatus::OnTrack),
        (0.0, 0, OnboardingStatus::Delayed),
    ];

    for (rate, overdue, want) in cases {
        assert_eq!(classify(rate, overdue), want, "({rate}, {overdue})");
    }
}

#[test]
fn rule_confidence_is_the_single_documented_constant() {
    assert_eq!(rules::RULE_CONFIDENCE, 75.0);
}
