//! # onboard-core
//!
//! Foundation crate for the Onboard tracking system.
//! Defines the domain types, prediction models, errors, config, and the
//! storage trait. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod roster;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OnboardConfig;
pub use errors::{OnboardError, OnboardResult};
pub use models::{
    FeatureVector, OnboardingStatus, PredictionMetrics, PredictionResult, StatusProbabilities,
};
pub use roster::{Employee, NewEmployee, NewTask, Task, TaskStatus};
pub use traits::IRosterStorage;
