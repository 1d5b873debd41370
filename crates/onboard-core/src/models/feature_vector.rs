use serde::{Deserialize, Serialize};

/// Fixed-order numeric features derived from an employee's task history.
/// Constructed fresh per prediction request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Fraction of tasks completed, in `[0, 1]`.
    pub completion_rate: f64,
    /// Whole days since the employee's start date, never negative.
    pub days_elapsed: i64,
    /// Incomplete tasks whose due date has passed.
    pub overdue_tasks: u32,
    /// Average elapsed days per task.
    pub avg_time_per_task: f64,
}

impl FeatureVector {
    /// Feature count. The trained scaler and classifier are shaped to this.
    pub const DIM: usize = 4;

    /// The model input order: completion rate, days elapsed, overdue count,
    /// average time per task. This order is a contract with the training
    /// pipeline.
    pub fn as_array(&self) -> [f64; Self::DIM] {
        [
            self.completion_rate,
            self.days_elapsed as f64,
            self.overdue_tasks as f64,
            self.avg_time_per_task,
        ]
    }
}
