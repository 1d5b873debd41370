//! Result models crossing the prediction API boundary.

mod feature_vector;
mod prediction_result;
mod status;

pub use feature_vector::FeatureVector;
pub use prediction_result::{PredictionMetrics, PredictionResult, StatusProbabilities};
pub use status::OnboardingStatus;
