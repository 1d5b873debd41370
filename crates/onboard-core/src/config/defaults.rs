//! Default configuration values.

pub const DEFAULT_DATABASE_PATH: &str = "onboard.db";
pub const DEFAULT_CLASSIFIER_PATH: &str = "model.json";
pub const DEFAULT_SCALER_PATH: &str = "scaler.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
