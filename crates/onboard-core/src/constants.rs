/// Onboard system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Calendar date format used by the database and the API (`2024-06-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of onboarding status classes.
pub const STATUS_CLASS_COUNT: usize = 3;
