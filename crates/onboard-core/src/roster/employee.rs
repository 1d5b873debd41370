use serde::{Deserialize, Serialize};

/// A new hire being tracked through onboarding.
///
/// `start_date` stays a raw `%Y-%m-%d` string at this level; parsing happens
/// on the prediction path so a malformed value only surfaces where elapsed
/// time is actually needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub start_date: Option<String>,
    pub created_at: Option<String>,
}

/// Payload for creating an employee. The database assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}
