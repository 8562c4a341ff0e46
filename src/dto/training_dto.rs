use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionPayload {
    pub session_start: DateTime<Utc>,
    pub session_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSessionPayload {
    pub session_start: Option<DateTime<Utc>>,
    pub session_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTrainingEntryPayload {
    #[validate(length(min = 1))]
    pub value: String,
    pub unit_id: i64,
    pub machine_id: i64,
    pub session_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTrainingEntryPayload {
    #[validate(length(min = 1))]
    pub value: Option<String>,
    pub unit_id: Option<i64>,
    pub machine_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTrainingDataPayload {
    #[validate(length(min = 1))]
    pub value: String,
    pub training_entry_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTrainingDataPayload {
    #[validate(length(min = 1))]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UnitPayload {
    #[validate(length(min = 1))]
    pub name: String,
}
