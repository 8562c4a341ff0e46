use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A training session on the gym floor, not to be confused with a login
/// session in `auth_tokens`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Session {
    pub id: i64,
    pub session_start: DateTime<Utc>,
    pub session_end: Option<DateTime<Utc>>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
