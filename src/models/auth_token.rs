use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per active login session. Both token columns hold argon2 hashes;
/// the plaintext tokens only ever exist in the response to the client.
#[derive(Debug, Clone, FromRow)]
pub struct AuthToken {
    pub id: i64,
    pub user_id: i64,
    pub session_id: Uuid,
    pub access_token: String,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
