use sqlx::PgPool;
use tracing::info;

use crate::dto::training_dto::{CreateSessionPayload, UpdateSessionPayload};
use crate::error::{Error, Result};
use crate::models::session::Session;

const SESSION_COLUMNS: &str = "id, session_start, session_end, user_id, created_at, updated_at";

#[derive(Clone)]
pub struct SessionService {
    pool: PgPool,
}

impl SessionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, payload: CreateSessionPayload) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(&format!(
            "INSERT INTO sessions (session_start, session_end, user_id)
             VALUES ($1, $2, $3)
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(payload.session_start)
        .bind(payload.session_end)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        info!(session_id = session.id, user_id, "Session created");
        Ok(session)
    }

    pub async fn list(&self) -> Result<Vec<Session>> {
        let sessions = sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions ORDER BY session_start DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(sessions)
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Session>> {
        let sessions = sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE user_id = $1
             ORDER BY session_start DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sessions)
    }

    pub async fn get(&self, id: i64) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Session not found".to_string()))?;
        Ok(session)
    }

    pub async fn update(&self, id: i64, payload: UpdateSessionPayload) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(&format!(
            "UPDATE sessions
             SET session_start = COALESCE($1, session_start),
                 session_end = COALESCE($2, session_end),
                 updated_at = NOW()
             WHERE id = $3
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(payload.session_start)
        .bind(payload.session_end)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Session not found".to_string()))?;
        Ok(session)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Session not found".to_string()));
        }
        Ok(())
    }
}
