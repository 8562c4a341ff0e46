use sqlx::PgPool;
use tracing::info;

use crate::dto::user_dto::UpdateUserPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto::hash_secret;

const USER_COLUMNS: &str =
    "id, name, email, password, language, role_id, password_reset_token, created_at, updated_at";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        info!("Retrieved {} users", users.len());
        Ok(users)
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        Ok(user)
    }

    pub async fn update(&self, id: i64, payload: UpdateUserPayload) -> Result<User> {
        let password_hash = match &payload.password {
            Some(password) => Some(
                hash_secret(password)
                    .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?,
            ),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET name = COALESCE($1, name),
                 email = COALESCE($2, email),
                 language = COALESCE($3, language),
                 password = COALESCE($4, password),
                 updated_at = NOW()
             WHERE id = $5
             RETURNING {USER_COLUMNS}"
        ))
        .bind(payload.name)
        .bind(payload.email)
        .bind(payload.language)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        info!(email = %user.email, "User updated");
        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("User not found".to_string()));
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
