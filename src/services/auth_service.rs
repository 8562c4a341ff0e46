use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::auth_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::models::auth_token::AuthToken;
use crate::models::role::RoleName;
use crate::models::user::User;
use crate::services::mail_service::MailService;
use crate::utils::crypto::{hash_secret, verify_secret};
use crate::utils::token::TokenSigner;

const USER_COLUMNS: &str =
    "id, name, email, password, language, role_id, password_reset_token, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    tokens: TokenSigner,
    mail: MailService,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: TokenSigner, mail: MailService) -> Self {
        Self { pool, tokens, mail }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(&payload.email)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_some() {
            return Err(Error::Conflict("Email already in use".to_string()));
        }

        let role_id = match payload.role_id {
            Some(role_id) => role_id,
            None => self.default_role_id().await?,
        };

        let password_hash = hash_secret(&payload.password)
            .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password, language, role_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&password_hash)
        .bind(payload.language.as_deref().unwrap_or("en"))
        .bind(role_id)
        .fetch_one(&self.pool)
        .await?;

        info!(email = %user.email, "User created");
        self.mail
            .send_registration_mail(&user.name, &user.email)
            .await;

        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        let ok = verify_secret(password, &user.password)
            .map_err(|_| Error::Internal("Stored password hash is unreadable".to_string()))?;
        if !ok {
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        }

        // A fresh session id per login keeps this login revocable on its own.
        let session = Uuid::new_v4();
        let pair = self.issue_session(&user, session).await?;
        info!(email = %user.email, %session, "User logged in");
        Ok(pair)
    }

    /// Rotation-on-use: a valid refresh mints a new pair for the same session
    /// and overwrites the stored hashes, which retires the presented pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        let claims = self
            .tokens
            .verify_refresh_token(refresh_token)
            .map_err(|_| Error::Unauthorized("Invalid refresh token".to_string()))?;

        let record = self
            .find_session(claims.id, claims.session)
            .await?
            .ok_or_else(|| Error::Unauthorized("Unauthorized: Session not found".to_string()))?;

        let ok = verify_secret(refresh_token, &record.refresh_token)
            .map_err(|_| Error::Internal("Stored token hash is unreadable".to_string()))?;
        if !ok {
            // Either a replayed pre-rotation token or one never issued.
            return Err(Error::Unauthorized(
                "Unauthorized: Token mismatch".to_string(),
            ));
        }

        let user = self
            .find_by_id(claims.id)
            .await?
            .ok_or_else(|| Error::Unauthorized("Unauthorized: User not found".to_string()))?;

        let pair = self.issue_session(&user, claims.session).await?;
        info!(email = %user.email, session = %claims.session, "Session refreshed");
        Ok(pair)
    }

    pub async fn logout(&self, access_token: &str) -> Result<()> {
        let claims = self
            .tokens
            .verify_access_token(access_token)
            .map_err(|_| Error::Unauthorized("Unauthorized: Invalid token".to_string()))?;

        let result =
            sqlx::query("DELETE FROM auth_tokens WHERE user_id = $1 AND session_id = $2")
                .bind(claims.id)
                .bind(claims.session)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Session not found".to_string()));
        }
        info!(user_id = claims.id, session = %claims.session, "User logged out");
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        let token = self.tokens.generate_reset_token(user.id)?;
        let token_hash = hash_secret(&token)
            .map_err(|e| Error::Internal(format!("Failed to hash reset token: {}", e)))?;

        sqlx::query("UPDATE users SET password_reset_token = $1, updated_at = NOW() WHERE id = $2")
            .bind(&token_hash)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        info!(email = %user.email, "Password reset token generated");
        self.mail
            .send_reset_password_mail(&user.name, &user.email, &token)
            .await;
        Ok(())
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let claims = self.tokens.verify_reset_token(token)?;

        let user = self
            .find_by_id(claims.id)
            .await?
            .ok_or_else(|| Error::Unauthorized("Invalid reset token".to_string()))?;

        let stored = user
            .password_reset_token
            .as_deref()
            .ok_or_else(|| Error::Unauthorized("Invalid reset token".to_string()))?;
        let ok = verify_secret(token, stored)
            .map_err(|_| Error::Internal("Stored token hash is unreadable".to_string()))?;
        if !ok {
            return Err(Error::Unauthorized("Invalid reset token".to_string()));
        }

        let password_hash = hash_secret(new_password)
            .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?;

        // Clearing the stored hash makes the reset token single-use.
        sqlx::query(
            "UPDATE users SET password = $1, password_reset_token = NULL, updated_at = NOW()
             WHERE id = $2",
        )
        .bind(&password_hash)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        info!(email = %user.email, "Password reset completed");
        Ok(())
    }

    /// Signs a token pair for (user, session) and upserts argon2 hashes of
    /// both into `auth_tokens`, replacing whatever the session held before.
    async fn issue_session(&self, user: &User, session: Uuid) -> Result<TokenPair> {
        let role = self.role_name(user.role_id).await?;

        let access_token = self
            .tokens
            .generate_access_token(user.id, &role, session)?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(user.id, &role, session)?;

        let access_hash = hash_secret(&access_token)
            .map_err(|e| Error::Internal(format!("Failed to hash access token: {}", e)))?;
        let refresh_hash = hash_secret(&refresh_token)
            .map_err(|e| Error::Internal(format!("Failed to hash refresh token: {}", e)))?;

        sqlx::query(
            "INSERT INTO auth_tokens (user_id, session_id, access_token, refresh_token)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, session_id) DO UPDATE
             SET access_token = EXCLUDED.access_token,
                 refresh_token = EXCLUDED.refresh_token,
                 updated_at = NOW()",
        )
        .bind(user.id)
        .bind(session)
        .bind(&access_hash)
        .bind(&refresh_hash)
        .execute(&self.pool)
        .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// A user with a dangling role id still gets a token; the role falls back
    /// to plain `user`. Query failures propagate rather than defaulting.
    async fn role_name(&self, role_id: i64) -> Result<String> {
        let name: Option<String> = sqlx::query_scalar("SELECT name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(name.unwrap_or_else(|| RoleName::User.as_str().to_string()))
    }

    async fn default_role_id(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT id FROM roles WHERE name = $1")
            .bind(RoleName::User.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::Internal("Default role is missing".to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    async fn find_session(&self, user_id: i64, session: Uuid) -> Result<Option<AuthToken>> {
        let record = sqlx::query_as::<_, AuthToken>(
            "SELECT id, user_id, session_id, access_token, refresh_token, created_at, updated_at
             FROM auth_tokens WHERE user_id = $1 AND session_id = $2",
        )
        .bind(user_id)
        .bind(session)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }
}
