use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::Error;
use crate::models::auth_token::AuthToken;
use crate::utils::crypto::verify_secret;
use crate::AppState;

/// The authenticated principal, attached to request extensions once the
/// bearer token has passed both signature and stored-hash checks.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub language: String,
    pub role: String,
    pub studio_ids: Vec<i64>,
}

/// Request gate for every protected route. Signature validity alone is not
/// enough: the presented token must also match the argon2 hash stored for its
/// (user, session) row, which is what makes logout and rotation effective
/// before the JWT itself expires.
pub async fn verify_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(&req) {
        Ok(token) => token,
        Err(err) => return err.into_response(),
    };

    let claims = match state.tokens.verify_access_token(token) {
        Ok(claims) => claims,
        Err(err) => return err.into_response(),
    };

    let record = match sqlx::query_as::<_, AuthToken>(
        "SELECT id, user_id, session_id, access_token, refresh_token, created_at, updated_at
         FROM auth_tokens WHERE user_id = $1 AND session_id = $2",
    )
    .bind(claims.id)
    .bind(claims.session)
    .fetch_optional(&state.pool)
    .await
    {
        Ok(Some(record)) => record,
        Ok(None) => {
            return Error::Unauthorized("Unauthorized: Session not found".to_string())
                .into_response()
        }
        Err(err) => return Error::from(err).into_response(),
    };

    match verify_secret(token, &record.access_token) {
        Ok(true) => {}
        Ok(false) => {
            return Error::Unauthorized("Unauthorized: Token mismatch".to_string()).into_response()
        }
        Err(_) => {
            return Error::Internal("Stored token hash is unreadable".to_string()).into_response()
        }
    }

    let user = match load_principal(&state, claims.id, &claims.role).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Error::Unauthorized("Unauthorized: User not found".to_string()).into_response()
        }
        Err(err) => return err.into_response(),
    };

    req.extensions_mut().insert(user);
    next.run(req).await
}

fn bearer_token(req: &Request) -> Result<&str, Error> {
    let header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| Error::Unauthorized("Unauthorized: No token provided".to_string()))?;
    let value = header
        .to_str()
        .map_err(|_| Error::Unauthorized("Unauthorized: No token provided".to_string()))?;
    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| Error::Unauthorized("Unauthorized: No token provided".to_string()))
}

async fn load_principal(
    state: &AppState,
    user_id: i64,
    role: &str,
) -> Result<Option<AuthUser>, Error> {
    let row = sqlx::query_as::<_, (i64, String, String, String)>(
        "SELECT id, name, email, language FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&state.pool)
    .await?;

    let Some((id, name, email, language)) = row else {
        return Ok(None);
    };

    let studio_ids: Vec<i64> =
        sqlx::query_scalar("SELECT studio_id FROM user_studios WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&state.pool)
            .await?;

    Ok(Some(AuthUser {
        id,
        name,
        email,
        language,
        role: role.to_string(),
        studio_ids,
    }))
}
