use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::auth_dto::{
        ForgotPasswordPayload, LoginPayload, RefreshPayload, RegisterPayload,
        ResetPasswordPayload, TokenResponse,
    },
    dto::response::{DataResponse, MessageResponse},
    dto::user_dto::UserResponse,
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.auth_service.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "User registered successfully",
            UserResponse::from(user),
        )),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let pair = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;
    Ok(Json(TokenResponse {
        http_code: StatusCode::OK.as_u16(),
        message: "User logged in successfully".to_string(),
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}

#[axum::debug_handler]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let pair = state.auth_service.refresh(&payload.refresh_token).await?;
    Ok(Json(TokenResponse {
        http_code: StatusCode::OK.as_u16(),
        message: "Token refreshed successfully".to_string(),
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}

/// Logout verifies the bearer token itself rather than sitting behind the
/// auth middleware, so an expired-but-well-formed session still gets a clean
/// 401/404 instead of a middleware rejection.
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| Error::Unauthorized("Unauthorized: No token provided".to_string()))?;

    state.auth_service.logout(token).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "User logged out successfully",
    )))
}

#[axum::debug_handler]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.auth_service.forgot_password(&payload.email).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Password reset mail sent",
    )))
}

#[axum::debug_handler]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state
        .auth_service
        .reset_password(&payload.token, &payload.password)
        .await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Password reset successfully",
    )))
}
