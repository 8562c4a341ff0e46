use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::response::{DataResponse, MessageResponse},
    dto::training_dto::{CreateSessionPayload, UpdateSessionPayload},
    error::Result,
    middleware::auth::AuthUser,
    middleware::permission::{check_permission, require_role, ResourceOwner},
    models::role::RoleName,
    AppState,
};

#[axum::debug_handler]
pub async fn create_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateSessionPayload>,
) -> Result<impl IntoResponse> {
    let session = state.session_service.create(user.id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "Session created successfully",
            session,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_sessions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    let sessions = state.session_service.list().await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Sessions retrieved",
        sessions,
    )))
}

#[axum::debug_handler]
pub async fn get_user_sessions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let sessions = state.session_service.list_for_user(user.id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Sessions retrieved",
        sessions,
    )))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let session = state.session_service.get(id).await?;
    check_permission(&user, ResourceOwner::User(session.user_id))?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Session retrieved",
        session,
    )))
}

#[axum::debug_handler]
pub async fn update_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSessionPayload>,
) -> Result<impl IntoResponse> {
    let session = state.session_service.get(id).await?;
    check_permission(&user, ResourceOwner::User(session.user_id))?;
    let session = state.session_service.update(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Session updated successfully",
        session,
    )))
}

#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let session = state.session_service.get(id).await?;
    check_permission(&user, ResourceOwner::User(session.user_id))?;
    state.session_service.delete(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Session deleted successfully",
    )))
}
