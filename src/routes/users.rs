use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::response::{DataResponse, MessageResponse},
    dto::user_dto::{UpdateUserPayload, UserResponse},
    error::Result,
    middleware::auth::AuthUser,
    middleware::permission::{check_permission, require_role, ResourceOwner},
    models::role::RoleName,
    AppState,
};

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    let users = state.user_service.list().await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(DataResponse::new(StatusCode::OK, "Users retrieved", users)))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    check_permission(&user, ResourceOwner::User(id))?;
    let found = state.user_service.get(id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "User retrieved",
        UserResponse::from(found),
    )))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    check_permission(&user, ResourceOwner::User(id))?;
    let updated = state.user_service.update(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "User updated successfully",
        UserResponse::from(updated),
    )))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    state.user_service.delete(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "User deleted successfully",
    )))
}
