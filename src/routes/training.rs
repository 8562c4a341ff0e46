use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::response::{DataResponse, MessageResponse},
    dto::training_dto::{
        CreateTrainingDataPayload, CreateTrainingEntryPayload, UpdateTrainingDataPayload,
        UpdateTrainingEntryPayload,
    },
    error::Result,
    middleware::auth::AuthUser,
    middleware::permission::{check_permission, ResourceOwner},
    AppState,
};

#[axum::debug_handler]
pub async fn create_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateTrainingEntryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let session = state.session_service.get(payload.session_id).await?;
    check_permission(&user, ResourceOwner::User(session.user_id))?;
    let entry = state.training_service.create_entry(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "Training entry created successfully",
            entry,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_session_entries(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(session_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let session = state.session_service.get(session_id).await?;
    check_permission(&user, ResourceOwner::User(session.user_id))?;
    let entries = state
        .training_service
        .list_entries_for_session(session_id)
        .await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Training entries retrieved",
        entries,
    )))
}

#[axum::debug_handler]
pub async fn get_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let owner = state.training_service.entry_owner(id).await?;
    check_permission(&user, ResourceOwner::User(owner))?;
    let entry = state.training_service.get_entry(id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Training entry retrieved",
        entry,
    )))
}

#[axum::debug_handler]
pub async fn update_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTrainingEntryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let owner = state.training_service.entry_owner(id).await?;
    check_permission(&user, ResourceOwner::User(owner))?;
    let entry = state.training_service.update_entry(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Training entry updated successfully",
        entry,
    )))
}

#[axum::debug_handler]
pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let owner = state.training_service.entry_owner(id).await?;
    check_permission(&user, ResourceOwner::User(owner))?;
    state.training_service.delete_entry(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Training entry deleted successfully",
    )))
}

#[axum::debug_handler]
pub async fn create_data(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateTrainingDataPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let owner = state
        .training_service
        .entry_owner(payload.training_entry_id)
        .await?;
    check_permission(&user, ResourceOwner::User(owner))?;
    let data = state.training_service.create_data(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "Training data created successfully",
            data,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_entry_data(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(entry_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let owner = state.training_service.entry_owner(entry_id).await?;
    check_permission(&user, ResourceOwner::User(owner))?;
    let data = state.training_service.list_data_for_entry(entry_id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Training data retrieved",
        data,
    )))
}

#[axum::debug_handler]
pub async fn get_data(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let owner = state.training_service.data_owner(id).await?;
    check_permission(&user, ResourceOwner::User(owner))?;
    let data = state.training_service.get_data(id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Training data retrieved",
        data,
    )))
}

#[axum::debug_handler]
pub async fn update_data(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTrainingDataPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let owner = state.training_service.data_owner(id).await?;
    check_permission(&user, ResourceOwner::User(owner))?;
    let data = state.training_service.update_data(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Training data updated successfully",
        data,
    )))
}

#[axum::debug_handler]
pub async fn delete_data(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let owner = state.training_service.data_owner(id).await?;
    check_permission(&user, ResourceOwner::User(owner))?;
    state.training_service.delete_data(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Training data deleted successfully",
    )))
}
