use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::machine_dto::NfcTagPayload,
    dto::response::{DataResponse, MessageResponse},
    error::Result,
    middleware::auth::AuthUser,
    middleware::permission::require_role,
    models::role::RoleName,
    AppState,
};

#[axum::debug_handler]
pub async fn create_nfc_tag(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<NfcTagPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    require_role(&user, &[RoleName::Admin])?;
    let tag = state.nfc_tag_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "NFC tag created successfully",
            tag,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_nfc_tags(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let tags = state.nfc_tag_service.list().await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "NFC tags retrieved",
        tags,
    )))
}

#[axum::debug_handler]
pub async fn get_nfc_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let tag = state.nfc_tag_service.get(id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "NFC tag retrieved",
        tag,
    )))
}

#[axum::debug_handler]
pub async fn update_nfc_tag(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<NfcTagPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    require_role(&user, &[RoleName::Admin])?;
    let tag = state.nfc_tag_service.update(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "NFC tag updated successfully",
        tag,
    )))
}

#[axum::debug_handler]
pub async fn delete_nfc_tag(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    state.nfc_tag_service.delete(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "NFC tag deleted successfully",
    )))
}
