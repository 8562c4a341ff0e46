use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::response::{DataResponse, MessageResponse},
    dto::studio_dto::{
        AddStudioOwnerPayload, CreateLicencePayload, CreateStudioPayload, UpdateStudioPayload,
    },
    error::Result,
    middleware::auth::AuthUser,
    middleware::permission::{check_permission, require_role, ResourceOwner},
    models::role::RoleName,
    AppState,
};

#[axum::debug_handler]
pub async fn create_studio(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateStudioPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    require_role(&user, &[RoleName::Admin])?;
    let studio = state.studio_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "Studio created successfully",
            studio,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_studios(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    let studios = state.studio_service.list().await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Studios retrieved",
        studios,
    )))
}

#[axum::debug_handler]
pub async fn get_studio(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    check_permission(&user, ResourceOwner::Studio(id))?;
    let studio = state.studio_service.get(id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Studio retrieved",
        studio,
    )))
}

#[axum::debug_handler]
pub async fn update_studio(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStudioPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    check_permission(&user, ResourceOwner::Studio(id))?;
    let studio = state.studio_service.update(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Studio updated successfully",
        studio,
    )))
}

#[axum::debug_handler]
pub async fn delete_studio(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    state.studio_service.delete(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Studio deleted successfully",
    )))
}

#[axum::debug_handler]
pub async fn add_studio_owner(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<AddStudioOwnerPayload>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    state.studio_service.add_owner(id, payload.user_id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Studio owner assigned",
    )))
}

#[axum::debug_handler]
pub async fn create_licence(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateLicencePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    require_role(&user, &[RoleName::Admin])?;
    let licence = state.studio_service.create_licence(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "Licence created successfully",
            licence,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_licences(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    let licences = state.studio_service.list_licences().await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Licences retrieved",
        licences,
    )))
}
