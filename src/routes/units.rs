use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::response::{DataResponse, MessageResponse},
    dto::training_dto::UnitPayload,
    error::Result,
    middleware::auth::AuthUser,
    middleware::permission::require_role,
    models::role::RoleName,
    AppState,
};

#[axum::debug_handler]
pub async fn create_unit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UnitPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    require_role(&user, &[RoleName::Admin])?;
    let unit = state.unit_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "Unit created successfully",
            unit,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_units(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let units = state.unit_service.list().await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Units retrieved",
        units,
    )))
}

#[axum::debug_handler]
pub async fn get_unit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let unit = state.unit_service.get(id).await?;
    Ok(Json(DataResponse::new(StatusCode::OK, "Unit retrieved", unit)))
}

#[axum::debug_handler]
pub async fn update_unit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UnitPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    require_role(&user, &[RoleName::Admin])?;
    let unit = state.unit_service.update(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Unit updated successfully",
        unit,
    )))
}

#[axum::debug_handler]
pub async fn delete_unit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    state.unit_service.delete(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Unit deleted successfully",
    )))
}
