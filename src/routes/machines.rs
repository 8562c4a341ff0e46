use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::machine_dto::{CreateMachinePayload, MachineCategoryPayload, UpdateMachinePayload},
    dto::response::{DataResponse, MessageResponse},
    error::Result,
    middleware::auth::AuthUser,
    middleware::permission::{check_permission, require_role, ResourceOwner},
    models::role::RoleName,
    AppState,
};

#[axum::debug_handler]
pub async fn create_machine(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateMachinePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    check_permission(&user, ResourceOwner::Studio(payload.studio_id))?;
    let machine = state.machine_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "Machine created successfully",
            machine,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_machines(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    let machines = state.machine_service.list().await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Machines retrieved",
        machines,
    )))
}

#[axum::debug_handler]
pub async fn list_studio_machines(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(studio_id): Path<i64>,
) -> Result<impl IntoResponse> {
    check_permission(&user, ResourceOwner::Studio(studio_id))?;
    let machines = state.machine_service.list_for_studio(studio_id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Machines retrieved",
        machines,
    )))
}

#[axum::debug_handler]
pub async fn get_machine(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let machine = state.machine_service.get(id).await?;
    check_permission(&user, ResourceOwner::Studio(machine.studio_id))?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Machine retrieved",
        machine,
    )))
}

#[axum::debug_handler]
pub async fn update_machine(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMachinePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let machine = state.machine_service.get(id).await?;
    check_permission(&user, ResourceOwner::Studio(machine.studio_id))?;
    let machine = state.machine_service.update(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Machine updated successfully",
        machine,
    )))
}

#[axum::debug_handler]
pub async fn delete_machine(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let machine = state.machine_service.get(id).await?;
    check_permission(&user, ResourceOwner::Studio(machine.studio_id))?;
    state.machine_service.delete(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Machine deleted successfully",
    )))
}

#[axum::debug_handler]
pub async fn create_category(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<MachineCategoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    require_role(&user, &[RoleName::Admin])?;
    let category = state.machine_service.create_category(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            StatusCode::CREATED,
            "Machine category created successfully",
            category,
        )),
    ))
}

#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.machine_service.list_categories().await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Machine categories retrieved",
        categories,
    )))
}

#[axum::debug_handler]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let category = state.machine_service.get_category(id).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Machine category retrieved",
        category,
    )))
}

#[axum::debug_handler]
pub async fn update_category(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<MachineCategoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    require_role(&user, &[RoleName::Admin])?;
    let category = state.machine_service.update_category(id, payload).await?;
    Ok(Json(DataResponse::new(
        StatusCode::OK,
        "Machine category updated successfully",
        category,
    )))
}

#[axum::debug_handler]
pub async fn delete_category(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_role(&user, &[RoleName::Admin])?;
    state.machine_service.delete_category(id).await?;
    Ok(Json(MessageResponse::new(
        StatusCode::OK,
        "Machine category deleted successfully",
    )))
}
