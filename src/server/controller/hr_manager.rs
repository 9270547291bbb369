use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        access::{AccessEntity, AccessOperation},
        api::{ErrorDto, PageDto},
        hr_manager::{HrManagerDto, HrManagerPayloadDto, HrManagerQueryDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{access, hr_manager::HrManagerService},
    },
    validation::ValidationRejection,
};

pub static HR_MANAGER_TAG: &str = "hr-manager";

/// Get one page of HR manager records
#[utoipa::path(
    get,
    path = "/api/hr-managers",
    tag = HR_MANAGER_TAG,
    params(HrManagerQueryDto),
    responses(
        (status = 200, description = "Success when retrieving HR managers", body = PageDto<HrManagerDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read HR manager records", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hr_managers(
    State(state): State<AppState>,
    session: Session,
    query: Query<HrManagerQueryDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::HrManager, AccessOperation::Read).await?;

    let hr_manager_service = HrManagerService::new(&state.db);

    let hr_managers = hr_manager_service.get_hr_managers(query.0).await?;

    Ok((StatusCode::OK, axum::Json(hr_managers)).into_response())
}

/// Get a single HR manager record by ID
#[utoipa::path(
    get,
    path = "/api/hr-managers/{id}",
    tag = HR_MANAGER_TAG,
    params(("id" = Uuid, Path, description = "HR manager record ID")),
    responses(
        (status = 200, description = "Success when retrieving an HR manager", body = HrManagerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read HR manager records", body = ErrorDto),
        (status = 404, description = "HR manager not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hr_manager(
    State(state): State<AppState>,
    session: Session,
    Path(hr_manager_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::HrManager, AccessOperation::Read).await?;

    let hr_manager_service = HrManagerService::new(&state.db);

    let hr_manager = hr_manager_service
        .get_hr_manager(hr_manager_id)
        .await?
        .ok_or_else(|| Error::NotFound("HR manager".to_string()))?;

    Ok((StatusCode::OK, axum::Json(hr_manager)).into_response())
}

/// Create an HR manager record
#[utoipa::path(
    post,
    path = "/api/hr-managers",
    tag = HR_MANAGER_TAG,
    request_body = HrManagerPayloadDto,
    responses(
        (status = 201, description = "Success when creating an HR manager", body = HrManagerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to create HR manager records", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationRejection),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hr_manager(
    State(state): State<AppState>,
    session: Session,
    payload: axum::Json<HrManagerPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::HrManager, AccessOperation::Create).await?;

    let hr_manager_service = HrManagerService::new(&state.db);

    let hr_manager = hr_manager_service.create_hr_manager(payload.0).await?;

    Ok((StatusCode::CREATED, axum::Json(hr_manager)).into_response())
}

/// Update an HR manager record
#[utoipa::path(
    put,
    path = "/api/hr-managers/{id}",
    tag = HR_MANAGER_TAG,
    params(("id" = Uuid, Path, description = "HR manager record ID")),
    request_body = HrManagerPayloadDto,
    responses(
        (status = 200, description = "Success when updating an HR manager", body = HrManagerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to update HR manager records", body = ErrorDto),
        (status = 404, description = "HR manager not found", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationRejection),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hr_manager(
    State(state): State<AppState>,
    session: Session,
    Path(hr_manager_id): Path<Uuid>,
    payload: axum::Json<HrManagerPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::HrManager, AccessOperation::Update).await?;

    let hr_manager_service = HrManagerService::new(&state.db);

    let hr_manager = hr_manager_service
        .update_hr_manager(hr_manager_id, payload.0)
        .await?;

    Ok((StatusCode::OK, axum::Json(hr_manager)).into_response())
}

/// Delete an HR manager record
#[utoipa::path(
    delete,
    path = "/api/hr-managers/{id}",
    tag = HR_MANAGER_TAG,
    params(("id" = Uuid, Path, description = "HR manager record ID")),
    responses(
        (status = 204, description = "Success when deleting an HR manager"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to delete HR manager records", body = ErrorDto),
        (status = 404, description = "HR manager not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hr_manager(
    State(state): State<AppState>,
    session: Session,
    Path(hr_manager_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::HrManager, AccessOperation::Delete).await?;

    let hr_manager_service = HrManagerService::new(&state.db);

    hr_manager_service.delete_hr_manager(hr_manager_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
