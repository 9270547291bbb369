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
        owner::{OwnerDto, OwnerPayloadDto, OwnerQueryDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{access, owner::OwnerService},
    },
    validation::ValidationRejection,
};

pub static OWNER_TAG: &str = "owner";

/// Get one page of owner records
#[utoipa::path(
    get,
    path = "/api/owners",
    tag = OWNER_TAG,
    params(OwnerQueryDto),
    responses(
        (status = 200, description = "Success when retrieving owners", body = PageDto<OwnerDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read owner records", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners(
    State(state): State<AppState>,
    session: Session,
    query: Query<OwnerQueryDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Owner, AccessOperation::Read).await?;

    let owner_service = OwnerService::new(&state.db);

    let owners = owner_service.get_owners(query.0).await?;

    Ok((StatusCode::OK, axum::Json(owners)).into_response())
}

/// Get a single owner record by ID
#[utoipa::path(
    get,
    path = "/api/owners/{id}",
    tag = OWNER_TAG,
    params(("id" = Uuid, Path, description = "Owner record ID")),
    responses(
        (status = 200, description = "Success when retrieving an owner", body = OwnerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read owner records", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner(
    State(state): State<AppState>,
    session: Session,
    Path(owner_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Owner, AccessOperation::Read).await?;

    let owner_service = OwnerService::new(&state.db);

    let owner = owner_service
        .get_owner(owner_id)
        .await?
        .ok_or_else(|| Error::NotFound("Owner".to_string()))?;

    Ok((StatusCode::OK, axum::Json(owner)).into_response())
}

/// Create an owner record
#[utoipa::path(
    post,
    path = "/api/owners",
    tag = OWNER_TAG,
    request_body = OwnerPayloadDto,
    responses(
        (status = 201, description = "Success when creating an owner", body = OwnerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to create owner records", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationRejection),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_owner(
    State(state): State<AppState>,
    session: Session,
    payload: axum::Json<OwnerPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Owner, AccessOperation::Create).await?;

    let owner_service = OwnerService::new(&state.db);

    let owner = owner_service.create_owner(payload.0).await?;

    Ok((StatusCode::CREATED, axum::Json(owner)).into_response())
}

/// Update an owner record
#[utoipa::path(
    put,
    path = "/api/owners/{id}",
    tag = OWNER_TAG,
    params(("id" = Uuid, Path, description = "Owner record ID")),
    request_body = OwnerPayloadDto,
    responses(
        (status = 200, description = "Success when updating an owner", body = OwnerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to update owner records", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationRejection),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_owner(
    State(state): State<AppState>,
    session: Session,
    Path(owner_id): Path<Uuid>,
    payload: axum::Json<OwnerPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Owner, AccessOperation::Update).await?;

    let owner_service = OwnerService::new(&state.db);

    let owner = owner_service.update_owner(owner_id, payload.0).await?;

    Ok((StatusCode::OK, axum::Json(owner)).into_response())
}

/// Delete an owner record
#[utoipa::path(
    delete,
    path = "/api/owners/{id}",
    tag = OWNER_TAG,
    params(("id" = Uuid, Path, description = "Owner record ID")),
    responses(
        (status = 204, description = "Success when deleting an owner"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to delete owner records", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    session: Session,
    Path(owner_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Owner, AccessOperation::Delete).await?;

    let owner_service = OwnerService::new(&state.db);

    owner_service.delete_owner(owner_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
