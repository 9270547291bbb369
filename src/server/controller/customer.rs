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
        customer::{CustomerDto, CustomerPayloadDto, CustomerQueryDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{access, customer::CustomerService},
    },
    validation::ValidationRejection,
};

pub static CUSTOMER_TAG: &str = "customer";

/// Get one page of customer records
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    params(CustomerQueryDto),
    responses(
        (status = 200, description = "Success when retrieving customers", body = PageDto<CustomerDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read customer records", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    session: Session,
    query: Query<CustomerQueryDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Customer, AccessOperation::Read).await?;

    let customer_service = CustomerService::new(&state.db);

    let customers = customer_service.get_customers(query.0).await?;

    Ok((StatusCode::OK, axum::Json(customers)).into_response())
}

/// Get a single customer record by ID
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = Uuid, Path, description = "Customer record ID")),
    responses(
        (status = 200, description = "Success when retrieving a customer", body = CustomerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read customer records", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    session: Session,
    Path(customer_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Customer, AccessOperation::Read).await?;

    let customer_service = CustomerService::new(&state.db);

    let customer = customer_service
        .get_customer(customer_id)
        .await?
        .ok_or_else(|| Error::NotFound("Customer".to_string()))?;

    Ok((StatusCode::OK, axum::Json(customer)).into_response())
}

/// Create a customer record
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CustomerPayloadDto,
    responses(
        (status = 201, description = "Success when creating a customer", body = CustomerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to create customer records", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationRejection),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    session: Session,
    payload: axum::Json<CustomerPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Customer, AccessOperation::Create).await?;

    let customer_service = CustomerService::new(&state.db);

    let customer = customer_service.create_customer(payload.0).await?;

    Ok((StatusCode::CREATED, axum::Json(customer)).into_response())
}

/// Update a customer record
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = Uuid, Path, description = "Customer record ID")),
    request_body = CustomerPayloadDto,
    responses(
        (status = 200, description = "Success when updating a customer", body = CustomerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to update customer records", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationRejection),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    session: Session,
    Path(customer_id): Path<Uuid>,
    payload: axum::Json<CustomerPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Customer, AccessOperation::Update).await?;

    let customer_service = CustomerService::new(&state.db);

    let customer = customer_service
        .update_customer(customer_id, payload.0)
        .await?;

    Ok((StatusCode::OK, axum::Json(customer)).into_response())
}

/// Delete a customer record
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = Uuid, Path, description = "Customer record ID")),
    responses(
        (status = 204, description = "Success when deleting a customer"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to delete customer records", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    session: Session,
    Path(customer_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Customer, AccessOperation::Delete).await?;

    let customer_service = CustomerService::new(&state.db);

    customer_service.delete_customer(customer_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
