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
        employee::{EmployeeDto, EmployeePayloadDto, EmployeeQueryDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{access, employee::EmployeeService},
    },
    validation::ValidationRejection,
};

pub static EMPLOYEE_TAG: &str = "employee";

/// Get one page of employee records
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    params(EmployeeQueryDto),
    responses(
        (status = 200, description = "Success when retrieving employees", body = PageDto<EmployeeDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read employee records", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    session: Session,
    query: Query<EmployeeQueryDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Employee, AccessOperation::Read).await?;

    let employee_service = EmployeeService::new(&state.db);

    let employees = employee_service.get_employees(query.0).await?;

    Ok((StatusCode::OK, axum::Json(employees)).into_response())
}

/// Get a single employee record by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = Uuid, Path, description = "Employee record ID")),
    responses(
        (status = 200, description = "Success when retrieving an employee", body = EmployeeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read employee records", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Employee, AccessOperation::Read).await?;

    let employee_service = EmployeeService::new(&state.db);

    let employee = employee_service
        .get_employee(employee_id)
        .await?
        .ok_or_else(|| Error::NotFound("Employee".to_string()))?;

    Ok((StatusCode::OK, axum::Json(employee)).into_response())
}

/// Create an employee record
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    request_body = EmployeePayloadDto,
    responses(
        (status = 201, description = "Success when creating an employee", body = EmployeeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to create employee records", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationRejection),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    session: Session,
    payload: axum::Json<EmployeePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Employee, AccessOperation::Create).await?;

    let employee_service = EmployeeService::new(&state.db);

    let employee = employee_service.create_employee(payload.0).await?;

    Ok((StatusCode::CREATED, axum::Json(employee)).into_response())
}

/// Update an employee record
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = Uuid, Path, description = "Employee record ID")),
    request_body = EmployeePayloadDto,
    responses(
        (status = 200, description = "Success when updating an employee", body = EmployeeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to update employee records", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationRejection),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<Uuid>,
    payload: axum::Json<EmployeePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Employee, AccessOperation::Update).await?;

    let employee_service = EmployeeService::new(&state.db);

    let employee = employee_service
        .update_employee(employee_id, payload.0)
        .await?;

    Ok((StatusCode::OK, axum::Json(employee)).into_response())
}

/// Delete an employee record
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = Uuid, Path, description = "Employee record ID")),
    responses(
        (status = 204, description = "Success when deleting an employee"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to delete employee records", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Employee, AccessOperation::Delete).await?;

    let employee_service = EmployeeService::new(&state.db);

    employee_service.delete_employee(employee_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
