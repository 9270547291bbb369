#[cfg(feature = "web")]
use uuid::Uuid;

#[cfg(feature = "web")]
use crate::{
    client::platform::{error::PlatformError, request},
    model::{
        api::PageDto,
        employee::{EmployeeDto, EmployeePayloadDto},
    },
};

/// Create an employee record
#[cfg(feature = "web")]
pub async fn create(payload: &EmployeePayloadDto) -> Result<EmployeeDto, PlatformError> {
    request::post_json("/api/employees", payload).await
}

/// Update an employee record
#[cfg(feature = "web")]
pub async fn update(
    employee_id: Uuid,
    payload: &EmployeePayloadDto,
) -> Result<EmployeeDto, PlatformError> {
    request::put_json(&format!("/api/employees/{}", employee_id), payload).await
}

/// Retrieve a single employee record
#[cfg(feature = "web")]
pub async fn find_first(employee_id: Uuid) -> Result<EmployeeDto, PlatformError> {
    request::get_json(&format!("/api/employees/{}", employee_id)).await
}

/// Retrieve one page of employee records with the total count
#[cfg(feature = "web")]
pub async fn find_many_with_count(
    limit: u64,
    offset: u64,
) -> Result<PageDto<EmployeeDto>, PlatformError> {
    request::get_json(&format!("/api/employees?limit={}&offset={}", limit, offset)).await
}

/// Delete an employee record
#[cfg(feature = "web")]
pub async fn delete(employee_id: Uuid) -> Result<(), PlatformError> {
    request::delete(&format!("/api/employees/{}", employee_id)).await
}
