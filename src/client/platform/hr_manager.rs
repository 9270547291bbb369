#[cfg(feature = "web")]
use uuid::Uuid;

#[cfg(feature = "web")]
use crate::{
    client::platform::{error::PlatformError, request},
    model::{
        api::PageDto,
        hr_manager::{HrManagerDto, HrManagerPayloadDto},
    },
};

/// Create an HR manager record
#[cfg(feature = "web")]
pub async fn create(payload: &HrManagerPayloadDto) -> Result<HrManagerDto, PlatformError> {
    request::post_json("/api/hr-managers", payload).await
}

/// Update an HR manager record
#[cfg(feature = "web")]
pub async fn update(
    hr_manager_id: Uuid,
    payload: &HrManagerPayloadDto,
) -> Result<HrManagerDto, PlatformError> {
    request::put_json(&format!("/api/hr-managers/{}", hr_manager_id), payload).await
}

/// Retrieve a single HR manager record
#[cfg(feature = "web")]
pub async fn find_first(hr_manager_id: Uuid) -> Result<HrManagerDto, PlatformError> {
    request::get_json(&format!("/api/hr-managers/{}", hr_manager_id)).await
}

/// Retrieve one page of HR manager records with the total count
#[cfg(feature = "web")]
pub async fn find_many_with_count(
    limit: u64,
    offset: u64,
) -> Result<PageDto<HrManagerDto>, PlatformError> {
    request::get_json(&format!("/api/hr-managers?limit={}&offset={}", limit, offset)).await
}

/// Delete an HR manager record
#[cfg(feature = "web")]
pub async fn delete(hr_manager_id: Uuid) -> Result<(), PlatformError> {
    request::delete(&format!("/api/hr-managers/{}", hr_manager_id)).await
}
