#[cfg(feature = "web")]
use uuid::Uuid;

#[cfg(feature = "web")]
use crate::{
    client::platform::{error::PlatformError, request},
    model::{
        api::PageDto,
        owner::{OwnerDto, OwnerPayloadDto},
    },
};

/// Create an owner record
#[cfg(feature = "web")]
pub async fn create(payload: &OwnerPayloadDto) -> Result<OwnerDto, PlatformError> {
    request::post_json("/api/owners", payload).await
}

/// Update an owner record
#[cfg(feature = "web")]
pub async fn update(owner_id: Uuid, payload: &OwnerPayloadDto) -> Result<OwnerDto, PlatformError> {
    request::put_json(&format!("/api/owners/{}", owner_id), payload).await
}

/// Retrieve a single owner record
#[cfg(feature = "web")]
pub async fn find_first(owner_id: Uuid) -> Result<OwnerDto, PlatformError> {
    request::get_json(&format!("/api/owners/{}", owner_id)).await
}

/// Retrieve one page of owner records with the total count
#[cfg(feature = "web")]
pub async fn find_many_with_count(
    limit: u64,
    offset: u64,
) -> Result<PageDto<OwnerDto>, PlatformError> {
    request::get_json(&format!("/api/owners?limit={}&offset={}", limit, offset)).await
}

/// Delete an owner record
#[cfg(feature = "web")]
pub async fn delete(owner_id: Uuid) -> Result<(), PlatformError> {
    request::delete(&format!("/api/owners/{}", owner_id)).await
}
