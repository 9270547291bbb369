#[cfg(feature = "web")]
use uuid::Uuid;

#[cfg(feature = "web")]
use crate::{
    client::platform::{error::PlatformError, request},
    model::{
        api::PageDto,
        customer::{CustomerDto, CustomerPayloadDto},
    },
};

/// Create a customer record
#[cfg(feature = "web")]
pub async fn create(payload: &CustomerPayloadDto) -> Result<CustomerDto, PlatformError> {
    request::post_json("/api/customers", payload).await
}

/// Update a customer record
#[cfg(feature = "web")]
pub async fn update(
    customer_id: Uuid,
    payload: &CustomerPayloadDto,
) -> Result<CustomerDto, PlatformError> {
    request::put_json(&format!("/api/customers/{}", customer_id), payload).await
}

/// Retrieve a single customer record
#[cfg(feature = "web")]
pub async fn find_first(customer_id: Uuid) -> Result<CustomerDto, PlatformError> {
    request::get_json(&format!("/api/customers/{}", customer_id)).await
}

/// Retrieve one page of customer records with the total count
#[cfg(feature = "web")]
pub async fn find_many_with_count(
    limit: u64,
    offset: u64,
) -> Result<PageDto<CustomerDto>, PlatformError> {
    request::get_json(&format!("/api/customers?limit={}&offset={}", limit, offset)).await
}

/// Delete a customer record
#[cfg(feature = "web")]
pub async fn delete(customer_id: Uuid) -> Result<(), PlatformError> {
    request::delete(&format!("/api/customers/{}", customer_id)).await
}
