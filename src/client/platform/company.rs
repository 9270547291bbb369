#[cfg(feature = "web")]
use crate::{
    client::platform::{error::PlatformError, request},
    model::{api::PageDto, company::CompanyDto},
};

/// Retrieve one page of companies for reference selection
#[cfg(feature = "web")]
pub async fn find_many_with_count(
    limit: u64,
    offset: u64,
) -> Result<PageDto<CompanyDto>, PlatformError> {
    request::get_json(&format!("/api/companies?limit={}&offset={}", limit, offset)).await
}
