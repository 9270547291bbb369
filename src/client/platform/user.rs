#[cfg(feature = "web")]
use crate::{
    client::platform::{error::PlatformError, request},
    model::{api::PageDto, user::UserDto},
};

/// Retrieve one page of users for reference selection
#[cfg(feature = "web")]
pub async fn find_many_with_count(
    limit: u64,
    offset: u64,
) -> Result<PageDto<UserDto>, PlatformError> {
    request::get_json(&format!("/api/users?limit={}&offset={}", limit, offset)).await
}
