#[cfg(feature = "web")]
use crate::{
    client::platform::{error::PlatformError, request},
    model::access::{AccessDto, AccessEntity, AccessOperation, SessionDto},
};

/// Retrieve the current session state from the API
#[cfg(feature = "web")]
pub async fn current() -> Result<SessionDto, PlatformError> {
    request::get_json("/api/session").await
}

/// Ask the API whether the signed-in user may perform an operation
#[cfg(feature = "web")]
pub async fn check_access(
    entity: AccessEntity,
    operation: AccessOperation,
) -> Result<AccessDto, PlatformError> {
    request::get_json(&format!(
        "/api/access?entity={}&operation={}",
        entity, operation
    ))
    .await
}

/// Clear the session on the API
#[cfg(feature = "web")]
pub async fn logout() -> Result<(), PlatformError> {
    use reqwasm::http::{Request, RequestCredentials};

    Request::get("/api/session/logout")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| PlatformError::Network(e.to_string()))?;

    Ok(())
}
