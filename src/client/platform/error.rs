use thiserror::Error;

use crate::validation::ValidationRejection;

/// Fixed message shown when an update is rejected with a 403
pub const PERMISSION_DENIED_UPDATE_MESSAGE: &str =
    "You don't have permisisons to update this resource";

/// Error raised by the remote platform adapter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// The API answered with an error status
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },
    /// The API rejected the payload with field violations
    #[error("Validation failed for {} field(s)", .0.errors.len())]
    Validation(ValidationRejection),
    /// The request never reached the API
    #[error("Failed to send request: {0}")]
    Network(String),
    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl PlatformError {
    /// Whether the API refused the operation for lack of permissions
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, PlatformError::Api { status: 403, .. })
    }
}
