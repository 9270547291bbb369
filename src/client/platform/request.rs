//! Shared request plumbing for the platform adapter.
//!
//! Every call carries session cookies and maps non-success statuses to
//! [`PlatformError`], with 422 bodies decoded into field violations.

use serde::{de::DeserializeOwned, Serialize};

use crate::client::platform::error::PlatformError;

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, PlatformError> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::get(path)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| PlatformError::Network(e.to_string()))?;

    parse_response(response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, PlatformError> {
    use reqwasm::http::{Request, RequestCredentials};

    let body = serde_json::to_string(body).map_err(|e| PlatformError::Decode(e.to_string()))?;

    let response = Request::post(path)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| PlatformError::Network(e.to_string()))?;

    parse_response(response).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, PlatformError> {
    use reqwasm::http::{Request, RequestCredentials};

    let body = serde_json::to_string(body).map_err(|e| PlatformError::Decode(e.to_string()))?;

    let response = Request::put(path)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| PlatformError::Network(e.to_string()))?;

    parse_response(response).await
}

pub(crate) async fn delete(path: &str) -> Result<(), PlatformError> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::delete(path)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| PlatformError::Network(e.to_string()))?;

    match response.status() {
        204 => Ok(()),
        _ => Err(error_from(response).await),
    }
}

async fn parse_response<T: DeserializeOwned>(
    response: reqwasm::http::Response,
) -> Result<T, PlatformError> {
    match response.status() {
        200 | 201 => response
            .json::<T>()
            .await
            .map_err(|e| PlatformError::Decode(e.to_string())),
        _ => Err(error_from(response).await),
    }
}

async fn error_from(response: reqwasm::http::Response) -> PlatformError {
    use crate::{model::api::ErrorDto, validation::ValidationRejection};

    let status = response.status();

    if status == 422 {
        return match response.json::<ValidationRejection>().await {
            Ok(rejection) => PlatformError::Validation(rejection),
            Err(e) => PlatformError::Decode(e.to_string()),
        };
    }

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        PlatformError::Api {
            status,
            message: error_dto.error,
        }
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        PlatformError::Api { status, message }
    }
}
