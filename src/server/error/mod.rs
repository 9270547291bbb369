//! Error types for the Roster server application.
//!
//! This module provides the error handling system for the server, with specialized error
//! types for different domains (access control, configuration). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod access;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{access::AccessError, config::ConfigError},
    validation::ValidationRejection,
};

/// Main error type for the Roster server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse`
/// implementation maps errors to appropriate HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Access control error (missing session, denied operation).
    #[error(transparent)]
    AccessError(#[from] AccessError),
    /// Record validation failure, returned to the client as a 422 response.
    #[error("Validation failed for {} field(s)", .0.errors.len())]
    Validation(ValidationRejection),
    /// Requested record does not exist. Holds the resource name shown to the client.
    #[error("{0} not found")]
    NotFound(String),
    /// Internal error indicating a bug in Roster's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error
    /// that needs to be reported as a GitHub issue.
    #[error("Internal error with Roster's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging, while access,
/// validation, and lookup errors have custom response mappings.
///
/// # Returns
/// - 401 Unauthorized / 403 Forbidden - For access control failures
/// - 404 Not Found - For missing records
/// - 422 Unprocessable Entity - For validation failures (field messages as JSON body)
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AccessError(err) => err.into_response(),
            Self::Validation(rejection) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(rejection)).into_response()
            }
            Self::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", resource),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
