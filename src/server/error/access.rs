use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{
    access::{AccessEntity, AccessOperation},
    api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("No authenticated user in session")]
    NotAuthenticated,
    #[error("Role {role} is not permitted to {operation} {entity} records")]
    PermissionDenied {
        role: String,
        entity: AccessEntity,
        operation: AccessOperation,
    },
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not authenticated".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::PermissionDenied { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Forbidden".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
