use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;

use crate::{
    model::{access::SessionDto, api::ErrorDto},
    server::{error::Error, model::session::SessionUser},
};

pub static SESSION_TAG: &str = "session";

/// Get the current session state
#[utoipa::path(
    get,
    path = "/api/session",
    tag = SESSION_TAG,
    responses(
        (status = 200, description = "Success when retrieving the session state", body = SessionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(session: Session) -> Result<impl IntoResponse, Error> {
    let session_user = SessionUser::get(&session).await?;

    let session_dto = match session_user {
        Some(user) => SessionDto {
            authenticated: true,
            user_id: Some(user.user_id),
            role: Some(user.role),
        },
        None => SessionDto {
            authenticated: false,
            user_id: None,
            role: None,
        },
    };

    Ok((StatusCode::OK, axum::Json(session_dto)).into_response())
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/session/logout",
    tag = SESSION_TAG,
    responses(
        (status = 307, description = "Successfully logged out, redirect to the entry route"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let session_user = SessionUser::get(&session).await?;

    // Only clear the session when a user is actually present
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if session_user.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}
