use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        access::{AccessEntity, AccessOperation},
        api::{ErrorDto, PageDto},
        user::{UserDto, UserQueryDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{access, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// Get one page of users for reference selection
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserQueryDto),
    responses(
        (status = 200, description = "Success when retrieving users", body = PageDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read user records", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    query: Query<UserQueryDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::User, AccessOperation::Read).await?;

    let user_service = UserService::new(&state.db);

    let users = user_service.get_users(query.0).await?;

    Ok((StatusCode::OK, axum::Json(users)).into_response())
}
