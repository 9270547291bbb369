use axum::{extract::Query, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        access::{AccessDto, AccessEntity, AccessOperation},
        api::ErrorDto,
    },
    server::{
        error::{access::AccessError, Error},
        model::session::SessionUser,
        service::access,
    },
};

pub static ACCESS_TAG: &str = "access";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccessParams {
    /// Record type the check is scoped to
    pub entity: AccessEntity,
    /// Operation the check is scoped to
    pub operation: AccessOperation,
}

/// Check whether the signed-in user may perform an operation on an entity
#[utoipa::path(
    get,
    path = "/api/access",
    tag = ACCESS_TAG,
    params(AccessParams),
    responses(
        (status = 200, description = "Success when checking access", body = AccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_access(
    session: Session,
    params: Query<AccessParams>,
) -> Result<impl IntoResponse, Error> {
    let session_user = SessionUser::get(&session).await?;

    let Some(user) = session_user else {
        return Err(AccessError::NotAuthenticated.into());
    };

    let allowed = access::permits(user.role, params.0.entity, params.0.operation);

    Ok((StatusCode::OK, axum::Json(AccessDto { allowed })).into_response())
}
