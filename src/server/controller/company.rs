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
        company::{CompanyDto, CompanyQueryDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{access, company::CompanyService},
    },
};

pub static COMPANY_TAG: &str = "company";

/// Get one page of companies for reference selection
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = COMPANY_TAG,
    params(CompanyQueryDto),
    responses(
        (status = 200, description = "Success when retrieving companies", body = PageDto<CompanyDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to read company records", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_companies(
    State(state): State<AppState>,
    session: Session,
    query: Query<CompanyQueryDto>,
) -> Result<impl IntoResponse, Error> {
    access::require(&session, AccessEntity::Company, AccessOperation::Read).await?;

    let company_service = CompanyService::new(&state.db);

    let companies = company_service.get_companies(query.0).await?;

    Ok((StatusCode::OK, axum::Json(companies)).into_response())
}
