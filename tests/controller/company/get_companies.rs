use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use roster::{
    model::{access::Role, company::CompanyQueryDto},
    server::{controller::company::get_companies, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when a customer lists companies for reference selection
async fn returns_page_for_customer_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    test.company().insert_company("Initech").await?;
    test.company().insert_company("Globex").await?;
    SessionUser::insert(&test.session, Uuid::new_v4(), Role::Customer)
        .await
        .unwrap();

    let result = get_companies(
        State(test.state()),
        test.session.clone(),
        Query(CompanyQueryDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 when listing companies without an authenticated session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;

    let result = get_companies(
        State(test.state()),
        test.session.clone(),
        Query(CompanyQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
