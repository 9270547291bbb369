use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;

use roster::{
    model::{access::Role, owner::OwnerQueryDto},
    server::{controller::owner::get_owners, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when an HR manager lists owner records
async fn returns_page_for_hr_manager_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (_, user_model, _) = test
        .owner()
        .insert_owner_with_refs("owner@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let result = get_owners(
        State(test.state()),
        test.session.clone(),
        Query(OwnerQueryDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 when a customer attempts to list owner records
async fn returns_forbidden_for_customer_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("customer@example.com").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Customer)
        .await
        .unwrap();

    let result = get_owners(
        State(test.state()),
        test.session.clone(),
        Query(OwnerQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
