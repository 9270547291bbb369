use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use roster::{
    model::access::Role,
    server::{controller::customer::get_customer, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when a customer reads an existing record
async fn returns_customer_for_customer_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (customer_model, user_model, _) = test
        .customer()
        .insert_customer_with_refs("customer@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Customer)
        .await
        .unwrap();

    let result = get_customer(
        State(test.state()),
        test.session.clone(),
        Path(customer_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a customer ID that does not exist
async fn returns_not_found_for_nonexistent_customer() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("owner@example.com").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let result = get_customer(
        State(test.state()),
        test.session.clone(),
        Path(Uuid::new_v4()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
