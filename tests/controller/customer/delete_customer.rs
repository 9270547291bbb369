use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;
use uuid::Uuid;

use roster::{
    model::access::Role,
    server::{controller::customer::delete_customer, model::session::SessionUser},
};

#[tokio::test]
/// Expect 204 with the row removed when an owner deletes a customer
async fn deletes_customer_for_owner_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (customer_model, user_model, _) = test
        .customer()
        .insert_customer_with_refs("customer@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let result = delete_customer(
        State(test.state()),
        test.session.clone(),
        Path(customer_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let stored = entity::prelude::Customer::find_by_id(customer_model.id)
        .one(&test.state.db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 403 and the row kept when a customer attempts the delete
async fn returns_forbidden_for_customer_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (customer_model, user_model, _) = test
        .customer()
        .insert_customer_with_refs("customer@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Customer)
        .await
        .unwrap();

    let result = delete_customer(
        State(test.state()),
        test.session.clone(),
        Path(customer_model.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::Customer::find_by_id(customer_model.id)
        .one(&test.state.db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 404 when deleting a customer ID that does not exist
async fn returns_not_found_for_nonexistent_customer() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("manager@example.com").await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let result = delete_customer(
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
