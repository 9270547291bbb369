use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;
use uuid::Uuid;

use roster::{
    model::{access::Role, customer::CustomerPayloadDto},
    server::{controller::customer::update_customer, error::Error, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 with the changed values persisted when a customer updates the record
async fn updates_customer_for_customer_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (customer_model, user_model, company_model) = test
        .customer()
        .insert_customer_with_refs("customer@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Customer)
        .await
        .unwrap();

    let payload = CustomerPayloadDto {
        registration_date: Some(customer_model.registration_date),
        last_purchase_date: customer_model.last_purchase_date,
        total_purchases: Some(5),
        total_spent: Some(250),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_customer(
        State(test.state()),
        test.session.clone(),
        Path(customer_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::Customer::find_by_id(customer_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.total_purchases, 5);
    assert_eq!(stored.total_spent, 250);

    Ok(())
}

#[tokio::test]
/// Expect 403 and an unchanged row when an employee attempts the update
async fn returns_forbidden_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (customer_model, user_model, company_model) = test
        .customer()
        .insert_customer_with_refs("customer@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let payload = CustomerPayloadDto {
        registration_date: Some(customer_model.registration_date),
        last_purchase_date: customer_model.last_purchase_date,
        total_purchases: Some(99),
        total_spent: Some(9999),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_customer(
        State(test.state()),
        test.session.clone(),
        Path(customer_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::Customer::find_by_id(customer_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.total_purchases, customer_model.total_purchases);
    assert_eq!(stored.total_spent, customer_model.total_spent);

    Ok(())
}

#[tokio::test]
/// Expect 404 when updating a customer ID that does not exist
async fn returns_not_found_for_nonexistent_customer() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("owner@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let payload =
        CustomerPayloadDto::create_defaults(Some(user_model.id), Some(company_model.id));

    let result = update_customer(
        State(test.state()),
        test.session.clone(),
        Path(Uuid::new_v4()),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 422 naming the missing field when registration_date is omitted
async fn rejects_payload_missing_registration_date() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (customer_model, user_model, company_model) = test
        .customer()
        .insert_customer_with_refs("customer@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let payload = CustomerPayloadDto {
        registration_date: None,
        last_purchase_date: None,
        total_purchases: Some(customer_model.total_purchases),
        total_spent: Some(customer_model.total_spent),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_customer(
        State(test.state()),
        test.session.clone(),
        Path(customer_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    let Error::Validation(rejection) = &err else {
        panic!("expected a validation rejection");
    };
    assert!(rejection.errors.contains_key("registration_date"));
    assert_eq!(
        err.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    Ok(())
}
