use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;

use roster::{
    model::{access::Role, customer::CustomerPayloadDto},
    server::{controller::customer::create_customer, error::Error, model::session::SessionUser},
};

#[tokio::test]
/// Expect 201 with the submitted values persisted to the database
async fn creates_customer_with_valid_payload() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("customer@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let registration_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let payload = CustomerPayloadDto {
        registration_date: Some(registration_date),
        last_purchase_date: None,
        total_purchases: Some(0),
        total_spent: Some(0),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = create_customer(
        State(test.state()),
        test.session.clone(),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let rows = entity::prelude::Customer::find().all(&test.state.db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].registration_date, registration_date);
    assert_eq!(rows[0].last_purchase_date, None);
    assert_eq!(rows[0].total_purchases, 0);
    assert_eq!(rows[0].total_spent, 0);
    assert_eq!(rows[0].user_id, user_model.id);
    assert_eq!(rows[0].company_id, company_model.id);

    Ok(())
}

#[tokio::test]
/// Expect 422 with a user_id violation and no inserted row when user_id is omitted
async fn rejects_payload_missing_user_id() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("owner@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let payload = CustomerPayloadDto {
        registration_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        last_purchase_date: None,
        total_purchases: Some(0),
        total_spent: Some(0),
        user_id: None,
        company_id: Some(company_model.id),
    };

    let result = create_customer(
        State(test.state()),
        test.session.clone(),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    let Error::Validation(rejection) = &err else {
        panic!("expected a validation rejection");
    };
    assert!(rejection.errors.contains_key("user_id"));
    assert_eq!(
        err.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    // Ensure no partial record was written
    let rows = entity::prelude::Customer::find().all(&test.state.db).await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 403 and no inserted row when an employee attempts the create
async fn returns_forbidden_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("employee@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let payload =
        CustomerPayloadDto::create_defaults(Some(user_model.id), Some(company_model.id));

    let result = create_customer(
        State(test.state()),
        test.session.clone(),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let rows = entity::prelude::Customer::find().all(&test.state.db).await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 401 when creating without an authenticated session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;

    let result = create_customer(
        State(test.state()),
        test.session.clone(),
        axum::Json(CustomerPayloadDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
