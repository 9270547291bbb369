use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;

use roster::{
    model::{access::Role, customer::CustomerQueryDto},
    server::{controller::customer::get_customers, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when an employee lists customer records
async fn returns_page_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (_, user_model, company_model) = test
        .customer()
        .insert_customer_with_refs("customer1@example.com", "Initech")
        .await?;
    let user_model_two = test.user().insert_user("customer2@example.com").await?;
    test.customer()
        .insert_customer(user_model_two.id, company_model.id)
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let result = get_customers(
        State(test.state()),
        test.session.clone(),
        Query(CustomerQueryDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 when listing without an authenticated session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;

    let result = get_customers(
        State(test.state()),
        test.session.clone(),
        Query(CustomerQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
