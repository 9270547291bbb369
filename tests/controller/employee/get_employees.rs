use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;

use roster::{
    model::{access::Role, employee::EmployeeQueryDto},
    server::{controller::employee::get_employees, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when an HR manager lists employee records
async fn returns_page_for_hr_manager_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (_, user_model, _) = test
        .employee()
        .insert_employee_with_refs("employee@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let result = get_employees(
        State(test.state()),
        test.session.clone(),
        Query(EmployeeQueryDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 when a customer attempts to list employee records
async fn returns_forbidden_for_customer_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("customer@example.com").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Customer)
        .await
        .unwrap();

    let result = get_employees(
        State(test.state()),
        test.session.clone(),
        Query(EmployeeQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 401 when listing without an authenticated session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;

    let result = get_employees(
        State(test.state()),
        test.session.clone(),
        Query(EmployeeQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
