use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use roster::{
    model::access::Role,
    server::{controller::employee::get_employee, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when an employee reads an existing record
async fn returns_employee_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (employee_model, user_model, _) = test
        .employee()
        .insert_employee_with_refs("employee@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let result = get_employee(
        State(test.state()),
        test.session.clone(),
        Path(employee_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 for an employee ID that does not exist
async fn returns_not_found_for_nonexistent_employee() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("manager@example.com").await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let result = get_employee(
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
