use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;

use roster::{
    model::{access::Role, hr_manager::HrManagerQueryDto},
    server::{controller::hr_manager::get_hr_managers, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when an employee lists HR manager records
async fn returns_page_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (_, user_model, _) = test
        .hr_manager()
        .insert_hr_manager_with_refs("manager@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let result = get_hr_managers(
        State(test.state()),
        test.session.clone(),
        Query(HrManagerQueryDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 when a customer attempts to list HR manager records
async fn returns_forbidden_for_customer_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("customer@example.com").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Customer)
        .await
        .unwrap();

    let result = get_hr_managers(
        State(test.state()),
        test.session.clone(),
        Query(HrManagerQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
