use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;

use roster::{
    model::{access::Role, employee::EmployeePayloadDto},
    server::{controller::employee::update_employee, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 with the changed position persisted when an HR manager updates the record
async fn updates_employee_for_hr_manager_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (employee_model, user_model, company_model) = test
        .employee()
        .insert_employee_with_refs("employee@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let payload = EmployeePayloadDto {
        position: Some("Staff Engineer".to_string()),
        salary: Some(employee_model.salary),
        hire_date: Some(employee_model.hire_date),
        termination_date: employee_model.termination_date,
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_employee(
        State(test.state()),
        test.session.clone(),
        Path(employee_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::Employee::find_by_id(employee_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.position, "Staff Engineer");

    Ok(())
}

#[tokio::test]
/// Expect 403 and an unchanged row when an employee attempts the update
async fn returns_forbidden_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (employee_model, user_model, company_model) = test
        .employee()
        .insert_employee_with_refs("employee@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let payload = EmployeePayloadDto {
        position: Some("Self-Promoted Engineer".to_string()),
        salary: Some(employee_model.salary),
        hire_date: Some(employee_model.hire_date),
        termination_date: employee_model.termination_date,
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_employee(
        State(test.state()),
        test.session.clone(),
        Path(employee_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::Employee::find_by_id(employee_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.position, employee_model.position);

    Ok(())
}
