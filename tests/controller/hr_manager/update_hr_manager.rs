use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;

use roster::{
    model::{access::Role, hr_manager::HrManagerPayloadDto},
    server::{controller::hr_manager::update_hr_manager, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 with the changed specialization persisted when an HR manager updates the record
async fn updates_hr_manager_for_hr_manager_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (hr_manager_model, user_model, company_model) = test
        .hr_manager()
        .insert_hr_manager_with_refs("manager@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let payload = HrManagerPayloadDto {
        start_date: Some(hr_manager_model.start_date),
        end_date: hr_manager_model.end_date,
        experience: Some(hr_manager_model.experience),
        specialization: Some("Compensation".to_string()),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_hr_manager(
        State(test.state()),
        test.session.clone(),
        Path(hr_manager_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::HrManager::find_by_id(hr_manager_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.specialization, "Compensation");

    Ok(())
}

#[tokio::test]
/// Expect 403 and an unchanged row when an employee attempts the update
async fn returns_forbidden_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (hr_manager_model, user_model, company_model) = test
        .hr_manager()
        .insert_hr_manager_with_refs("manager@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let payload = HrManagerPayloadDto {
        start_date: Some(hr_manager_model.start_date),
        end_date: hr_manager_model.end_date,
        experience: Some(20),
        specialization: Some(hr_manager_model.specialization.clone()),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_hr_manager(
        State(test.state()),
        test.session.clone(),
        Path(hr_manager_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::HrManager::find_by_id(hr_manager_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.experience, hr_manager_model.experience);

    Ok(())
}
