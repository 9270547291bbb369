use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;

use roster::{
    model::access::Role,
    server::{controller::hr_manager::delete_hr_manager, model::session::SessionUser},
};

#[tokio::test]
/// Expect 204 with the row removed when an owner deletes an HR manager
async fn deletes_hr_manager_for_owner_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (hr_manager_model, user_model, _) = test
        .hr_manager()
        .insert_hr_manager_with_refs("manager@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let result = delete_hr_manager(
        State(test.state()),
        test.session.clone(),
        Path(hr_manager_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let stored = entity::prelude::HrManager::find_by_id(hr_manager_model.id)
        .one(&test.state.db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 403 and the row kept when an employee attempts the delete
async fn returns_forbidden_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (hr_manager_model, user_model, _) = test
        .hr_manager()
        .insert_hr_manager_with_refs("manager@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let result = delete_hr_manager(
        State(test.state()),
        test.session.clone(),
        Path(hr_manager_model.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::HrManager::find_by_id(hr_manager_model.id)
        .one(&test.state.db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
