use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use roster::{
    model::access::Role,
    server::{controller::hr_manager::get_hr_manager, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when an HR manager reads an existing record
async fn returns_hr_manager_for_hr_manager_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (hr_manager_model, user_model, _) = test
        .hr_manager()
        .insert_hr_manager_with_refs("manager@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let result = get_hr_manager(
        State(test.state()),
        test.session.clone(),
        Path(hr_manager_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 for an HR manager ID that does not exist
async fn returns_not_found_for_nonexistent_hr_manager() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("owner@example.com").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let result = get_hr_manager(
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
