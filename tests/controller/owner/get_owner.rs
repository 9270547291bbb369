use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use roster::{
    model::access::Role,
    server::{controller::owner::get_owner, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when an employee reads an existing owner record
async fn returns_owner_for_employee_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (owner_model, user_model, _) = test
        .owner()
        .insert_owner_with_refs("owner@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Employee)
        .await
        .unwrap();

    let result = get_owner(
        State(test.state()),
        test.session.clone(),
        Path(owner_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 for an owner ID that does not exist
async fn returns_not_found_for_nonexistent_owner() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("owner@example.com").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let result = get_owner(
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
