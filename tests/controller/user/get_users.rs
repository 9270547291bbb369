use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;

use roster::{
    model::{access::Role, user::UserQueryDto},
    server::{controller::user::get_users, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when a customer lists users for reference selection
async fn returns_page_for_customer_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("customer@example.com").await?;
    test.user()
        .insert_named_user("manager@example.com", "Avery", "Quinn")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Customer)
        .await
        .unwrap();

    let result = get_users(
        State(test.state()),
        test.session.clone(),
        Query(UserQueryDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 when listing users without an authenticated session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;

    let result = get_users(
        State(test.state()),
        test.session.clone(),
        Query(UserQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
