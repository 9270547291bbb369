use axum::{http::StatusCode, response::IntoResponse};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use roster::{
    model::access::Role,
    server::{controller::session::get_session, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 when a user is signed in
async fn returns_ok_with_authenticated_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionUser::insert(&test.session, Uuid::new_v4(), Role::HrManager)
        .await
        .unwrap();

    let result = get_session(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 even when no user is signed in
async fn returns_ok_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_session(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
