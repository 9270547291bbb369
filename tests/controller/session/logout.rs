use axum::{http::StatusCode, response::IntoResponse};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use roster::{
    model::access::Role,
    server::{controller::session::logout, model::session::SessionUser},
};

#[tokio::test]
/// Expect 307 temporary redirect after logout with a user in session
async fn returns_redirect_on_logout_with_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionUser::insert(&test.session, Uuid::new_v4(), Role::Owner)
        .await
        .unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    // Ensure the user was cleared from session
    let session_user = SessionUser::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after logout even without session data
///
/// This checks for the 500 internal error that occurs when clearing a session
/// without any data in it. The endpoint only clears the session when a user is
/// actually present and redirects either way.
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
