use axum::{extract::Query, http::StatusCode, response::IntoResponse};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use roster::{
    model::access::{AccessEntity, AccessOperation, Role},
    server::{
        controller::access::{check_access, AccessParams},
        model::session::SessionUser,
    },
};

#[tokio::test]
/// Expect 200 when checking an operation the role is permitted
async fn returns_ok_for_permitted_operation() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionUser::insert(&test.session, Uuid::new_v4(), Role::HrManager)
        .await
        .unwrap();

    let result = check_access(
        test.session.clone(),
        Query(AccessParams {
            entity: AccessEntity::Customer,
            operation: AccessOperation::Create,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 when checking an operation the role is denied, the flag rides in the body
async fn returns_ok_for_denied_operation() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionUser::insert(&test.session, Uuid::new_v4(), Role::Employee)
        .await
        .unwrap();

    let result = check_access(
        test.session.clone(),
        Query(AccessParams {
            entity: AccessEntity::Customer,
            operation: AccessOperation::Update,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 when checking access without an authenticated session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = check_access(
        test.session.clone(),
        Query(AccessParams {
            entity: AccessEntity::Owner,
            operation: AccessOperation::Read,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
