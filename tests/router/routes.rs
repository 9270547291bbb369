use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use roster_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use roster::server::router::routes;

#[tokio::test]
/// Expect 401 when requesting a protected route without a session cookie
async fn returns_unauthorized_for_protected_route() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let app = routes()
        .with_state(test.state())
        .layer(SessionManagerLayer::new(MemoryStore::default()));

    let request = Request::builder()
        .uri("/api/customers")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 when an anonymous visitor requests the session state
async fn returns_ok_for_session_route() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = routes()
        .with_state(test.state())
        .layer(SessionManagerLayer::new(MemoryStore::default()));

    let request = Request::builder()
        .uri("/api/session")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 when requesting the generated OpenAPI document
async fn returns_ok_for_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = routes()
        .with_state(test.state())
        .layer(SessionManagerLayer::new(MemoryStore::default()));

    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 when requesting a route the router does not register
async fn returns_not_found_for_unknown_route() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = routes()
        .with_state(test.state())
        .layer(SessionManagerLayer::new(MemoryStore::default()));

    let request = Request::builder()
        .uri("/api/interns")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
