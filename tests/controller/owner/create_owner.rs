use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;

use roster::{
    model::{access::Role, owner::OwnerPayloadDto},
    server::{controller::owner::create_owner, error::Error, model::session::SessionUser},
};

#[tokio::test]
/// Expect 201 with the submitted values persisted to the database
async fn creates_owner_with_valid_payload() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("owner@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let payload = OwnerPayloadDto {
        start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        end_date: None,
        ownership_percentage: Some(60),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = create_owner(
        State(test.state()),
        test.session.clone(),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let rows = entity::prelude::Owner::find().all(&test.state.db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ownership_percentage, 60);
    assert_eq!(rows[0].user_id, user_model.id);

    Ok(())
}

#[tokio::test]
/// Expect 403 and no inserted row when an HR manager attempts the create
async fn returns_forbidden_for_hr_manager_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("manager@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let payload = OwnerPayloadDto::create_defaults(Some(user_model.id), Some(company_model.id));

    let result = create_owner(
        State(test.state()),
        test.session.clone(),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let rows = entity::prelude::Owner::find().all(&test.state.db).await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 422 naming the missing field when ownership_percentage is omitted
async fn rejects_payload_missing_ownership_percentage() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("owner@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let payload = OwnerPayloadDto {
        start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        end_date: None,
        ownership_percentage: None,
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = create_owner(
        State(test.state()),
        test.session.clone(),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    let Error::Validation(rejection) = &err else {
        panic!("expected a validation rejection");
    };
    assert!(rejection.errors.contains_key("ownership_percentage"));
    assert_eq!(
        err.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    Ok(())
}
