use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;

use roster::{
    model::{access::Role, hr_manager::HrManagerPayloadDto},
    server::{
        controller::hr_manager::create_hr_manager, error::Error, model::session::SessionUser,
    },
};

#[tokio::test]
/// Expect 201 with the submitted values persisted to the database
async fn creates_hr_manager_with_valid_payload() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("manager@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let payload = HrManagerPayloadDto {
        start_date: NaiveDate::from_ymd_opt(2022, 3, 1),
        end_date: None,
        experience: Some(8),
        specialization: Some("Recruitment".to_string()),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = create_hr_manager(
        State(test.state()),
        test.session.clone(),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let rows = entity::prelude::HrManager::find().all(&test.state.db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].specialization, "Recruitment");
    assert_eq!(rows[0].experience, 8);
    assert_eq!(rows[0].user_id, user_model.id);

    Ok(())
}

#[tokio::test]
/// Expect 422 naming the missing field and no inserted row when specialization is omitted
async fn rejects_payload_missing_specialization() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let user_model = test.user().insert_user("manager@example.com").await?;
    let company_model = test.company().insert_company("Initech").await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let payload =
        HrManagerPayloadDto::create_defaults(Some(user_model.id), Some(company_model.id));

    let result = create_hr_manager(
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
    assert!(rejection.errors.contains_key("specialization"));
    assert_eq!(
        err.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let rows = entity::prelude::HrManager::find().all(&test.state.db).await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 401 when creating without an authenticated session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;

    let result = create_hr_manager(
        State(test.state()),
        test.session.clone(),
        axum::Json(HrManagerPayloadDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
