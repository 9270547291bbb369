use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;

use roster::{
    model::{access::Role, owner::OwnerPayloadDto},
    server::{controller::owner::update_owner, model::session::SessionUser},
};

#[tokio::test]
/// Expect 200 with the changed percentage persisted when an owner updates the record
async fn updates_owner_for_owner_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (owner_model, user_model, company_model) = test
        .owner()
        .insert_owner_with_refs("owner@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::Owner)
        .await
        .unwrap();

    let payload = OwnerPayloadDto {
        start_date: Some(owner_model.start_date),
        end_date: owner_model.end_date,
        ownership_percentage: Some(45),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_owner(
        State(test.state()),
        test.session.clone(),
        Path(owner_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::Owner::find_by_id(owner_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.ownership_percentage, 45);

    Ok(())
}

#[tokio::test]
/// Expect 403 and an unchanged row when an HR manager attempts the update
async fn returns_forbidden_for_hr_manager_role() -> Result<(), TestError> {
    let mut test = test_setup_with_roster_tables!()?;
    let (owner_model, user_model, company_model) = test
        .owner()
        .insert_owner_with_refs("owner@example.com", "Initech")
        .await?;
    SessionUser::insert(&test.session, user_model.id, Role::HrManager)
        .await
        .unwrap();

    let payload = OwnerPayloadDto {
        start_date: Some(owner_model.start_date),
        end_date: owner_model.end_date,
        ownership_percentage: Some(1),
        user_id: Some(user_model.id),
        company_id: Some(company_model.id),
    };

    let result = update_owner(
        State(test.state()),
        test.session.clone(),
        Path(owner_model.id),
        axum::Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::Owner::find_by_id(owner_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.ownership_percentage, owner_model.ownership_percentage);

    Ok(())
}
