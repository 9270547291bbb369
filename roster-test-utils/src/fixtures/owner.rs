use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn owner<'a>(&'a mut self) -> OwnerFixtures<'a> {
        OwnerFixtures { setup: self }
    }
}

pub struct OwnerFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> OwnerFixtures<'a> {
    pub async fn insert_owner(
        &self,
        user_id: Uuid,
        company_id: Uuid,
    ) -> Result<entity::owner::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Owner::insert(entity::owner::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            company_id: ActiveValue::Set(company_id),
            start_date: ActiveValue::Set(Utc::now().date_naive()),
            end_date: ActiveValue::Set(None),
            ownership_percentage: ActiveValue::Set(100),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_owner_with_refs(
        &mut self,
        email: &str,
        company_name: &str,
    ) -> Result<
        (
            entity::owner::Model,
            entity::user::Model,
            entity::company::Model,
        ),
        TestError,
    > {
        let user_model = self.setup.user().insert_user(email).await?;
        let company_model = self.setup.company().insert_company(company_name).await?;

        let owner_model = self.insert_owner(user_model.id, company_model.id).await?;

        Ok((owner_model, user_model, company_model))
    }
}
