use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn hr_manager<'a>(&'a mut self) -> HrManagerFixtures<'a> {
        HrManagerFixtures { setup: self }
    }
}

pub struct HrManagerFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> HrManagerFixtures<'a> {
    pub async fn insert_hr_manager(
        &self,
        user_id: Uuid,
        company_id: Uuid,
    ) -> Result<entity::hr_manager::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::HrManager::insert(entity::hr_manager::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                user_id: ActiveValue::Set(user_id),
                company_id: ActiveValue::Set(company_id),
                start_date: ActiveValue::Set(Utc::now().date_naive()),
                end_date: ActiveValue::Set(None),
                experience: ActiveValue::Set(5),
                specialization: ActiveValue::Set("Recruitment".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_hr_manager_with_refs(
        &mut self,
        email: &str,
        company_name: &str,
    ) -> Result<
        (
            entity::hr_manager::Model,
            entity::user::Model,
            entity::company::Model,
        ),
        TestError,
    > {
        let user_model = self.setup.user().insert_user(email).await?;
        let company_model = self.setup.company().insert_company(company_name).await?;

        let hr_manager_model = self
            .insert_hr_manager(user_model.id, company_model.id)
            .await?;

        Ok((hr_manager_model, user_model, company_model))
    }
}
