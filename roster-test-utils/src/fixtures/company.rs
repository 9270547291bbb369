use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn company<'a>(&'a mut self) -> CompanyFixtures<'a> {
        CompanyFixtures { setup: self }
    }
}

pub struct CompanyFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> CompanyFixtures<'a> {
    pub async fn insert_company(&self, name: &str) -> Result<entity::company::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Company::insert(entity::company::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
