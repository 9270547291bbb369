use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn customer<'a>(&'a mut self) -> CustomerFixtures<'a> {
        CustomerFixtures { setup: self }
    }
}

pub struct CustomerFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> CustomerFixtures<'a> {
    pub async fn insert_customer(
        &self,
        user_id: Uuid,
        company_id: Uuid,
    ) -> Result<entity::customer::Model, TestError> {
        self.insert_customer_registered_on(user_id, company_id, Utc::now().date_naive())
            .await
    }

    pub async fn insert_customer_registered_on(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        registration_date: NaiveDate,
    ) -> Result<entity::customer::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Customer::insert(entity::customer::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                user_id: ActiveValue::Set(user_id),
                company_id: ActiveValue::Set(company_id),
                registration_date: ActiveValue::Set(registration_date),
                last_purchase_date: ActiveValue::Set(None),
                total_purchases: ActiveValue::Set(0),
                total_spent: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_customer_with_refs(
        &mut self,
        email: &str,
        company_name: &str,
    ) -> Result<
        (
            entity::customer::Model,
            entity::user::Model,
            entity::company::Model,
        ),
        TestError,
    > {
        let user_model = self.setup.user().insert_user(email).await?;
        let company_model = self.setup.company().insert_company(company_name).await?;

        let customer_model = self
            .insert_customer(user_model.id, company_model.id)
            .await?;

        Ok((customer_model, user_model, company_model))
    }
}
