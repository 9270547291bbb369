use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn employee<'a>(&'a mut self) -> EmployeeFixtures<'a> {
        EmployeeFixtures { setup: self }
    }
}

pub struct EmployeeFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> EmployeeFixtures<'a> {
    pub async fn insert_employee(
        &self,
        user_id: Uuid,
        company_id: Uuid,
    ) -> Result<entity::employee::Model, TestError> {
        self.insert_employee_with_position(user_id, company_id, "Software Engineer")
            .await
    }

    pub async fn insert_employee_with_position(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        position: &str,
    ) -> Result<entity::employee::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Employee::insert(entity::employee::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                position: ActiveValue::Set(position.to_string()),
                salary: ActiveValue::Set(50_000),
                hire_date: ActiveValue::Set(Utc::now().date_naive()),
                termination_date: ActiveValue::Set(None),
                user_id: ActiveValue::Set(user_id),
                company_id: ActiveValue::Set(company_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_employee_with_refs(
        &mut self,
        email: &str,
        company_name: &str,
    ) -> Result<
        (
            entity::employee::Model,
            entity::user::Model,
            entity::company::Model,
        ),
        TestError,
    > {
        let user_model = self.setup.user().insert_user(email).await?;
        let company_model = self.setup.company().insert_company(company_name).await?;

        let employee_model = self
            .insert_employee(user_model.id, company_model.id)
            .await?;

        Ok((employee_model, user_model, company_model))
    }
}
