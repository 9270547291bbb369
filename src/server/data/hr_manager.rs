use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

/// HR manager row joined with its related user and company.
pub type HrManagerRow = (
    entity::hr_manager::Model,
    Option<entity::user::Model>,
    Option<entity::company::Model>,
);

pub struct HrManagerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HrManagerRepository<'a, C> {
    /// Creates a new instance of [`HrManagerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new HR manager record
    pub async fn create(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        experience: i64,
        specialization: String,
    ) -> Result<entity::hr_manager::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let hr_manager = entity::hr_manager::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            company_id: ActiveValue::Set(company_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            experience: ActiveValue::Set(experience),
            specialization: ActiveValue::Set(specialization),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        hr_manager.insert(self.db).await
    }

    pub async fn get(
        &self,
        hr_manager_id: Uuid,
    ) -> Result<Option<entity::hr_manager::Model>, DbErr> {
        entity::prelude::HrManager::find_by_id(hr_manager_id)
            .one(self.db)
            .await
    }

    /// Updates an existing HR manager record, refreshing its update timestamp
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        hr_manager_id: Uuid,
        user_id: Uuid,
        company_id: Uuid,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        experience: i64,
        specialization: String,
    ) -> Result<Option<entity::hr_manager::Model>, DbErr> {
        let hr_manager = match entity::prelude::HrManager::find_by_id(hr_manager_id)
            .one(self.db)
            .await?
        {
            Some(hr_manager) => hr_manager,
            None => return Ok(None),
        };

        let mut hr_manager_am = hr_manager.into_active_model();
        hr_manager_am.user_id = ActiveValue::Set(user_id);
        hr_manager_am.company_id = ActiveValue::Set(company_id);
        hr_manager_am.start_date = ActiveValue::Set(start_date);
        hr_manager_am.end_date = ActiveValue::Set(end_date);
        hr_manager_am.experience = ActiveValue::Set(experience);
        hr_manager_am.specialization = ActiveValue::Set(specialization);
        hr_manager_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let hr_manager = hr_manager_am.update(self.db).await?;

        Ok(Some(hr_manager))
    }

    /// Finds one page of HR manager records with their related user and company,
    /// alongside the total count of records matching the filters
    ///
    /// Results are ordered newest first.
    pub async fn find_many_with_count(
        &self,
        limit: u64,
        offset: u64,
        user_id: Option<Uuid>,
        company_id: Option<Uuid>,
    ) -> Result<(Vec<HrManagerRow>, u64), DbErr> {
        let mut query = entity::prelude::HrManager::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::hr_manager::Column::UserId.eq(user_id));
        }

        if let Some(company_id) = company_id {
            query = query.filter(entity::hr_manager::Column::CompanyId.eq(company_id));
        }

        let total_count = query.clone().count(self.db).await?;

        let hr_managers = query
            .order_by_desc(entity::hr_manager::Column::CreatedAt)
            .order_by_desc(entity::hr_manager::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        let users = hr_managers.load_one(entity::prelude::User, self.db).await?;
        let companies = hr_managers
            .load_one(entity::prelude::Company, self.db)
            .await?;

        let rows = hr_managers
            .into_iter()
            .zip(users)
            .zip(companies)
            .map(|((hr_manager, user), company)| (hr_manager, user, company))
            .collect();

        Ok((rows, total_count))
    }

    /// Deletes an HR manager record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, hr_manager_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::HrManager::delete_by_id(hr_manager_id)
            .exec(self.db)
            .await
    }
}
