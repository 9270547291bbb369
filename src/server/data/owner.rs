use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

/// Owner row joined with its related user and company.
pub type OwnerRow = (
    entity::owner::Model,
    Option<entity::user::Model>,
    Option<entity::company::Model>,
);

pub struct OwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new owner record
    pub async fn create(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        ownership_percentage: i64,
    ) -> Result<entity::owner::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let owner = entity::owner::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            company_id: ActiveValue::Set(company_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            ownership_percentage: ActiveValue::Set(ownership_percentage),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        owner.insert(self.db).await
    }

    pub async fn get(&self, owner_id: Uuid) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find_by_id(owner_id)
            .one(self.db)
            .await
    }

    /// Updates an existing owner record, refreshing its update timestamp
    pub async fn update(
        &self,
        owner_id: Uuid,
        user_id: Uuid,
        company_id: Uuid,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        ownership_percentage: i64,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        let owner = match entity::prelude::Owner::find_by_id(owner_id)
            .one(self.db)
            .await?
        {
            Some(owner) => owner,
            None => return Ok(None),
        };

        let mut owner_am = owner.into_active_model();
        owner_am.user_id = ActiveValue::Set(user_id);
        owner_am.company_id = ActiveValue::Set(company_id);
        owner_am.start_date = ActiveValue::Set(start_date);
        owner_am.end_date = ActiveValue::Set(end_date);
        owner_am.ownership_percentage = ActiveValue::Set(ownership_percentage);
        owner_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let owner = owner_am.update(self.db).await?;

        Ok(Some(owner))
    }

    /// Finds one page of owner records with their related user and company,
    /// alongside the total count of records matching the filters
    ///
    /// Results are ordered newest first.
    pub async fn find_many_with_count(
        &self,
        limit: u64,
        offset: u64,
        user_id: Option<Uuid>,
        company_id: Option<Uuid>,
    ) -> Result<(Vec<OwnerRow>, u64), DbErr> {
        let mut query = entity::prelude::Owner::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::owner::Column::UserId.eq(user_id));
        }

        if let Some(company_id) = company_id {
            query = query.filter(entity::owner::Column::CompanyId.eq(company_id));
        }

        let total_count = query.clone().count(self.db).await?;

        let owners = query
            .order_by_desc(entity::owner::Column::CreatedAt)
            .order_by_desc(entity::owner::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        let users = owners.load_one(entity::prelude::User, self.db).await?;
        let companies = owners.load_one(entity::prelude::Company, self.db).await?;

        let rows = owners
            .into_iter()
            .zip(users)
            .zip(companies)
            .map(|((owner, user), company)| (owner, user, company))
            .collect();

        Ok((rows, total_count))
    }

    /// Deletes an owner record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, owner_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Owner::delete_by_id(owner_id)
            .exec(self.db)
            .await
    }
}
