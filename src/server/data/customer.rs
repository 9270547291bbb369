use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

/// Customer row joined with its related user and company.
pub type CustomerRow = (
    entity::customer::Model,
    Option<entity::user::Model>,
    Option<entity::company::Model>,
);

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new customer record
    pub async fn create(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        registration_date: NaiveDate,
        last_purchase_date: Option<NaiveDate>,
        total_purchases: i64,
        total_spent: i64,
    ) -> Result<entity::customer::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let customer = entity::customer::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            company_id: ActiveValue::Set(company_id),
            registration_date: ActiveValue::Set(registration_date),
            last_purchase_date: ActiveValue::Set(last_purchase_date),
            total_purchases: ActiveValue::Set(total_purchases),
            total_spent: ActiveValue::Set(total_spent),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        customer.insert(self.db).await
    }

    pub async fn get(&self, customer_id: Uuid) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(customer_id)
            .one(self.db)
            .await
    }

    /// Updates an existing customer record, refreshing its update timestamp
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        customer_id: Uuid,
        user_id: Uuid,
        company_id: Uuid,
        registration_date: NaiveDate,
        last_purchase_date: Option<NaiveDate>,
        total_purchases: i64,
        total_spent: i64,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        let customer = match entity::prelude::Customer::find_by_id(customer_id)
            .one(self.db)
            .await?
        {
            Some(customer) => customer,
            None => return Ok(None),
        };

        let mut customer_am = customer.into_active_model();
        customer_am.user_id = ActiveValue::Set(user_id);
        customer_am.company_id = ActiveValue::Set(company_id);
        customer_am.registration_date = ActiveValue::Set(registration_date);
        customer_am.last_purchase_date = ActiveValue::Set(last_purchase_date);
        customer_am.total_purchases = ActiveValue::Set(total_purchases);
        customer_am.total_spent = ActiveValue::Set(total_spent);
        customer_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let customer = customer_am.update(self.db).await?;

        Ok(Some(customer))
    }

    /// Finds one page of customer records with their related user and company,
    /// alongside the total count of records matching the filters
    ///
    /// Results are ordered newest first.
    pub async fn find_many_with_count(
        &self,
        limit: u64,
        offset: u64,
        user_id: Option<Uuid>,
        company_id: Option<Uuid>,
    ) -> Result<(Vec<CustomerRow>, u64), DbErr> {
        let mut query = entity::prelude::Customer::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::customer::Column::UserId.eq(user_id));
        }

        if let Some(company_id) = company_id {
            query = query.filter(entity::customer::Column::CompanyId.eq(company_id));
        }

        let total_count = query.clone().count(self.db).await?;

        let customers = query
            .order_by_desc(entity::customer::Column::CreatedAt)
            .order_by_desc(entity::customer::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        let users = customers.load_one(entity::prelude::User, self.db).await?;
        let companies = customers
            .load_one(entity::prelude::Company, self.db)
            .await?;

        let rows = customers
            .into_iter()
            .zip(users)
            .zip(companies)
            .map(|((customer, user), company)| (customer, user, company))
            .collect();

        Ok((rows, total_count))
    }

    /// Deletes a customer record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, customer_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Customer::delete_by_id(customer_id)
            .exec(self.db)
            .await
    }
}
