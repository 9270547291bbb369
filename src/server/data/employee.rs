use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

/// Employee row joined with its related user and company.
pub type EmployeeRow = (
    entity::employee::Model,
    Option<entity::user::Model>,
    Option<entity::company::Model>,
);

pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    /// Creates a new instance of [`EmployeeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new employee record
    pub async fn create(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        position: String,
        salary: i64,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
    ) -> Result<entity::employee::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let employee = entity::employee::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            position: ActiveValue::Set(position),
            salary: ActiveValue::Set(salary),
            hire_date: ActiveValue::Set(hire_date),
            termination_date: ActiveValue::Set(termination_date),
            user_id: ActiveValue::Set(user_id),
            company_id: ActiveValue::Set(company_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        employee.insert(self.db).await
    }

    pub async fn get(&self, employee_id: Uuid) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find_by_id(employee_id)
            .one(self.db)
            .await
    }

    /// Updates an existing employee record, refreshing its update timestamp
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        employee_id: Uuid,
        user_id: Uuid,
        company_id: Uuid,
        position: String,
        salary: i64,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        let employee = match entity::prelude::Employee::find_by_id(employee_id)
            .one(self.db)
            .await?
        {
            Some(employee) => employee,
            None => return Ok(None),
        };

        let mut employee_am = employee.into_active_model();
        employee_am.user_id = ActiveValue::Set(user_id);
        employee_am.company_id = ActiveValue::Set(company_id);
        employee_am.position = ActiveValue::Set(position);
        employee_am.salary = ActiveValue::Set(salary);
        employee_am.hire_date = ActiveValue::Set(hire_date);
        employee_am.termination_date = ActiveValue::Set(termination_date);
        employee_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let employee = employee_am.update(self.db).await?;

        Ok(Some(employee))
    }

    /// Finds one page of employee records with their related user and company,
    /// alongside the total count of records matching the filters
    ///
    /// Results are ordered newest first.
    pub async fn find_many_with_count(
        &self,
        limit: u64,
        offset: u64,
        user_id: Option<Uuid>,
        company_id: Option<Uuid>,
    ) -> Result<(Vec<EmployeeRow>, u64), DbErr> {
        let mut query = entity::prelude::Employee::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::employee::Column::UserId.eq(user_id));
        }

        if let Some(company_id) = company_id {
            query = query.filter(entity::employee::Column::CompanyId.eq(company_id));
        }

        let total_count = query.clone().count(self.db).await?;

        let employees = query
            .order_by_desc(entity::employee::Column::CreatedAt)
            .order_by_desc(entity::employee::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        let users = employees.load_one(entity::prelude::User, self.db).await?;
        let companies = employees
            .load_one(entity::prelude::Company, self.db)
            .await?;

        let rows = employees
            .into_iter()
            .zip(users)
            .zip(companies)
            .map(|((employee, user), company)| (employee, user, company))
            .collect();

        Ok((rows, total_count))
    }

    /// Deletes an employee record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, employee_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Employee::delete_by_id(employee_id)
            .exec(self.db)
            .await
    }
}
