use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        api::PageDto,
        employee::{EmployeeDto, EmployeePayloadDto, EmployeeQueryDto},
    },
    server::{
        data::employee::EmployeeRepository,
        error::Error,
        service::{company::to_company_dto, resolve_references, user::to_user_dto},
        util::page,
    },
    validation::validate_record,
};

/// Maps an employee database model and its optional related rows to the shared DTO.
pub(crate) fn to_employee_dto(
    employee: entity::employee::Model,
    user: Option<entity::user::Model>,
    company: Option<entity::company::Model>,
) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        user_id: employee.user_id,
        company_id: employee.company_id,
        position: employee.position,
        salary: employee.salary,
        hire_date: employee.hire_date,
        termination_date: employee.termination_date,
        created_at: employee.created_at,
        updated_at: employee.updated_at,
        user: user.map(to_user_dto),
        company: company.map(to_company_dto),
    }
}

/// Service for managing employee records.
pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    /// Creates a new instance of [`EmployeeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an employee record from a validated payload
    pub async fn create_employee(&self, payload: EmployeePayloadDto) -> Result<EmployeeDto, Error> {
        validate_record(&payload).map_err(Error::Validation)?;

        let (Some(user_id), Some(company_id), Some(position), Some(salary), Some(hire_date)) = (
            payload.user_id,
            payload.company_id,
            payload.position,
            payload.salary,
            payload.hire_date,
        ) else {
            return Err(Error::InternalError(
                "Employee payload missing required fields after validation".to_string(),
            ));
        };

        resolve_references(self.db, user_id, company_id).await?;

        let employee_repo = EmployeeRepository::new(self.db);
        let employee = employee_repo
            .create(
                user_id,
                company_id,
                position,
                salary,
                hire_date,
                payload.termination_date,
            )
            .await?;

        Ok(to_employee_dto(employee, None, None))
    }

    /// Updates an existing employee record from a validated payload
    ///
    /// # Returns
    /// - `Ok(EmployeeDto)` - The record as persisted after the update
    /// - `Err(Error::NotFound)` - No employee exists for the provided ID
    pub async fn update_employee(
        &self,
        employee_id: Uuid,
        payload: EmployeePayloadDto,
    ) -> Result<EmployeeDto, Error> {
        validate_record(&payload).map_err(Error::Validation)?;

        let (Some(user_id), Some(company_id), Some(position), Some(salary), Some(hire_date)) = (
            payload.user_id,
            payload.company_id,
            payload.position,
            payload.salary,
            payload.hire_date,
        ) else {
            return Err(Error::InternalError(
                "Employee payload missing required fields after validation".to_string(),
            ));
        };

        resolve_references(self.db, user_id, company_id).await?;

        let employee_repo = EmployeeRepository::new(self.db);
        let employee = employee_repo
            .update(
                employee_id,
                user_id,
                company_id,
                position,
                salary,
                hire_date,
                payload.termination_date,
            )
            .await?
            .ok_or_else(|| Error::NotFound("Employee".to_string()))?;

        Ok(to_employee_dto(employee, None, None))
    }

    /// Retrieves a single employee record
    pub async fn get_employee(&self, employee_id: Uuid) -> Result<Option<EmployeeDto>, Error> {
        let employee_repo = EmployeeRepository::new(self.db);

        let employee = employee_repo.get(employee_id).await?;

        Ok(employee.map(|employee| to_employee_dto(employee, None, None)))
    }

    /// Retrieves one page of employee records with their related user and company
    pub async fn get_employees(
        &self,
        query: EmployeeQueryDto,
    ) -> Result<PageDto<EmployeeDto>, Error> {
        let (limit, offset) = page::clamp(query.limit, query.offset);

        let employee_repo = EmployeeRepository::new(self.db);
        let (rows, total_count) = employee_repo
            .find_many_with_count(limit, offset, query.user_id, query.company_id)
            .await?;

        Ok(PageDto {
            data: rows
                .into_iter()
                .map(|(employee, user, company)| to_employee_dto(employee, user, company))
                .collect(),
            total_count,
        })
    }

    /// Deletes an employee record
    ///
    /// # Returns
    /// - `Ok(())` - The record was deleted
    /// - `Err(Error::NotFound)` - No employee exists for the provided ID
    pub async fn delete_employee(&self, employee_id: Uuid) -> Result<(), Error> {
        let employee_repo = EmployeeRepository::new(self.db);

        let delete_result = employee_repo.delete(employee_id).await?;
        if delete_result.rows_affected == 0 {
            return Err(Error::NotFound("Employee".to_string()));
        }

        Ok(())
    }
}
