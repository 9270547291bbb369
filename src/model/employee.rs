use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::model::{company::CompanyDto, user::UserDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EmployeeDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub position: String,
    pub salary: i64,
    pub hire_date: NaiveDate,
    pub termination_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Related user, populated on list responses
    pub user: Option<UserDto>,
    /// Related company, populated on list responses
    pub company: Option<CompanyDto>,
}

/// Form values submitted when creating or updating an employee
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EmployeePayloadDto {
    #[validate(
        required(message = "position is a required field"),
        length(min = 1, message = "position is a required field")
    )]
    pub position: Option<String>,
    #[validate(
        required(message = "salary is a required field"),
        range(min = 0, message = "salary must be greater than or equal to 0")
    )]
    pub salary: Option<i64>,
    #[validate(required(message = "hire_date is a required field"))]
    pub hire_date: Option<NaiveDate>,
    pub termination_date: Option<NaiveDate>,
    #[validate(required(message = "user_id is a required field"))]
    pub user_id: Option<Uuid>,
    #[validate(required(message = "company_id is a required field"))]
    pub company_id: Option<Uuid>,
}

impl EmployeePayloadDto {
    /// Initial form values for the create screen
    pub fn create_defaults(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Self {
        Self {
            position: None,
            salary: Some(0),
            hire_date: Some(Utc::now().date_naive()),
            termination_date: None,
            user_id,
            company_id,
        }
    }
}

impl From<&EmployeeDto> for EmployeePayloadDto {
    fn from(dto: &EmployeeDto) -> Self {
        Self {
            position: Some(dto.position.clone()),
            salary: Some(dto.salary),
            hire_date: Some(dto.hire_date),
            termination_date: dto.termination_date,
            user_id: Some(dto.user_id),
            company_id: Some(dto.company_id),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct EmployeeQueryDto {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub user_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
}
