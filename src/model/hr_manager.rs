use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::model::{company::CompanyDto, user::UserDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HrManagerDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub experience: i64,
    pub specialization: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Related user, populated on list responses
    pub user: Option<UserDto>,
    /// Related company, populated on list responses
    pub company: Option<CompanyDto>,
}

/// Form values submitted when creating or updating an HR manager
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HrManagerPayloadDto {
    #[validate(required(message = "start_date is a required field"))]
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(
        required(message = "experience is a required field"),
        range(min = 0, message = "experience must be greater than or equal to 0")
    )]
    pub experience: Option<i64>,
    #[validate(
        required(message = "specialization is a required field"),
        length(min = 1, message = "specialization is a required field")
    )]
    pub specialization: Option<String>,
    #[validate(required(message = "user_id is a required field"))]
    pub user_id: Option<Uuid>,
    #[validate(required(message = "company_id is a required field"))]
    pub company_id: Option<Uuid>,
}

impl HrManagerPayloadDto {
    /// Initial form values for the create screen
    pub fn create_defaults(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Self {
        Self {
            start_date: Some(Utc::now().date_naive()),
            end_date: None,
            experience: Some(0),
            specialization: None,
            user_id,
            company_id,
        }
    }
}

impl From<&HrManagerDto> for HrManagerPayloadDto {
    fn from(dto: &HrManagerDto) -> Self {
        Self {
            start_date: Some(dto.start_date),
            end_date: dto.end_date,
            experience: Some(dto.experience),
            specialization: Some(dto.specialization.clone()),
            user_id: Some(dto.user_id),
            company_id: Some(dto.company_id),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct HrManagerQueryDto {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub user_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
}
