use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::model::{company::CompanyDto, user::UserDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OwnerDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub ownership_percentage: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Related user, populated on list responses
    pub user: Option<UserDto>,
    /// Related company, populated on list responses
    pub company: Option<CompanyDto>,
}

/// Form values submitted when creating or updating an owner
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OwnerPayloadDto {
    #[validate(required(message = "start_date is a required field"))]
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(
        required(message = "ownership_percentage is a required field"),
        range(min = 0, message = "ownership_percentage must be greater than or equal to 0")
    )]
    pub ownership_percentage: Option<i64>,
    #[validate(required(message = "user_id is a required field"))]
    pub user_id: Option<Uuid>,
    #[validate(required(message = "company_id is a required field"))]
    pub company_id: Option<Uuid>,
}

impl OwnerPayloadDto {
    /// Initial form values for the create screen
    pub fn create_defaults(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Self {
        Self {
            start_date: Some(Utc::now().date_naive()),
            end_date: None,
            ownership_percentage: Some(0),
            user_id,
            company_id,
        }
    }
}

impl From<&OwnerDto> for OwnerPayloadDto {
    fn from(dto: &OwnerDto) -> Self {
        Self {
            start_date: Some(dto.start_date),
            end_date: dto.end_date,
            ownership_percentage: Some(dto.ownership_percentage),
            user_id: Some(dto.user_id),
            company_id: Some(dto.company_id),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct OwnerQueryDto {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub user_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
}
