use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::model::{company::CompanyDto, user::UserDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub registration_date: NaiveDate,
    pub last_purchase_date: Option<NaiveDate>,
    pub total_purchases: i64,
    pub total_spent: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Related user, populated on list responses
    pub user: Option<UserDto>,
    /// Related company, populated on list responses
    pub company: Option<CompanyDto>,
}

/// Form values submitted when creating or updating a customer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerPayloadDto {
    #[validate(required(message = "registration_date is a required field"))]
    pub registration_date: Option<NaiveDate>,
    pub last_purchase_date: Option<NaiveDate>,
    #[validate(
        required(message = "total_purchases is a required field"),
        range(min = 0, message = "total_purchases must be greater than or equal to 0")
    )]
    pub total_purchases: Option<i64>,
    #[validate(
        required(message = "total_spent is a required field"),
        range(min = 0, message = "total_spent must be greater than or equal to 0")
    )]
    pub total_spent: Option<i64>,
    #[validate(required(message = "user_id is a required field"))]
    pub user_id: Option<Uuid>,
    #[validate(required(message = "company_id is a required field"))]
    pub company_id: Option<Uuid>,
}

impl CustomerPayloadDto {
    /// Initial form values for the create screen
    pub fn create_defaults(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Self {
        Self {
            registration_date: Some(Utc::now().date_naive()),
            last_purchase_date: None,
            total_purchases: Some(0),
            total_spent: Some(0),
            user_id,
            company_id,
        }
    }
}

impl From<&CustomerDto> for CustomerPayloadDto {
    fn from(dto: &CustomerDto) -> Self {
        Self {
            registration_date: Some(dto.registration_date),
            last_purchase_date: dto.last_purchase_date,
            total_purchases: Some(dto.total_purchases),
            total_spent: Some(dto.total_spent),
            user_id: Some(dto.user_id),
            company_id: Some(dto.company_id),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct CustomerQueryDto {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub user_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
}
