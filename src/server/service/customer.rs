use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        api::PageDto,
        customer::{CustomerDto, CustomerPayloadDto, CustomerQueryDto},
    },
    server::{
        data::customer::CustomerRepository,
        error::Error,
        service::{company::to_company_dto, resolve_references, user::to_user_dto},
        util::page,
    },
    validation::validate_record,
};

/// Maps a customer database model and its optional related rows to the shared DTO.
pub(crate) fn to_customer_dto(
    customer: entity::customer::Model,
    user: Option<entity::user::Model>,
    company: Option<entity::company::Model>,
) -> CustomerDto {
    CustomerDto {
        id: customer.id,
        user_id: customer.user_id,
        company_id: customer.company_id,
        registration_date: customer.registration_date,
        last_purchase_date: customer.last_purchase_date,
        total_purchases: customer.total_purchases,
        total_spent: customer.total_spent,
        created_at: customer.created_at,
        updated_at: customer.updated_at,
        user: user.map(to_user_dto),
        company: company.map(to_company_dto),
    }
}

/// Service for managing customer records.
///
/// Validates payloads, resolves foreign key references, and maps database
/// models to DTOs. Persistence is delegated to [`CustomerRepository`].
pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    /// Creates a new instance of [`CustomerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a customer record from a validated payload
    ///
    /// # Returns
    /// - `Ok(CustomerDto)` - The stored record exactly as persisted
    /// - `Err(Error::Validation)` - Field violations or unresolvable references
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_customer(&self, payload: CustomerPayloadDto) -> Result<CustomerDto, Error> {
        validate_record(&payload).map_err(Error::Validation)?;

        let (
            Some(user_id),
            Some(company_id),
            Some(registration_date),
            Some(total_purchases),
            Some(total_spent),
        ) = (
            payload.user_id,
            payload.company_id,
            payload.registration_date,
            payload.total_purchases,
            payload.total_spent,
        )
        else {
            return Err(Error::InternalError(
                "Customer payload missing required fields after validation".to_string(),
            ));
        };

        resolve_references(self.db, user_id, company_id).await?;

        let customer_repo = CustomerRepository::new(self.db);
        let customer = customer_repo
            .create(
                user_id,
                company_id,
                registration_date,
                payload.last_purchase_date,
                total_purchases,
                total_spent,
            )
            .await?;

        Ok(to_customer_dto(customer, None, None))
    }

    /// Updates an existing customer record from a validated payload
    ///
    /// # Returns
    /// - `Ok(CustomerDto)` - The record as persisted after the update
    /// - `Err(Error::NotFound)` - No customer exists for the provided ID
    /// - `Err(Error::Validation)` - Field violations or unresolvable references
    pub async fn update_customer(
        &self,
        customer_id: Uuid,
        payload: CustomerPayloadDto,
    ) -> Result<CustomerDto, Error> {
        validate_record(&payload).map_err(Error::Validation)?;

        let (
            Some(user_id),
            Some(company_id),
            Some(registration_date),
            Some(total_purchases),
            Some(total_spent),
        ) = (
            payload.user_id,
            payload.company_id,
            payload.registration_date,
            payload.total_purchases,
            payload.total_spent,
        )
        else {
            return Err(Error::InternalError(
                "Customer payload missing required fields after validation".to_string(),
            ));
        };

        resolve_references(self.db, user_id, company_id).await?;

        let customer_repo = CustomerRepository::new(self.db);
        let customer = customer_repo
            .update(
                customer_id,
                user_id,
                company_id,
                registration_date,
                payload.last_purchase_date,
                total_purchases,
                total_spent,
            )
            .await?
            .ok_or_else(|| Error::NotFound("Customer".to_string()))?;

        Ok(to_customer_dto(customer, None, None))
    }

    /// Retrieves a single customer record
    pub async fn get_customer(&self, customer_id: Uuid) -> Result<Option<CustomerDto>, Error> {
        let customer_repo = CustomerRepository::new(self.db);

        let customer = customer_repo.get(customer_id).await?;

        Ok(customer.map(|customer| to_customer_dto(customer, None, None)))
    }

    /// Retrieves one page of customer records with their related user and company
    pub async fn get_customers(
        &self,
        query: CustomerQueryDto,
    ) -> Result<PageDto<CustomerDto>, Error> {
        let (limit, offset) = page::clamp(query.limit, query.offset);

        let customer_repo = CustomerRepository::new(self.db);
        let (rows, total_count) = customer_repo
            .find_many_with_count(limit, offset, query.user_id, query.company_id)
            .await?;

        Ok(PageDto {
            data: rows
                .into_iter()
                .map(|(customer, user, company)| to_customer_dto(customer, user, company))
                .collect(),
            total_count,
        })
    }

    /// Deletes a customer record
    ///
    /// # Returns
    /// - `Ok(())` - The record was deleted
    /// - `Err(Error::NotFound)` - No customer exists for the provided ID
    pub async fn delete_customer(&self, customer_id: Uuid) -> Result<(), Error> {
        let customer_repo = CustomerRepository::new(self.db);

        let delete_result = customer_repo.delete(customer_id).await?;
        if delete_result.rows_affected == 0 {
            return Err(Error::NotFound("Customer".to_string()));
        }

        Ok(())
    }
}
