use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        api::PageDto,
        owner::{OwnerDto, OwnerPayloadDto, OwnerQueryDto},
    },
    server::{
        data::owner::OwnerRepository,
        error::Error,
        service::{company::to_company_dto, resolve_references, user::to_user_dto},
        util::page,
    },
    validation::validate_record,
};

/// Maps an owner database model and its optional related rows to the shared DTO.
pub(crate) fn to_owner_dto(
    owner: entity::owner::Model,
    user: Option<entity::user::Model>,
    company: Option<entity::company::Model>,
) -> OwnerDto {
    OwnerDto {
        id: owner.id,
        user_id: owner.user_id,
        company_id: owner.company_id,
        start_date: owner.start_date,
        end_date: owner.end_date,
        ownership_percentage: owner.ownership_percentage,
        created_at: owner.created_at,
        updated_at: owner.updated_at,
        user: user.map(to_user_dto),
        company: company.map(to_company_dto),
    }
}

/// Service for managing owner records.
pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    /// Creates a new instance of [`OwnerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an owner record from a validated payload
    pub async fn create_owner(&self, payload: OwnerPayloadDto) -> Result<OwnerDto, Error> {
        validate_record(&payload).map_err(Error::Validation)?;

        let (Some(user_id), Some(company_id), Some(start_date), Some(ownership_percentage)) = (
            payload.user_id,
            payload.company_id,
            payload.start_date,
            payload.ownership_percentage,
        ) else {
            return Err(Error::InternalError(
                "Owner payload missing required fields after validation".to_string(),
            ));
        };

        resolve_references(self.db, user_id, company_id).await?;

        let owner_repo = OwnerRepository::new(self.db);
        let owner = owner_repo
            .create(
                user_id,
                company_id,
                start_date,
                payload.end_date,
                ownership_percentage,
            )
            .await?;

        Ok(to_owner_dto(owner, None, None))
    }

    /// Updates an existing owner record from a validated payload
    ///
    /// # Returns
    /// - `Ok(OwnerDto)` - The record as persisted after the update
    /// - `Err(Error::NotFound)` - No owner exists for the provided ID
    pub async fn update_owner(
        &self,
        owner_id: Uuid,
        payload: OwnerPayloadDto,
    ) -> Result<OwnerDto, Error> {
        validate_record(&payload).map_err(Error::Validation)?;

        let (Some(user_id), Some(company_id), Some(start_date), Some(ownership_percentage)) = (
            payload.user_id,
            payload.company_id,
            payload.start_date,
            payload.ownership_percentage,
        ) else {
            return Err(Error::InternalError(
                "Owner payload missing required fields after validation".to_string(),
            ));
        };

        resolve_references(self.db, user_id, company_id).await?;

        let owner_repo = OwnerRepository::new(self.db);
        let owner = owner_repo
            .update(
                owner_id,
                user_id,
                company_id,
                start_date,
                payload.end_date,
                ownership_percentage,
            )
            .await?
            .ok_or_else(|| Error::NotFound("Owner".to_string()))?;

        Ok(to_owner_dto(owner, None, None))
    }

    /// Retrieves a single owner record
    pub async fn get_owner(&self, owner_id: Uuid) -> Result<Option<OwnerDto>, Error> {
        let owner_repo = OwnerRepository::new(self.db);

        let owner = owner_repo.get(owner_id).await?;

        Ok(owner.map(|owner| to_owner_dto(owner, None, None)))
    }

    /// Retrieves one page of owner records with their related user and company
    pub async fn get_owners(&self, query: OwnerQueryDto) -> Result<PageDto<OwnerDto>, Error> {
        let (limit, offset) = page::clamp(query.limit, query.offset);

        let owner_repo = OwnerRepository::new(self.db);
        let (rows, total_count) = owner_repo
            .find_many_with_count(limit, offset, query.user_id, query.company_id)
            .await?;

        Ok(PageDto {
            data: rows
                .into_iter()
                .map(|(owner, user, company)| to_owner_dto(owner, user, company))
                .collect(),
            total_count,
        })
    }

    /// Deletes an owner record
    ///
    /// # Returns
    /// - `Ok(())` - The record was deleted
    /// - `Err(Error::NotFound)` - No owner exists for the provided ID
    pub async fn delete_owner(&self, owner_id: Uuid) -> Result<(), Error> {
        let owner_repo = OwnerRepository::new(self.db);

        let delete_result = owner_repo.delete(owner_id).await?;
        if delete_result.rows_affected == 0 {
            return Err(Error::NotFound("Owner".to_string()));
        }

        Ok(())
    }
}
