use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        api::PageDto,
        hr_manager::{HrManagerDto, HrManagerPayloadDto, HrManagerQueryDto},
    },
    server::{
        data::hr_manager::HrManagerRepository,
        error::Error,
        service::{company::to_company_dto, resolve_references, user::to_user_dto},
        util::page,
    },
    validation::validate_record,
};

/// Maps an HR manager database model and its optional related rows to the shared DTO.
pub(crate) fn to_hr_manager_dto(
    hr_manager: entity::hr_manager::Model,
    user: Option<entity::user::Model>,
    company: Option<entity::company::Model>,
) -> HrManagerDto {
    HrManagerDto {
        id: hr_manager.id,
        user_id: hr_manager.user_id,
        company_id: hr_manager.company_id,
        start_date: hr_manager.start_date,
        end_date: hr_manager.end_date,
        experience: hr_manager.experience,
        specialization: hr_manager.specialization,
        created_at: hr_manager.created_at,
        updated_at: hr_manager.updated_at,
        user: user.map(to_user_dto),
        company: company.map(to_company_dto),
    }
}

/// Service for managing HR manager records.
pub struct HrManagerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HrManagerService<'a> {
    /// Creates a new instance of [`HrManagerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an HR manager record from a validated payload
    pub async fn create_hr_manager(
        &self,
        payload: HrManagerPayloadDto,
    ) -> Result<HrManagerDto, Error> {
        validate_record(&payload).map_err(Error::Validation)?;

        let (Some(user_id), Some(company_id), Some(start_date), Some(experience), Some(specialization)) = (
            payload.user_id,
            payload.company_id,
            payload.start_date,
            payload.experience,
            payload.specialization,
        ) else {
            return Err(Error::InternalError(
                "HR manager payload missing required fields after validation".to_string(),
            ));
        };

        resolve_references(self.db, user_id, company_id).await?;

        let hr_manager_repo = HrManagerRepository::new(self.db);
        let hr_manager = hr_manager_repo
            .create(
                user_id,
                company_id,
                start_date,
                payload.end_date,
                experience,
                specialization,
            )
            .await?;

        Ok(to_hr_manager_dto(hr_manager, None, None))
    }

    /// Updates an existing HR manager record from a validated payload
    ///
    /// # Returns
    /// - `Ok(HrManagerDto)` - The record as persisted after the update
    /// - `Err(Error::NotFound)` - No HR manager exists for the provided ID
    pub async fn update_hr_manager(
        &self,
        hr_manager_id: Uuid,
        payload: HrManagerPayloadDto,
    ) -> Result<HrManagerDto, Error> {
        validate_record(&payload).map_err(Error::Validation)?;

        let (Some(user_id), Some(company_id), Some(start_date), Some(experience), Some(specialization)) = (
            payload.user_id,
            payload.company_id,
            payload.start_date,
            payload.experience,
            payload.specialization,
        ) else {
            return Err(Error::InternalError(
                "HR manager payload missing required fields after validation".to_string(),
            ));
        };

        resolve_references(self.db, user_id, company_id).await?;

        let hr_manager_repo = HrManagerRepository::new(self.db);
        let hr_manager = hr_manager_repo
            .update(
                hr_manager_id,
                user_id,
                company_id,
                start_date,
                payload.end_date,
                experience,
                specialization,
            )
            .await?
            .ok_or_else(|| Error::NotFound("HR manager".to_string()))?;

        Ok(to_hr_manager_dto(hr_manager, None, None))
    }

    /// Retrieves a single HR manager record
    pub async fn get_hr_manager(&self, hr_manager_id: Uuid) -> Result<Option<HrManagerDto>, Error> {
        let hr_manager_repo = HrManagerRepository::new(self.db);

        let hr_manager = hr_manager_repo.get(hr_manager_id).await?;

        Ok(hr_manager.map(|hr_manager| to_hr_manager_dto(hr_manager, None, None)))
    }

    /// Retrieves one page of HR manager records with their related user and company
    pub async fn get_hr_managers(
        &self,
        query: HrManagerQueryDto,
    ) -> Result<PageDto<HrManagerDto>, Error> {
        let (limit, offset) = page::clamp(query.limit, query.offset);

        let hr_manager_repo = HrManagerRepository::new(self.db);
        let (rows, total_count) = hr_manager_repo
            .find_many_with_count(limit, offset, query.user_id, query.company_id)
            .await?;

        Ok(PageDto {
            data: rows
                .into_iter()
                .map(|(hr_manager, user, company)| to_hr_manager_dto(hr_manager, user, company))
                .collect(),
            total_count,
        })
    }

    /// Deletes an HR manager record
    ///
    /// # Returns
    /// - `Ok(())` - The record was deleted
    /// - `Err(Error::NotFound)` - No HR manager exists for the provided ID
    pub async fn delete_hr_manager(&self, hr_manager_id: Uuid) -> Result<(), Error> {
        let hr_manager_repo = HrManagerRepository::new(self.db);

        let delete_result = hr_manager_repo.delete(hr_manager_id).await?;
        if delete_result.rows_affected == 0 {
            return Err(Error::NotFound("HR manager".to_string()));
        }

        Ok(())
    }
}
