use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        company::{CompanyDto, CompanyQueryDto},
    },
    server::{data::company::CompanyRepository, error::Error, util::page},
};

/// Maps a company database model to its shared DTO.
pub(crate) fn to_company_dto(company: entity::company::Model) -> CompanyDto {
    CompanyDto {
        id: company.id,
        name: company.name,
        description: company.description,
        created_at: company.created_at,
        updated_at: company.updated_at,
    }
}

/// Service for listing companies as foreign key candidates.
pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    /// Creates a new instance of [`CompanyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of companies with the total count
    pub async fn get_companies(
        &self,
        query: CompanyQueryDto,
    ) -> Result<PageDto<CompanyDto>, Error> {
        let (limit, offset) = page::clamp(query.limit, query.offset);

        let company_repo = CompanyRepository::new(self.db);
        let (companies, total_count) = company_repo.find_many_with_count(limit, offset).await?;

        Ok(PageDto {
            data: companies.into_iter().map(to_company_dto).collect(),
            total_count,
        })
    }
}
