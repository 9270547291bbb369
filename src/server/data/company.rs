use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};
use uuid::Uuid;

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    /// Creates a new instance of [`CompanyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, company_id: Uuid) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find_by_id(company_id)
            .one(self.db)
            .await
    }

    /// Finds one page of companies alongside the total count
    ///
    /// Results are ordered by name for a stable candidate list.
    pub async fn find_many_with_count(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<entity::company::Model>, u64), DbErr> {
        let total_count = entity::prelude::Company::find().count(self.db).await?;

        let companies = entity::prelude::Company::find()
            .order_by_asc(entity::company::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        Ok((companies, total_count))
    }
}
