use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};
use uuid::Uuid;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds one page of user accounts alongside the total count
    ///
    /// Results are ordered by email for a stable candidate list.
    pub async fn find_many_with_count(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let total_count = entity::prelude::User::find().count(self.db).await?;

        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Email)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        Ok((users, total_count))
    }
}
