use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        user::{UserDto, UserQueryDto},
    },
    server::{data::user::UserRepository, error::Error, util::page},
};

/// Maps a user database model to its shared DTO.
pub(crate) fn to_user_dto(user: entity::user::Model) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

/// Service for listing user accounts as foreign key candidates.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of user accounts with the total count
    pub async fn get_users(&self, query: UserQueryDto) -> Result<PageDto<UserDto>, Error> {
        let (limit, offset) = page::clamp(query.limit, query.offset);

        let user_repo = UserRepository::new(self.db);
        let (users, total_count) = user_repo.find_many_with_count(limit, offset).await?;

        Ok(PageDto {
            data: users.into_iter().map(to_user_dto).collect(),
            total_count,
        })
    }
}
