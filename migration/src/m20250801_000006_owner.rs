use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000001_user::User, m20250801_000002_company::Company};

static IDX_OWNER_USER_ID: &str = "idx-owner-user_id";
static IDX_OWNER_COMPANY_ID: &str = "idx-owner-company_id";
static FK_OWNER_USER_ID: &str = "fk-owner-user_id";
static FK_OWNER_COMPANY_ID: &str = "fk-owner-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(pk_uuid(Owner::Id))
                    .col(uuid(Owner::UserId))
                    .col(uuid(Owner::CompanyId))
                    .col(date(Owner::StartDate))
                    .col(date_null(Owner::EndDate))
                    .col(big_integer(Owner::OwnershipPercentage))
                    .col(timestamp(Owner::CreatedAt))
                    .col(timestamp(Owner::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OWNER_USER_ID)
                    .table(Owner::Table)
                    .col(Owner::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OWNER_COMPANY_ID)
                    .table(Owner::Table)
                    .col(Owner::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OWNER_USER_ID)
                    .from_tbl(Owner::Table)
                    .from_col(Owner::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OWNER_COMPANY_ID)
                    .from_tbl(Owner::Table)
                    .from_col(Owner::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OWNER_COMPANY_ID)
                    .table(Owner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OWNER_USER_ID)
                    .table(Owner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OWNER_COMPANY_ID)
                    .table(Owner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OWNER_USER_ID)
                    .table(Owner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Owner {
    Table,
    Id,
    UserId,
    CompanyId,
    StartDate,
    EndDate,
    OwnershipPercentage,
    CreatedAt,
    UpdatedAt,
}
