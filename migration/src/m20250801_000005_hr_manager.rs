use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000001_user::User, m20250801_000002_company::Company};

static IDX_HR_MANAGER_USER_ID: &str = "idx-hr_manager-user_id";
static IDX_HR_MANAGER_COMPANY_ID: &str = "idx-hr_manager-company_id";
static FK_HR_MANAGER_USER_ID: &str = "fk-hr_manager-user_id";
static FK_HR_MANAGER_COMPANY_ID: &str = "fk-hr_manager-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HrManager::Table)
                    .if_not_exists()
                    .col(pk_uuid(HrManager::Id))
                    .col(uuid(HrManager::UserId))
                    .col(uuid(HrManager::CompanyId))
                    .col(date(HrManager::StartDate))
                    .col(date_null(HrManager::EndDate))
                    .col(big_integer(HrManager::Experience))
                    .col(string(HrManager::Specialization))
                    .col(timestamp(HrManager::CreatedAt))
                    .col(timestamp(HrManager::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HR_MANAGER_USER_ID)
                    .table(HrManager::Table)
                    .col(HrManager::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HR_MANAGER_COMPANY_ID)
                    .table(HrManager::Table)
                    .col(HrManager::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_MANAGER_USER_ID)
                    .from_tbl(HrManager::Table)
                    .from_col(HrManager::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_MANAGER_COMPANY_ID)
                    .from_tbl(HrManager::Table)
                    .from_col(HrManager::CompanyId)
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
                    .name(FK_HR_MANAGER_COMPANY_ID)
                    .table(HrManager::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_HR_MANAGER_USER_ID)
                    .table(HrManager::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HR_MANAGER_COMPANY_ID)
                    .table(HrManager::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HR_MANAGER_USER_ID)
                    .table(HrManager::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HrManager::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HrManager {
    Table,
    Id,
    UserId,
    CompanyId,
    StartDate,
    EndDate,
    Experience,
    Specialization,
    CreatedAt,
    UpdatedAt,
}
