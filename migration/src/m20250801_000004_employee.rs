use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000001_user::User, m20250801_000002_company::Company};

static IDX_EMPLOYEE_USER_ID: &str = "idx-employee-user_id";
static IDX_EMPLOYEE_COMPANY_ID: &str = "idx-employee-company_id";
static FK_EMPLOYEE_USER_ID: &str = "fk-employee-user_id";
static FK_EMPLOYEE_COMPANY_ID: &str = "fk-employee-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_uuid(Employee::Id))
                    .col(uuid(Employee::UserId))
                    .col(uuid(Employee::CompanyId))
                    .col(string(Employee::Position))
                    .col(big_integer(Employee::Salary))
                    .col(date(Employee::HireDate))
                    .col(date_null(Employee::TerminationDate))
                    .col(timestamp(Employee::CreatedAt))
                    .col(timestamp(Employee::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYEE_USER_ID)
                    .table(Employee::Table)
                    .col(Employee::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYEE_COMPANY_ID)
                    .table(Employee::Table)
                    .col(Employee::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMPLOYEE_USER_ID)
                    .from_tbl(Employee::Table)
                    .from_col(Employee::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMPLOYEE_COMPANY_ID)
                    .from_tbl(Employee::Table)
                    .from_col(Employee::CompanyId)
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
                    .name(FK_EMPLOYEE_COMPANY_ID)
                    .table(Employee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMPLOYEE_USER_ID)
                    .table(Employee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEE_COMPANY_ID)
                    .table(Employee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEE_USER_ID)
                    .table(Employee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    UserId,
    CompanyId,
    Position,
    Salary,
    HireDate,
    TerminationDate,
    CreatedAt,
    UpdatedAt,
}
