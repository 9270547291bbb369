use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000001_user::User, m20250801_000002_company::Company};

static IDX_CUSTOMER_USER_ID: &str = "idx-customer-user_id";
static IDX_CUSTOMER_COMPANY_ID: &str = "idx-customer-company_id";
static FK_CUSTOMER_USER_ID: &str = "fk-customer-user_id";
static FK_CUSTOMER_COMPANY_ID: &str = "fk-customer-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_uuid(Customer::Id))
                    .col(uuid(Customer::UserId))
                    .col(uuid(Customer::CompanyId))
                    .col(date(Customer::RegistrationDate))
                    .col(date_null(Customer::LastPurchaseDate))
                    .col(big_integer(Customer::TotalPurchases))
                    .col(big_integer(Customer::TotalSpent))
                    .col(timestamp(Customer::CreatedAt))
                    .col(timestamp(Customer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_USER_ID)
                    .table(Customer::Table)
                    .col(Customer::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_COMPANY_ID)
                    .table(Customer::Table)
                    .col(Customer::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CUSTOMER_USER_ID)
                    .from_tbl(Customer::Table)
                    .from_col(Customer::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CUSTOMER_COMPANY_ID)
                    .from_tbl(Customer::Table)
                    .from_col(Customer::CompanyId)
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
                    .name(FK_CUSTOMER_COMPANY_ID)
                    .table(Customer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CUSTOMER_USER_ID)
                    .table(Customer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CUSTOMER_COMPANY_ID)
                    .table(Customer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CUSTOMER_USER_ID)
                    .table(Customer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
    UserId,
    CompanyId,
    RegistrationDate,
    LastPurchaseDate,
    TotalPurchases,
    TotalSpent,
    CreatedAt,
    UpdatedAt,
}
