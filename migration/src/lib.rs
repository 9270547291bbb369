pub use sea_orm_migration::prelude::*;

mod m20250801_000001_user;
mod m20250801_000002_company;
mod m20250801_000003_customer;
mod m20250801_000004_employee;
mod m20250801_000005_hr_manager;
mod m20250801_000006_owner;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_user::Migration),
            Box::new(m20250801_000002_company::Migration),
            Box::new(m20250801_000003_customer::Migration),
            Box::new(m20250801_000004_employee::Migration),
            Box::new(m20250801_000005_hr_manager::Migration),
            Box::new(m20250801_000006_owner::Migration),
        ]
    }
}
