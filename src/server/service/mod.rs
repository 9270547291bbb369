//! Service layer for business logic.
//!
//! This module contains the service layer that implements business logic on top
//! of the repositories: payload validation, reference resolution, and mapping of
//! database models to the shared DTOs. Access decisions live in [`access`].

pub mod access;
pub mod company;
pub mod customer;
pub mod employee;
pub mod hr_manager;
pub mod owner;
pub mod user;

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    server::{
        data::{company::CompanyRepository, user::UserRepository},
        error::Error,
    },
    validation::ValidationRejection,
};

/// Ensures the referenced user and company rows exist before a write.
///
/// Missing references are reported as field violations so the form can surface
/// them the same way as validation failures, rather than leaking a database
/// foreign key error.
pub(crate) async fn resolve_references(
    db: &DatabaseConnection,
    user_id: Uuid,
    company_id: Uuid,
) -> Result<(), Error> {
    let user_repo = UserRepository::new(db);
    let company_repo = CompanyRepository::new(db);

    let mut errors = BTreeMap::new();

    if user_repo.get(user_id).await?.is_none() {
        errors.insert(
            "user_id".to_string(),
            "user_id must reference an existing user".to_string(),
        );
    }

    if company_repo.get(company_id).await?.is_none() {
        errors.insert(
            "company_id".to_string(),
            "company_id must reference an existing company".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(ValidationRejection { errors }))
    }
}
