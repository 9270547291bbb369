//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the test utilities. These aliases match those in the main roster crate
//! to ensure consistency across tests.

/// Type alias for user account database model.
pub type UserModel = entity::user::Model;

/// Type alias for company database model.
pub type CompanyModel = entity::company::Model;

/// Type alias for customer record database model.
pub type CustomerModel = entity::customer::Model;

/// Type alias for employee record database model.
pub type EmployeeModel = entity::employee::Model;

/// Type alias for HR manager record database model.
pub type HrManagerModel = entity::hr_manager::Model;

/// Type alias for owner record database model.
pub type OwnerModel = entity::owner::Model;
