//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, one per
//! entity (reference data and role records).

pub mod company;
pub mod customer;
pub mod employee;
pub mod hr_manager;
pub mod owner;
pub mod user;
