//! Tests for owner record controller endpoints.
//!
//! This module contains integration tests for the owner CRUD endpoints. Owner
//! records are the most restricted entity: HR managers may read them but only
//! the owner role may create, update, or delete them, which these tests cover
//! alongside the usual validation and lookup failures.

mod create_owner;
mod get_owner;
mod get_owners;
mod update_owner;
