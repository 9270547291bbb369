//! Tests for HR manager record controller endpoints.
//!
//! This module contains integration tests for the HR manager CRUD endpoints,
//! covering record creation, retrieval, updates, deletion, payload validation
//! failures, and role-based access denials.

mod create_hr_manager;
mod delete_hr_manager;
mod get_hr_manager;
mod get_hr_managers;
mod update_hr_manager;
