//! Tests for employee record controller endpoints.
//!
//! This module contains integration tests for the employee CRUD endpoints,
//! covering record creation, retrieval, updates, deletion, payload validation
//! failures, and role-based access denials.

mod create_employee;
mod delete_employee;
mod get_employee;
mod get_employees;
mod update_employee;
