//! Tests for customer record controller endpoints.
//!
//! This module contains integration tests for the customer CRUD endpoints,
//! covering record creation, retrieval, updates, deletion, payload validation
//! failures, and role-based access denials.

mod create_customer;
mod delete_customer;
mod get_customer;
mod get_customers;
mod update_customer;
