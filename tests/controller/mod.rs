//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! invoking the handlers directly with an in-memory database and session. They
//! verify response status codes, access control outcomes, and the database state
//! left behind by each endpoint.

mod access;
mod company;
mod customer;
mod employee;
mod hr_manager;
mod owner;
mod session;
mod user;
