//! HTTP controller endpoints for the Roster web API.
//!
//! This module contains Axum handlers for session state, access checks, and the
//! record management endpoints. Controllers handle HTTP requests, enforce access
//! through the access service, delegate to the record services, and return
//! appropriate HTTP responses. They integrate with tower-sessions for session
//! management and use utoipa for OpenAPI documentation.

pub mod access;
pub mod company;
pub mod customer;
pub mod employee;
pub mod hr_manager;
pub mod owner;
pub mod session;
pub mod user;
