//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application
//! state shared across HTTP handlers and session data structures.

pub mod app;
pub mod session;
