//! Utility functions and helpers for server operations.
//!
//! This module provides reusable utility functions for common server tasks, currently
//! limited to pagination bounds applied by the list services.

pub mod page;
