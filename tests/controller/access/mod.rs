//! Tests for the access check controller endpoint.
//!
//! This module contains integration tests for the access check endpoint the
//! client uses to gate record screens before rendering them.

mod check_access;
