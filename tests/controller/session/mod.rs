//! Tests for session controller endpoints.
//!
//! This module contains integration tests for session state retrieval and
//! logout, verifying the session is reported and cleared correctly whether or
//! not a user is signed in.

mod get_session;
mod logout;
