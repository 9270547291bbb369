//! Database fixture utilities for tests.
//!
//! Each submodule extends [`TestSetup`](crate::TestSetup) with an accessor returning
//! insert helpers for one entity. The [`factory`] module provides pure functions for
//! creating in-memory model instances without database interaction.

pub mod company;
pub mod customer;
pub mod employee;
pub mod factory;
pub mod hr_manager;
pub mod owner;
pub mod user;
