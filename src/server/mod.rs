//! Server application core modules.
//!
//! This module contains all server-side functionality for the Roster application, including
//! HTTP routing, access control, database operations, and record management services. It
//! provides the complete backend infrastructure for the customer, employee, HR manager, and
//! owner record screens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
