//! Remote platform adapter for the web client.
//!
//! One module per record type, each exposing the operations the screens
//! need. All remote calls go through [`request`] and surface failures as
//! [`PlatformError`].

pub mod company;
pub mod customer;
pub mod employee;
pub mod error;
pub mod hr_manager;
pub mod owner;
#[cfg(feature = "web")]
pub(crate) mod request;
pub mod session;
pub mod user;

pub use error::{PlatformError, PERMISSION_DENIED_UPDATE_MESSAGE};
