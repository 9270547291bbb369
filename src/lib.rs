pub mod config;
pub mod model;
pub mod validation;

#[cfg(feature = "server")]
pub mod server;
