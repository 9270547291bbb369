pub mod app;
pub mod components;
pub mod form;
pub mod platform;
pub mod router;
pub mod routes;
pub mod store;

pub use app::App;
