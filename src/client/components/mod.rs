pub mod breadcrumb;
pub mod error;
pub mod form;
pub mod gate;
pub mod navbar;
pub mod page;
pub mod pagination;

pub use breadcrumb::Breadcrumb;
pub use error::ErrorBanner;
pub use gate::AccessGate;
pub use navbar::Navbar;
pub use page::Page;
pub use pagination::Pagination;
