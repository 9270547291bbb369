pub mod create;
pub mod edit;
pub mod list;

pub use create::CustomerCreate;
pub use edit::CustomerEdit;
pub use list::CustomerList;
