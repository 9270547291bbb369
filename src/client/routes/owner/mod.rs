pub mod create;
pub mod edit;
pub mod list;

pub use create::OwnerCreate;
pub use edit::OwnerEdit;
pub use list::OwnerList;
