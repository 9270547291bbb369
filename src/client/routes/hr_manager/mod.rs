pub mod create;
pub mod edit;
pub mod list;

pub use create::HrManagerCreate;
pub use edit::HrManagerEdit;
pub use list::HrManagerList;
