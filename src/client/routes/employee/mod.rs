pub mod create;
pub mod edit;
pub mod list;

pub use create::EmployeeCreate;
pub use edit::EmployeeEdit;
pub use list::EmployeeList;
