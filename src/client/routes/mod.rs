pub mod customer;
pub mod employee;
pub mod home;
pub mod hr_manager;
pub mod not_found;
pub mod owner;

pub use customer::{CustomerCreate, CustomerEdit, CustomerList};
pub use employee::{EmployeeCreate, EmployeeEdit, EmployeeList};
pub use home::Home;
pub use hr_manager::{HrManagerCreate, HrManagerEdit, HrManagerList};
pub use not_found::NotFound;
pub use owner::{OwnerCreate, OwnerEdit, OwnerList};
