pub use super::company::Entity as Company;
pub use super::customer::Entity as Customer;
pub use super::employee::Entity as Employee;
pub use super::hr_manager::Entity as HrManager;
pub use super::owner::Entity as Owner;
pub use super::user::Entity as User;
