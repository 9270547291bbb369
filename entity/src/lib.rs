pub mod prelude;

pub mod company;
pub mod customer;
pub mod employee;
pub mod hr_manager;
pub mod owner;
pub mod user;
