pub mod input;
pub mod select;

pub use input::{DateInput, NumberInput, TextInput};
pub use select::{CompanySelect, UserSelect};
