pub mod errors;
pub mod customer;

pub use customer::{Customer, CustomerId, CustomerInput};
