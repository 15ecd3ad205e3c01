pub mod store;
pub mod memory;
pub mod service;

pub use memory::InMemoryCustomerStore;
pub use service::CustomerService;
pub use store::CustomerStore;
