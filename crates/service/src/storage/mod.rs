//! Storage abstractions for service layer
//!
//! In-memory, lock-guarded tables shared by the entity stores.

pub mod memory_table;
