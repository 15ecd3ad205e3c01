//! Service layer for bank customer records.
//! - `storage` holds the lock-guarded, id-ordered in-memory table.
//! - `customer` enforces identifier assignment and email uniqueness on top of it.

pub mod errors;
pub mod storage;
pub mod customer;
