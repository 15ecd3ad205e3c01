use async_trait::async_trait;
use models::{Customer, CustomerId, CustomerInput};

use crate::errors::ServiceError;

/// Trait abstraction for customer storage.
///
/// Implementations own the collection and must keep two invariants across
/// every call: ids are unique and never reused, and no two live records share
/// an email (exact, case-sensitive match). A failed call leaves the
/// collection unchanged.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Reject with `DuplicateEmail` if the email is taken, else assign an id and append.
    async fn create(&self, input: CustomerInput) -> Result<Customer, ServiceError>;
    /// All records in creation order.
    async fn list(&self) -> Vec<Customer>;
    async fn get(&self, id: CustomerId) -> Result<Customer, ServiceError>;
    /// Overwrite every field but `id`. Resubmitting the record's own email is allowed.
    async fn update(&self, id: CustomerId, input: CustomerInput) -> Result<Customer, ServiceError>;
    async fn delete(&self, id: CustomerId) -> Result<(), ServiceError>;
}
