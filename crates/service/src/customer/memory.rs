use async_trait::async_trait;
use models::{Customer, CustomerId, CustomerInput};

use crate::customer::store::CustomerStore;
use crate::errors::ServiceError;
use crate::storage::memory_table::{MemoryTable, Table};

/// Process-local customer store. Empty on every start.
#[derive(Clone, Default)]
pub struct InMemoryCustomerStore {
    table: MemoryTable<Customer>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self { Self::default() }
}

fn email_taken(table: &Table<Customer>, email: &str) -> bool {
    table.values().any(|c| c.email == email)
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn create(&self, input: CustomerInput) -> Result<Customer, ServiceError> {
        self.table
            .write(|t| {
                if email_taken(t, &input.email) {
                    return Err(ServiceError::DuplicateEmail(input.email));
                }
                t.insert_next(|id| Ok(Customer::new(id, input)?)).cloned()
            })
            .await
    }

    async fn list(&self) -> Vec<Customer> {
        self.table.list().await
    }

    async fn get(&self, id: CustomerId) -> Result<Customer, ServiceError> {
        self.table.get(id).await.ok_or_else(|| ServiceError::not_found("customer"))
    }

    async fn update(&self, id: CustomerId, input: CustomerInput) -> Result<Customer, ServiceError> {
        self.table
            .write(|t| {
                let current = t.get(id).ok_or_else(|| ServiceError::not_found("customer"))?;
                // The scan includes the record itself; comparing against its
                // current email first is what lets a resubmission through.
                if input.email != current.email && email_taken(t, &input.email) {
                    return Err(ServiceError::DuplicateEmail(input.email));
                }
                let existing = t.get_mut(id).ok_or_else(|| ServiceError::not_found("customer"))?;
                existing.apply(input);
                Ok(existing.clone())
            })
            .await
    }

    async fn delete(&self, id: CustomerId) -> Result<(), ServiceError> {
        self.table
            .write(|t| {
                t.remove(id)
                    .map(|_| ())
                    .ok_or_else(|| ServiceError::not_found("customer"))
            })
            .await
    }
}
