use std::sync::Arc;
use tracing::{info, instrument, warn};

use models::{Customer, CustomerId, CustomerInput};

use crate::customer::memory::InMemoryCustomerStore;
use crate::customer::store::CustomerStore;
use crate::errors::ServiceError;

/// Application service for customer records.
/// Delegates the invariants to the store and records what happened.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self { Self { store } }

    pub fn in_memory() -> Self { Self::new(Arc::new(InMemoryCustomerStore::new())) }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CustomerInput) -> Result<Customer, ServiceError> {
        match self.store.create(input).await {
            Ok(c) => {
                info!(event = "customer_created", customer_id = c.id, "created customer");
                Ok(c)
            }
            Err(e) => {
                warn!(event = "customer_create_rejected", error = %e, "create customer rejected");
                Err(e)
            }
        }
    }

    pub async fn list(&self) -> Vec<Customer> {
        self.store.list().await
    }

    pub async fn get(&self, id: CustomerId) -> Result<Customer, ServiceError> {
        self.store.get(id).await
    }

    #[instrument(skip(self, input), fields(customer_id = id))]
    pub async fn update(&self, id: CustomerId, input: CustomerInput) -> Result<Customer, ServiceError> {
        match self.store.update(id, input).await {
            Ok(c) => {
                info!(event = "customer_updated", customer_id = c.id, "updated customer");
                Ok(c)
            }
            Err(e) => {
                warn!(event = "customer_update_rejected", error = %e, "update customer rejected");
                Err(e)
            }
        }
    }

    #[instrument(skip(self), fields(customer_id = id))]
    pub async fn delete(&self, id: CustomerId) -> Result<(), ServiceError> {
        self.store.delete(id).await?;
        info!(event = "customer_deleted", customer_id = id, "deleted customer");
        Ok(())
    }
}
