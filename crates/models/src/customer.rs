use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Store-assigned customer identifier. Always positive.
pub type CustomerId = i64;

/// A bank customer as stored and as returned on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub balance: f64,
    pub account_type: String,
}

/// Create/update payload. `id` is assigned by the store, so an `id` key in the
/// body is ignored; absent fields decode to their zero value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub balance: f64,
    pub account_type: String,
}

impl Customer {
    pub fn new(id: CustomerId, input: CustomerInput) -> Result<Self, ModelError> {
        if id <= 0 {
            return Err(ModelError::Validation(format!("customer id must be positive, got {id}")));
        }
        let CustomerInput { name, email, balance, account_type } = input;
        Ok(Self { id, name, email, balance, account_type })
    }

    /// Replace every field but `id`.
    pub fn apply(&mut self, input: CustomerInput) {
        self.name = input.name;
        self.email = input.email;
        self.balance = input.balance;
        self.account_type = input.account_type;
    }
}
