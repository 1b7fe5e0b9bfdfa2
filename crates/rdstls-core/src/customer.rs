//! The customer entity

use serde::{Deserialize, Serialize};

/// A persisted customer record.
///
/// The `id` is assigned by the store at insert time and is unique across all
/// records. `name` and `email` carry no uniqueness or format constraints and
/// may be null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A customer that has not been persisted yet.
///
/// Carries no `id`; the store assigns one on insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}
