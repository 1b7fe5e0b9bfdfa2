//! rdstls-core - customer entity model and SQLite-backed persistence
//!
//! The store is accessed only through the [`CustomerStore`] trait: insert one
//! record, list every record. The HTTP layer in `rdstls-server` receives a
//! store by constructor injection.

pub mod customer;
pub mod error;
pub mod persistence;

pub use customer::{Customer, NewCustomer};
pub use error::{Result, StoreError};
pub use persistence::{CustomerStore, Repository};
