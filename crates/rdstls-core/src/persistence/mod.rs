//! Persistence layer for customer records
//!
//! Provides SQLite-backed storage behind the [`CustomerStore`] contract.

mod repository;
mod schema;

pub use repository::Repository;
pub use schema::Schema;

use crate::customer::{Customer, NewCustomer};
use crate::error::Result;

/// The data-access contract for customer records.
///
/// Implementations must guarantee that a record returned by [`list_all`]
/// reflects a fully completed prior [`create`]: inserts are atomic per record
/// and partial writes are never visible.
///
/// [`create`]: CustomerStore::create
/// [`list_all`]: CustomerStore::list_all
pub trait CustomerStore: Send {
    /// Persist one customer, assigning a fresh unique id.
    ///
    /// The id is chosen by the store, never by the caller.
    fn create(&self, new: NewCustomer) -> Result<Customer>;

    /// The complete collection in insertion order, materialized in full.
    ///
    /// An empty store yields `Ok(vec![])`, never an error.
    fn list_all(&self) -> Result<Vec<Customer>>;
}
