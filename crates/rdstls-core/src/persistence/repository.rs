//! Repository implementing the customer store over SQLite

use std::path::Path;

use super::schema::{Schema, SCHEMA_VERSION};
use super::CustomerStore;
use crate::customer::{Customer, NewCustomer};
use crate::error::{Result, StoreError};

/// SQLite-backed customer repository
pub struct Repository {
    conn: rusqlite::Connection,
}

impl Repository {
    /// Open (or create) the database at the given path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = rusqlite::Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Create an in-memory repository (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Initialize the database schema
    fn initialize(&self) -> Result<()> {
        let current_version = self.get_schema_version().unwrap_or(0);

        if current_version == 0 {
            // Fresh database, create all tables
            self.conn
                .execute_batch(Schema::create_tables())
                .map_err(|e| StoreError::Migration(e.to_string()))?;
            self.set_schema_version(SCHEMA_VERSION)?;
        } else if current_version < SCHEMA_VERSION {
            // Run migrations
            for version in current_version..SCHEMA_VERSION {
                if let Some(migration) = Schema::migration(version, version + 1) {
                    self.conn
                        .execute_batch(migration)
                        .map_err(|e| StoreError::Migration(e.to_string()))?;
                }
            }
            self.set_schema_version(SCHEMA_VERSION)?;
        }

        tracing::debug!(version = SCHEMA_VERSION, "customer schema ready");
        Ok(())
    }

    fn get_schema_version(&self) -> Option<u32> {
        self.conn
            .query_row(
                "SELECT version FROM schema_version ORDER BY applied_at DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .ok()
    }

    fn set_schema_version(&self, version: u32) -> Result<()> {
        self.conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
        Ok(())
    }

    fn row_to_customer(row: &rusqlite::Row) -> rusqlite::Result<Customer> {
        Ok(Customer {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
        })
    }
}

impl CustomerStore for Repository {
    fn create(&self, new: NewCustomer) -> Result<Customer> {
        // Single INSERT; atomic per record
        self.conn.execute(
            "INSERT INTO customer (name, email) VALUES (?1, ?2)",
            rusqlite::params![new.name, new.email],
        )?;
        let id = self.conn.last_insert_rowid();

        Ok(Customer {
            id,
            name: new.name,
            email: new.email,
        })
    }

    fn list_all(&self) -> Result<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email FROM customer ORDER BY id")?;

        let customers = stmt
            .query_map([], Self::row_to_customer)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(customers)
    }
}
