//! SQLite schema for customer storage

/// Schema version for migrations
pub const SCHEMA_VERSION: u32 = 1;

/// SQLite schema definition
pub struct Schema;

impl Schema {
    /// Get the complete schema SQL
    pub fn create_tables() -> &'static str {
        r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Customer records; id is assigned by the store on insert
CREATE TABLE IF NOT EXISTS customer (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT
);
"#
    }

    /// Get migration SQL for a specific version
    pub fn migration(from_version: u32, to_version: u32) -> Option<&'static str> {
        match (from_version, to_version) {
            // Add migrations here as the schema evolves
            _ => None,
        }
    }
}
