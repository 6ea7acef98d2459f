//! SQLite persistence for todos and candidate lists.
//!
//! Each public operation runs in its own transaction. Queries are always
//! scoped to an owner: rows belonging to another user are indistinguishable
//! from missing rows.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod list_queries;
pub mod migrations;
pub mod todo_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
