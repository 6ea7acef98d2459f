//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Cascading candidate deletes rely on foreign keys
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings databases created by older releases up to date.
    fn apply_migrations(&self) -> Result<()> {
        // Early releases stored unweighted candidates
        let has_weight_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('candidates') WHERE name = 'weight'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect candidates table")?;

        if !has_weight_column {
            log::info!("Migrating candidates table: adding weight column");
            self.connection
                .execute(
                    "ALTER TABLE candidates ADD COLUMN weight INTEGER NOT NULL DEFAULT 1",
                    [],
                )
                .db_context("Failed to add weight column to candidates table")?;
        }

        Ok(())
    }
}
