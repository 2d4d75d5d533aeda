//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, PlannerError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases written before completion stamps carried a clock half
        // only have actual_date; add the actual_time column when missing.
        let has_actual_time: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('actions') WHERE name = 'actual_time'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_actual_time {
            self.connection
                .execute("ALTER TABLE actions ADD COLUMN actual_time TEXT", [])
                .map_err(|e| {
                    PlannerError::database_error(
                        "Failed to add actual_time column to actions table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
