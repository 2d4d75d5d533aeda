//! Database operations and SQLite management for plans and actions.
//!
//! This module is the storage edge of the planner: connection handling,
//! schema management, and query interfaces for plans and their embedded
//! action lists. Everything above it works on in-memory models; derived
//! metrics are never persisted.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod action_queries;
pub mod migrations;
pub mod plan_queries;

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
