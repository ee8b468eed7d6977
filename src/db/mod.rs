//! # Database Module
//!
//! This module manages the SQLite connection pool and schema bootstrap for
//! the todovault backend. Queries themselves live next to the features they
//! serve (`auth::users`, `todos::db`); this module only provides the shared
//! plumbing.
//!
//! ## Storage Conventions
//!
//! - UUIDs are stored as TEXT in canonical hyphenated form
//! - Timestamps are stored as RFC3339 TEXT with a fixed microsecond width,
//!   so `ORDER BY created_at` compares correctly as plain text
//! - Enum columns (`status`, `priority`) store the wire strings and are
//!   validated before they reach a query
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todovault::db::Database;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let db = Database::connect("sqlite:todovault.db").await?;
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Result as SqlxResult, SqlitePool};
use uuid::Uuid;

/// Result type for database operations
pub type Result<T> = SqlxResult<T>;

/// Database connection manager
///
/// Wraps the SQLite connection pool and owns schema initialization.
/// Cloning is cheap; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open or create the database behind `database_url`
    ///
    /// Creates the database file if it doesn't exist, enables WAL mode and
    /// foreign keys, and applies the schema.
    ///
    /// # Arguments
    ///
    /// * `database_url` - SQLite URL, e.g. `sqlite:todovault.db` or
    ///   `sqlite::memory:`
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error` if the pool cannot be created
    /// or the schema cannot be applied.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        // An in-memory SQLite database exists per connection, so the pool
        // must hold exactly one connection and never recycle it.
        let in_memory =
            database_url.contains(":memory:") || database_url.contains("mode=memory");

        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(5))
                .connect_with(options)
                .await?
        };

        let db = Self { pool };
        db.init_schema().await?;

        Ok(db)
    }

    /// Initialize database schema
    ///
    /// Creates all tables and indexes. Statements are idempotent
    /// (`CREATE ... IF NOT EXISTS`) so this is safe on every startup.
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(include_str!("schema.sql"))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Access the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Encode a timestamp for storage
///
/// Fixed microsecond width keeps the TEXT column lexicographically ordered.
pub(crate) fn encode_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a timestamp column
pub(crate) fn decode_timestamp(value: &str, column: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(err),
        })
}

/// Decode a UUID column
pub(crate) fn decode_uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|err| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(err),
    })
}
