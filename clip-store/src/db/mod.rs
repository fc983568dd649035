//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod repository;

use crate::error::StoreResult;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::path::Path;
use std::str::FromStr;

/// File name of the database inside the data directory
pub const DATABASE_FILE: &str = "db.sqlite";

/// Owns the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (creating if missing) the database file at `db_path` and apply migrations
    pub async fn new(db_path: &Path) -> StoreResult<Self> {
        let url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));
        let options = SqliteConnectOptions::from_str(&url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        // busy_timeout: wait up to 5s on write contention instead of failing
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await?;

        tracing::info!(path = %db_path.display(), "Database connection established (SQLite WAL)");

        Self::migrate(pool).await
    }

    /// Private in-memory database, used by tests and dry runs
    ///
    /// Limited to a single connection that never expires; every connection
    /// of `sqlite::memory:` would otherwise see its own empty database.
    pub async fn in_memory() -> StoreResult<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:")?.pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("Database migrations applied");
        Ok(Self { pool })
    }
}
