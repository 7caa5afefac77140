/// Database modules organized by feature
mod birthdays;
mod migrations;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

/// Database connection pool wrapper
///
/// Handles all database operations for the bot. The pool is capped at a
/// single connection: the bot has one admin and one scheduled job, and
/// mutations must serialize against each other.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating the file if needed) and run migrations
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.run_migrations().await?;

        info!("Database connected and migrations completed");
        Ok(db)
    }

    /// Get a reference to the connection pool (for internal use)
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
