/// Database modules organized by feature
mod contacts;
mod migrations;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tracing::info;

/// Database connection pool wrapper
///
/// Persists the contact book snapshot between sessions
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection and run migrations
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        // A single connection keeps `sqlite::memory:` databases alive and shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
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
