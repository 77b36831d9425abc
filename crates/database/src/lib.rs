//! SQLite persistence layer for Code Copilot.
//!
//! This crate provides async database operations for users, languages and
//! code generations using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{Database, HistoryFilter, generation, seed};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:copilot.db?mode=rwc").await?;
//!     db.migrate().await?;
//!     seed::seed_languages(db.pool(), seed::DEFAULT_LANGUAGES).await?;
//!
//!     // Newest ten Python generations
//!     let filter = HistoryFilter::all().with_language("Python");
//!     let page = generation::list_generation_views(db.pool(), &filter, 10, 0).await?;
//!     println!("{} generations", page.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod generation;
pub mod language;
pub mod models;
pub mod seed;
pub mod user;
pub mod validation;

pub use error::{ConstraintKind, DatabaseError, Result};
pub use models::{
    Generation, GenerationView, HistoryFilter, Language, NewGeneration, NewUser, User,
    UserSummary,
};
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Connection pool bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    /// Maximum open connections.
    pub max_connections: u32,
    /// Connections kept open even when idle.
    pub min_connections: u32,
    /// How long a query waits for a free connection before failing.
    pub acquire_timeout: Duration,
    /// How long an idle connection is kept; `None` keeps it forever.
    pub idle_timeout: Option<Duration>,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 0,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(10)),
        }
    }
}

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to a SQLite database with the default pool settings.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/copilot.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with(url, &PoolSettings::default()).await
    }

    /// Connect to a SQLite database with custom pool settings.
    pub async fn connect_with(url: &str, settings: &PoolSettings) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool: {}..{})",
            url,
            settings.min_connections,
            settings.max_connections
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Fresh migrated in-memory database.
    ///
    /// One connection is pinned open so the shared in-memory file outlives
    /// idle connections.
    pub async fn test_db() -> Database {
        let settings = PoolSettings {
            min_connections: 1,
            idle_timeout: None,
            ..PoolSettings::default()
        };
        let db = Database::connect_with("sqlite::memory:", &settings)
            .await
            .unwrap();
        db.migrate().await.unwrap();
        db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_settings() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.min_connections, 0);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(30));
        assert_eq!(settings.idle_timeout, Some(Duration::from_secs(10)));
    }

    #[tokio::test]
    async fn test_exhausted_pool_times_out() {
        let settings = PoolSettings {
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: Duration::from_millis(100),
            idle_timeout: None,
        };
        let db = Database::connect_with("sqlite::memory:", &settings)
            .await
            .unwrap();
        db.migrate().await.unwrap();

        let _held = db.pool().acquire().await.unwrap();
        let result = user::count_users(db.pool()).await;
        assert!(matches!(result, Err(DatabaseError::PoolTimeout)));
    }
}
