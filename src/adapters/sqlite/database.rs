//! Connection management for the booking store.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

use super::helpers::{count_rows, Table};
use super::schema::create_tables;
use super::seed::{seed_reference_data, SeedReport};

/// Row counts across the four tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub users: i64,
    pub trains: i64,
    pub schedules: i64,
    pub bookings: i64,
}

/// An open booking database with its schema in place.
///
/// Cloning shares the underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if needed) the database, ensures the schema exists and,
    /// when configured, seeds reference data into empty tables.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DomainError::database("Invalid database URL", e))?
            .create_if_missing(true)
            .foreign_keys(false);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout());

        // An in-memory database lives exactly as long as its connection.
        if config.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DomainError::database("Failed to connect to database", e))?;

        create_tables(&pool).await?;
        info!(url = %config.url, "Database schema ready");

        let db = Self { pool };
        if config.seed_on_startup {
            db.seed_reference_data().await?;
        }
        Ok(db)
    }

    /// Opens a private in-memory database with reference data.
    pub async fn open_in_memory() -> Result<Self, DomainError> {
        Self::open(&DatabaseConfig::in_memory()).await
    }

    /// Returns the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Seeds each empty table with reference data.
    pub async fn seed_reference_data(&self) -> Result<SeedReport, DomainError> {
        seed_reference_data(&self.pool).await
    }

    pub async fn table_counts(&self) -> Result<TableCounts, DomainError> {
        Ok(TableCounts {
            users: count_rows(&self.pool, Table::Users).await?,
            trains: count_rows(&self.pool, Table::Trains).await?,
            schedules: count_rows(&self.pool, Table::Schedules).await?,
            bookings: count_rows(&self.pool, Table::Bookings).await?,
        })
    }

    /// Closes every pooled connection. An in-memory database is discarded.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database closed");
    }
}
