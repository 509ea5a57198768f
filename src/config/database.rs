//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (`sqlite:<path>` or `sqlite::memory:`)
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Seed reference data into empty tables on startup
    #[serde(default = "default_seed_on_startup")]
    pub seed_on_startup: bool,
}

impl DatabaseConfig {
    /// Configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        }
    }

    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// True when the URL names an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("sqlite:") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 16 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        // every pooled connection to :memory: opens its own empty database
        if self.is_in_memory() && self.max_connections != 1 {
            return Err(ValidationError::InMemoryRequiresSingleConnection);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            seed_on_startup: default_seed_on_startup(),
        }
    }
}

fn default_url() -> String {
    "sqlite:railway_management.db".to_string()
}

fn default_max_connections() -> u32 {
    1
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_seed_on_startup() -> bool {
    true
}
