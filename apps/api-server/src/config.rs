//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use posts_infra::database::DatabaseConfig;

/// Which repository implementation serves `/posts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Seeded in-process store.
    Memory,
    /// Hand-written SQL statements.
    Sql,
    /// SeaORM entity mapping.
    Orm,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "sql" | "raw" => Ok(Self::Sql),
            "orm" => Ok(Self::Orm),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: lookup("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.min_connections),
                ..defaults
            }
        });

        let default_storage = if database.is_some() {
            StorageBackend::Orm
        } else {
            StorageBackend::Memory
        };

        let storage = match lookup("STORAGE_BACKEND").map(|s| s.parse::<StorageBackend>()) {
            Some(Ok(storage)) => storage,
            Some(Err(e)) => {
                tracing::warn!("{}; using {:?}", e, default_storage);
                default_storage
            }
            None => default_storage,
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            storage,
            database,
        }
    }
}
