//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::ports::PostRepository;
use posts_infra::InMemoryPostRepository;

use crate::config::{AppConfig, StorageBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Build the application state with the configured storage backend.
    pub async fn from_config(config: &AppConfig) -> Self {
        let posts = build_repository(config).await;

        tracing::info!(
            backend = posts.backend_name(),
            "Application state initialized"
        );

        Self::new(posts)
    }
}

fn in_memory() -> Arc<dyn PostRepository> {
    Arc::new(InMemoryPostRepository::seeded())
}

#[cfg(feature = "postgres")]
async fn build_repository(config: &AppConfig) -> Arc<dyn PostRepository> {
    use posts_infra::{DatabaseConnections, SeaOrmPostRepository, SqlPostRepository};

    let db_config = match (config.storage, config.database.as_ref()) {
        (StorageBackend::Memory, _) => return in_memory(),
        (_, None) => {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return in_memory();
        }
        (_, Some(db_config)) => db_config,
    };

    match DatabaseConnections::init(db_config).await {
        Ok(connections) => match config.storage {
            StorageBackend::Sql => Arc::new(SqlPostRepository::new(connections.main)),
            _ => Arc::new(SeaOrmPostRepository::new(connections.main)),
        },
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            in_memory()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_repository(config: &AppConfig) -> Arc<dyn PostRepository> {
    if config.storage != StorageBackend::Memory {
        tracing::warn!(
            "Storage backend {:?} requires the postgres feature - using in-memory repository",
            config.storage
        );
    }
    in_memory()
}
