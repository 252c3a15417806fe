//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::database::DatabaseConnections;

use crate::config::AppConfig;

/// Shared application state. Handlers reach the store only through the
/// repository port held here.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Open the store connection and build the state. The connection is
    /// handed back to the caller, which closes it once the listener stops.
    /// A missing `DATABASE_URL` or a failed connect aborts startup.
    #[cfg(feature = "postgres")]
    pub async fn init(config: &AppConfig) -> anyhow::Result<(Self, DatabaseConnections)> {
        use quill_infra::database::PostgresPostRepository;

        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let connections = DatabaseConnections::init(db_config).await?;
        let posts: Arc<dyn PostRepository> =
            Arc::new(PostgresPostRepository::new(connections.main.clone()));

        tracing::info!("Application state initialized");
        Ok((Self { posts }, connections))
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn init(_config: &AppConfig) -> anyhow::Result<(Self, DatabaseConnections)> {
        use quill_infra::database::InMemoryPostRepository;

        tracing::info!("Built without postgres support - using in-memory repository");
        Ok((
            Self {
                posts: Arc::new(InMemoryPostRepository::new()),
            },
            DatabaseConnections::in_memory(),
        ))
    }
}
