//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::{HtmlSanitizer, PostRepository};
use blog_infra::database::DatabaseConfig;
use blog_infra::{AmmoniaSanitizer, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};

/// Backing store the post service was wired to.
#[derive(Clone)]
pub enum Storage {
    Memory,
    #[cfg(feature = "postgres")]
    Postgres(Arc<DatabaseConnections>),
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            #[cfg(feature = "postgres")]
            Storage::Postgres(_) => "postgres",
        }
    }

    /// Whether the store currently answers.
    pub async fn is_healthy(&self) -> bool {
        match self {
            Storage::Memory => true,
            #[cfg(feature = "postgres")]
            Storage::Postgres(db) => match db.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Database ping failed: {}", e);
                    false
                }
            },
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Without database settings the in-memory store is used. A configured
    /// database that cannot be reached or migrated is a start-up error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> io::Result<Self> {
        #[cfg(feature = "postgres")]
        let (repo, storage): (Arc<dyn PostRepository>, Storage) = match db_config {
            Some(config) => {
                let connections = DatabaseConnections::init(config)
                    .await
                    .map_err(|e| io::Error::other(format!("database connection failed: {e}")))?;

                if config.auto_migrate {
                    Migrator::up(&connections.main, None)
                        .await
                        .map_err(|e| io::Error::other(format!("database migration failed: {e}")))?;
                    tracing::info!("Database migrations applied");
                }

                let repo: Arc<dyn PostRepository> =
                    Arc::new(PostgresPostRepository::new(connections.main.clone()));
                (repo, Storage::Postgres(Arc::new(connections)))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                let repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
                (repo, Storage::Memory)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repo, storage): (Arc<dyn PostRepository>, Storage) = {
            if db_config.is_some() {
                tracing::warn!("Database configured but postgres feature is disabled");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            let repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
            (repo, Storage::Memory)
        };

        let state = Self::with_repository(repo, storage);
        tracing::info!(storage = state.storage.name(), "Application state initialized");
        Ok(state)
    }

    /// Wire the post service to an explicit repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>, storage: Storage) -> Self {
        let sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaSanitizer::new());

        Self {
            posts: PostService::new(repo, sanitizer),
            storage,
        }
    }

    /// Empty in-memory state, for tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), Storage::Memory)
    }
}
