//! Application state - shared across all handlers.

use std::sync::Arc;

use inkwell_core::RepoError;
use inkwell_core::ports::PostRepository;
use inkwell_infra::InMemoryPostRepository;

use crate::config::StoreConfig;

/// Shared application state.
///
/// Holds only the store handle; requests share no other state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub store: &'static str,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, store: &'static str) -> Self {
        Self { posts, store }
    }

    /// Build the state for the configured store.
    pub async fn from_config(config: &StoreConfig) -> Result<Self, RepoError> {
        let posts: Arc<dyn PostRepository> = match config {
            #[cfg(feature = "supabase")]
            StoreConfig::Supabase(supabase) => {
                Arc::new(inkwell_infra::SupabasePostRepository::new(supabase)?)
            }
            #[cfg(feature = "postgres")]
            StoreConfig::Postgres(database) => {
                let conn = inkwell_infra::database::connect(database)
                    .await
                    .map_err(|e| RepoError::Connection(e.to_string()))?;
                Arc::new(inkwell_infra::PostgresPostRepository::new(conn))
            }
            StoreConfig::Memory => {
                tracing::warn!(
                    "No store configured (SUPABASE_URL/SUPABASE_KEY or DATABASE_URL). Posts are kept in memory."
                );
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!(store = config.kind(), "Application state initialized");

        Ok(Self::new(posts, config.kind()))
    }
}
