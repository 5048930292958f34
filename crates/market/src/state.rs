//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::MarketConfig;
use crate::db::search_terms::PostgresKeywordRecorder;
use crate::db::stores::PostgresStoreRepository;
use crate::db::users::PostgresUserDirectory;
use crate::services::StoreService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MarketConfig,
    pool: PgPool,
    store_service: StoreService,
}

impl AppState {
    /// Create a new application state wired to Postgres-backed repositories.
    #[must_use]
    pub fn new(config: MarketConfig, pool: PgPool) -> Self {
        let store_service = StoreService::new(
            Arc::new(PostgresStoreRepository::new(pool.clone())),
            Arc::new(PostgresUserDirectory::new(pool.clone())),
            Arc::new(PostgresKeywordRecorder::new(pool.clone())),
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                store_service,
            }),
        }
    }

    /// Get a reference to the marketplace configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the store service.
    #[must_use]
    pub fn store_service(&self) -> &StoreService {
        &self.inner.store_service
    }
}
