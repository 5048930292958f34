//! Database access for the marketplace `PostgreSQL`.
//!
//! # Tables
//!
//! - `users` - marketplace users and their roles
//! - `stores` - seller stores (soft-deleted via `status`)
//! - `menus` - menu items owned by stores (soft-deleted via `is_deleted`)
//! - `search_keywords` - popularity counters for search terms
//!
//! # Migrations
//!
//! Migrations are stored in `crates/market/migrations/` and run via:
//! ```bash
//! cargo run -p tamarind-cli -- migrate market
//! ```
//!
//! All queries use sqlx's runtime-checked API so the crate builds without a
//! live database.

pub mod search_terms;
pub mod stores;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use search_terms::PostgresKeywordRecorder;
pub use stores::PostgresStoreRepository;
pub use users::PostgresUserDirectory;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
