//! Search keyword popularity counters.
//!
//! Every search parameter bumps a per-keyword counter. Recording is
//! best-effort: callers log and swallow failures instead of propagating them.

use sqlx::PgPool;

use super::RepositoryError;
use crate::services::search::KeywordRecorder;

/// `PostgreSQL` implementation of [`KeywordRecorder`].
#[derive(Clone)]
pub struct PostgresKeywordRecorder {
    pool: PgPool,
}

impl PostgresKeywordRecorder {
    /// Create a new keyword recorder.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl KeywordRecorder for PostgresKeywordRecorder {
    async fn record(&self, keyword: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO search_keywords (keyword)
            VALUES ($1)
            ON CONFLICT (keyword) DO UPDATE
            SET search_count = search_keywords.search_count + 1,
                last_searched_at = now()
            ",
        )
        .bind(keyword)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
