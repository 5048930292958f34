//! User directory backed by `PostgreSQL`.
//!
//! User accounts are provisioned outside this service (see `tamarind-cli`);
//! the marketplace only resolves identities for authorization checks.

use sqlx::PgPool;

use tamarind_core::UserId;

use super::RepositoryError;
use crate::models::User;
use crate::services::stores::UserDirectory;

/// `PostgreSQL` implementation of [`UserDirectory`].
#[derive(Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Create a new user directory.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
