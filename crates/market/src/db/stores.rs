//! Store repository backed by `PostgreSQL`.

use sqlx::PgPool;

use tamarind_core::{StoreId, StoreStatus};

use super::RepositoryError;
use crate::models::{Menu, NewStore, Store, StoreSearchFilter};
use crate::services::stores::StoreRepository;

const STORE_COLUMNS: &str =
    "id, name, owner_id, created_at, closed_at, minimum_order_quantity, announcement, status";

/// `PostgreSQL` implementation of [`StoreRepository`].
#[derive(Clone)]
pub struct PostgresStoreRepository {
    pool: PgPool,
}

impl PostgresStoreRepository {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl StoreRepository for PostgresStoreRepository {
    /// Insert a store unless the owner already has `cap` active stores.
    ///
    /// The count and the insert execute as one statement, so concurrent
    /// creations for the same owner cannot both slip under the cap.
    async fn create_capped(
        &self,
        store: NewStore,
        cap: i64,
    ) -> Result<Option<Store>, RepositoryError> {
        let sql = format!(
            r"
            INSERT INTO stores
                (name, owner_id, created_at, closed_at, minimum_order_quantity, announcement, status)
            SELECT $1, $2, $3, $4, $5, $6, $7
            WHERE (
                SELECT COUNT(*) FROM stores
                WHERE owner_id = $2 AND status = 'active'
            ) < $8
            RETURNING {STORE_COLUMNS}
            "
        );

        let created = sqlx::query_as::<_, Store>(&sql)
            .bind(&store.name)
            .bind(store.owner_id)
            .bind(store.created_at)
            .bind(store.closed_at)
            .bind(store.minimum_order_quantity)
            .bind(&store.announcement)
            .bind(store.status)
            .bind(cap)
            .fetch_optional(&self.pool)
            .await?;

        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Store>, RepositoryError> {
        let sql = format!("SELECT {STORE_COLUMNS} FROM stores ORDER BY id");
        let stores = sqlx::query_as::<_, Store>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(stores)
    }

    async fn get_by_id(&self, id: StoreId) -> Result<Option<Store>, RepositoryError> {
        let sql = format!("SELECT {STORE_COLUMNS} FROM stores WHERE id = $1");
        let store = sqlx::query_as::<_, Store>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(store)
    }

    /// Menus of a store with the soft-delete flag unset, in primary-key order.
    async fn visible_menus(&self, store_id: StoreId) -> Result<Vec<Menu>, RepositoryError> {
        let menus = sqlx::query_as::<_, Menu>(
            r"
            SELECT id, store_id, name, price, is_deleted, created_at
            FROM menus
            WHERE store_id = $1 AND NOT is_deleted
            ORDER BY id
            ",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(menus)
    }

    async fn set_status(&self, id: StoreId, status: StoreStatus) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE stores SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Composite filter across store name, menu name, and status.
    ///
    /// Matching semantics (this layer's contract): store and menu names match
    /// case-insensitively on substrings (`ILIKE '%term%'`), status matches
    /// exactly, and present filters combine with AND. Only non-deleted menus
    /// are considered. Results come back in primary-key order.
    async fn search(&self, filter: &StoreSearchFilter) -> Result<Vec<Store>, RepositoryError> {
        let stores = sqlx::query_as::<_, Store>(
            r"
            SELECT DISTINCT s.id, s.name, s.owner_id, s.created_at, s.closed_at,
                            s.minimum_order_quantity, s.announcement, s.status
            FROM stores s
            LEFT JOIN menus m ON m.store_id = s.id AND NOT m.is_deleted
            WHERE ($1::text IS NULL OR s.name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR m.name ILIKE '%' || $2 || '%')
              AND ($3::store_status IS NULL OR s.status = $3)
            ORDER BY s.id
            ",
        )
            .bind(filter.store_name.as_deref())
            .bind(filter.menu_name.as_deref())
            .bind(filter.status)
            .fetch_all(&self.pool)
            .await?;

        Ok(stores)
    }
}
