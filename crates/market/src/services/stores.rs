//! Store service - creation eligibility, visibility rules, ownership checks,
//! and search orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{instrument, warn};

use tamarind_core::{StoreId, StoreStatus, UserId, UserRole};

use crate::db::RepositoryError;
use crate::error::AppError;
use crate::models::{AuthUser, Menu, NewStore, Store, StoreSearchFilter};
use crate::services::search::KeywordRecorder;

/// Hard cap on simultaneously active stores per owner.
pub const MAX_ACTIVE_STORES_PER_OWNER: i64 = 3;

/// Persistence contract for store aggregates.
#[async_trait::async_trait]
pub trait StoreRepository: Send + Sync {
    /// Insert a store unless the owner already has `cap` active stores.
    /// Returns `None` when the cap blocked the insert.
    async fn create_capped(
        &self,
        store: NewStore,
        cap: i64,
    ) -> Result<Option<Store>, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<Store>, RepositoryError>;

    async fn get_by_id(&self, id: StoreId) -> Result<Option<Store>, RepositoryError>;

    /// Menus of a store with the soft-delete flag unset, in natural order.
    async fn visible_menus(&self, store_id: StoreId) -> Result<Vec<Menu>, RepositoryError>;

    async fn set_status(&self, id: StoreId, status: StoreStatus) -> Result<(), RepositoryError>;

    async fn search(&self, filter: &StoreSearchFilter) -> Result<Vec<Store>, RepositoryError>;
}

/// Read-only view of the external user directory.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_by_id(&self, id: UserId) -> Result<Option<crate::models::User>, RepositoryError>;
}

/// Fields of a store creation request, minus the caller's identity.
#[derive(Debug, Clone)]
pub struct CreateStore {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
    pub minimum_order_quantity: i32,
    pub announcement: String,
    pub status: StoreStatus,
}

/// A store together with its customer-visible menus.
#[derive(Debug, Clone)]
pub struct StoreDetail {
    pub store: Store,
    pub menus: Vec<Menu>,
}

/// Business rules for stores.
#[derive(Clone)]
pub struct StoreService {
    stores: Arc<dyn StoreRepository>,
    users: Arc<dyn UserDirectory>,
    keywords: Arc<dyn KeywordRecorder>,
}

impl StoreService {
    /// Create a new store service over its collaborators.
    #[must_use]
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        users: Arc<dyn UserDirectory>,
        keywords: Arc<dyn KeywordRecorder>,
    ) -> Self {
        Self {
            stores,
            users,
            keywords,
        }
    }

    /// Create a store owned by the acting user.
    ///
    /// # Errors
    ///
    /// - [`AppError::UserNotFound`] if the caller's identity is unknown.
    /// - [`AppError::OwnerRoleRequired`] if the caller is not an owner.
    /// - [`AppError::ActiveStoreLimit`] if the caller already has
    ///   [`MAX_ACTIVE_STORES_PER_OWNER`] active stores.
    #[instrument(skip(self, request), fields(user_id = %acting.id))]
    pub async fn create_store(
        &self,
        request: CreateStore,
        acting: AuthUser,
    ) -> Result<Store, AppError> {
        let user = self
            .users
            .get_by_id(acting.id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if user.role != UserRole::Owner {
            return Err(AppError::OwnerRoleRequired);
        }

        let new_store = NewStore {
            name: request.name,
            owner_id: user.id,
            created_at: request.created_at,
            closed_at: request.closed_at,
            minimum_order_quantity: request.minimum_order_quantity,
            announcement: request.announcement,
            status: request.status,
        };

        self.stores
            .create_capped(new_store, MAX_ACTIVE_STORES_PER_OWNER)
            .await?
            .ok_or(AppError::ActiveStoreLimit)
    }

    /// Every store, unfiltered, in natural order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the query fails.
    pub async fn list_stores(&self) -> Result<Vec<Store>, AppError> {
        Ok(self.stores.list_all().await?)
    }

    /// A single store with its non-deleted menus.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreNotFound`] if the store does not exist.
    #[instrument(skip(self))]
    pub async fn get_store(&self, store_id: StoreId) -> Result<StoreDetail, AppError> {
        let store = self
            .stores
            .get_by_id(store_id)
            .await?
            .ok_or(AppError::StoreNotFound)?;

        let menus = self.stores.visible_menus(store.id).await?;

        Ok(StoreDetail { store, menus })
    }

    /// Logically close a store (status -> CLOSED, row retained).
    ///
    /// Closing an already-closed store is a no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// - [`AppError::StoreNotFound`] if the store does not exist.
    /// - [`AppError::NotStoreOwner`] if the caller does not own the store.
    #[instrument(skip(self), fields(user_id = %acting.id))]
    pub async fn close_store(&self, store_id: StoreId, acting: AuthUser) -> Result<(), AppError> {
        let store = self
            .stores
            .get_by_id(store_id)
            .await?
            .ok_or(AppError::StoreNotFound)?;

        if store.owner_id != acting.id {
            return Err(AppError::NotStoreOwner);
        }

        self.stores.set_status(store.id, StoreStatus::Closed).await?;

        Ok(())
    }

    /// Composite search, recording each present parameter as a keyword.
    ///
    /// Each of the three parameters is recorded independently, whether or not
    /// the search matched anything. A recorder failure is logged and never
    /// propagated to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the search query itself fails.
    #[instrument(skip(self))]
    pub async fn search_stores(
        &self,
        filter: StoreSearchFilter,
    ) -> Result<Vec<Store>, AppError> {
        let stores = self.stores.search(&filter).await?;

        if let Some(store_name) = &filter.store_name {
            self.record_keyword(store_name).await;
        }
        if let Some(menu_name) = &filter.menu_name {
            self.record_keyword(menu_name).await;
        }
        if let Some(status) = filter.status {
            self.record_keyword(&status.to_string()).await;
        }

        Ok(stores)
    }

    async fn record_keyword(&self, keyword: &str) {
        if let Err(error) = self.keywords.record(keyword).await {
            warn!(%keyword, %error, "failed to record search keyword");
        }
    }
}
