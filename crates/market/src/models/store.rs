//! Store domain types.

use chrono::{DateTime, Utc};

use tamarind_core::{StoreId, StoreStatus, UserId};

/// A store (domain type).
///
/// `created_at` and `closed_at` are the business opening and closing moments
/// carried by the creation request, not row audit timestamps.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Store {
    /// Unique store ID.
    pub id: StoreId,
    /// Store display name.
    pub name: String,
    /// User who owns this store. Must have the `owner` role.
    pub owner_id: UserId,
    /// When the store opened.
    pub created_at: DateTime<Utc>,
    /// When the store closes.
    pub closed_at: DateTime<Utc>,
    /// Minimum number of items per order.
    pub minimum_order_quantity: i32,
    /// Free-form announcement shown to customers.
    pub announcement: String,
    /// Lifecycle status. Closing a store flips this to `closed`; the row stays.
    pub status: StoreStatus,
}

/// Parameters for persisting a new store.
#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
    pub minimum_order_quantity: i32,
    pub announcement: String,
    pub status: StoreStatus,
}

/// Composite search filter across stores and their menus.
///
/// Any subset of fields may be present; absent fields do not constrain the
/// result. Present fields combine with AND.
#[derive(Debug, Clone, Default)]
pub struct StoreSearchFilter {
    /// Case-insensitive substring match on the store name.
    pub store_name: Option<String>,
    /// Case-insensitive substring match on a non-deleted menu's name.
    pub menu_name: Option<String>,
    /// Exact status match.
    pub status: Option<StoreStatus>,
}

impl StoreSearchFilter {
    /// Whether no filter field is present (matches every store).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.store_name.is_none() && self.menu_name.is_none() && self.status.is_none()
    }
}
