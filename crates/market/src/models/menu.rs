//! Menu domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use tamarind_core::{MenuId, StoreId};

/// An orderable menu item belonging to exactly one store.
///
/// Menus are soft-deleted: `is_deleted` rows are excluded from store detail
/// responses but never removed from the table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Menu {
    /// Unique menu ID.
    pub id: MenuId,
    /// Store this menu belongs to.
    pub store_id: StoreId,
    /// Menu display name.
    pub name: String,
    /// Price of a single item.
    pub price: Decimal,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// When the menu was created.
    pub created_at: DateTime<Utc>,
}
