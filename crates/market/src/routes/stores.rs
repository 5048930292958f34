//! Store API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tamarind_core::{MenuId, StoreId, StoreStatus, UserId};

use crate::{
    error::AppError,
    middleware::RequireAuth,
    models::{Menu, Store, StoreSearchFilter},
    services::{CreateStore, StoreDetail},
    state::AppState,
};

/// Request body for creating a store.
#[derive(Debug, Deserialize)]
pub struct CreateStoreRequest {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
    pub minimum_order_quantity: i32,
    pub announcement: String,
    pub status: StoreStatus,
}

/// A store as returned by listing, search, and creation responses.
#[derive(Debug, Serialize)]
pub struct StoreSummary {
    pub id: StoreId,
    pub name: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
    pub minimum_order_quantity: i32,
    pub announcement: String,
    pub status: StoreStatus,
}

impl From<Store> for StoreSummary {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            name: store.name,
            owner_id: store.owner_id,
            created_at: store.created_at,
            closed_at: store.closed_at,
            minimum_order_quantity: store.minimum_order_quantity,
            announcement: store.announcement,
            status: store.status,
        }
    }
}

/// A menu projection in store detail responses.
#[derive(Debug, Serialize)]
pub struct MenuView {
    pub id: MenuId,
    pub name: String,
    pub price: Decimal,
}

impl From<Menu> for MenuView {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.id,
            name: menu.name,
            price: menu.price,
        }
    }
}

/// A single store with its visible menus.
#[derive(Debug, Serialize)]
pub struct StoreDetailResponse {
    pub id: StoreId,
    pub name: String,
    pub status: StoreStatus,
    pub menus: Vec<MenuView>,
}

impl From<StoreDetail> for StoreDetailResponse {
    fn from(detail: StoreDetail) -> Self {
        Self {
            id: detail.store.id,
            name: detail.store.name,
            status: detail.store.status,
            menus: detail.menus.into_iter().map(MenuView::from).collect(),
        }
    }
}

/// Response body for closing a store.
#[derive(Debug, Serialize)]
pub struct CloseStoreResponse {
    pub message: &'static str,
}

/// Query parameters for composite store search.
///
/// `status` arrives as a raw string so an unknown value maps to the
/// contract's bad-request code instead of a generic deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub store_name: Option<String>,
    pub menu_name: Option<String>,
    pub status: Option<String>,
}

impl SearchQuery {
    fn into_filter(self) -> Result<StoreSearchFilter, AppError> {
        let status = match self.status {
            Some(raw) => Some(
                raw.parse::<StoreStatus>()
                    .map_err(|_| AppError::InvalidStatus(raw))?,
            ),
            None => None,
        };

        Ok(StoreSearchFilter {
            store_name: self.store_name,
            menu_name: self.menu_name,
            status,
        })
    }
}

/// Create a store owned by the authenticated caller.
///
/// # Errors
///
/// Returns an error if the caller is unknown, lacks the owner role, or
/// already has the maximum number of active stores.
pub async fn create_store(
    RequireAuth(auth_user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<CreateStoreRequest>,
) -> Result<(StatusCode, Json<StoreSummary>), AppError> {
    let store = state
        .store_service()
        .create_store(
            CreateStore {
                name: body.name,
                created_at: body.created_at,
                closed_at: body.closed_at,
                minimum_order_quantity: body.minimum_order_quantity,
                announcement: body.announcement,
                status: body.status,
            },
            auth_user,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(StoreSummary::from(store))))
}

/// List every store, open for unauthenticated callers.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list_stores(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoreSummary>>, AppError> {
    let stores = state.store_service().list_stores().await?;

    Ok(Json(stores.into_iter().map(StoreSummary::from).collect()))
}

/// Fetch a single store with its non-deleted menus.
///
/// # Errors
///
/// Returns an error if the store does not exist.
pub async fn get_store(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<Json<StoreDetailResponse>, AppError> {
    let detail = state.store_service().get_store(store_id).await?;

    Ok(Json(StoreDetailResponse::from(detail)))
}

/// Logically close a store. Owner only; the row stays queryable.
///
/// # Errors
///
/// Returns an error if the store does not exist or the caller is not
/// its owner.
pub async fn close_store(
    RequireAuth(auth_user): RequireAuth,
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<Json<CloseStoreResponse>, AppError> {
    state
        .store_service()
        .close_store(store_id, auth_user)
        .await?;

    Ok(Json(CloseStoreResponse {
        message: "Store closed",
    }))
}

/// Composite search over stores by name, menu name, and status.
///
/// # Errors
///
/// Returns an error if `status` is not a known value or the query fails.
pub async fn search_stores(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<StoreSummary>>, AppError> {
    let filter = query.into_filter()?;
    let stores = state.store_service().search_stores(filter).await?;

    Ok(Json(stores.into_iter().map(StoreSummary::from).collect()))
}
