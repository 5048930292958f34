//! HTTP route handlers for the marketplace API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Liveness check
//! GET    /health/ready          - Readiness check (database ping)
//!
//! # Stores
//! POST   /stores                - Create a store (auth required)
//! GET    /stores                - List every store
//! GET    /stores/search         - Composite search by name/menu/status
//! GET    /stores/{store_id}     - Store detail with visible menus
//! DELETE /stores/{store_id}     - Logically close a store (owner only)
//! ```

pub mod stores;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the store routes router.
///
/// `/stores/search` must be registered before the `{store_id}` path so the
/// literal segment wins over the capture.
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/stores", post(stores::create_store).get(stores::list_stores))
        .route("/stores/search", get(stores::search_stores))
        .route(
            "/stores/{store_id}",
            get(stores::get_store).delete(stores::close_store),
        )
}
