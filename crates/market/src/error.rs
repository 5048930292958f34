//! Unified error handling for the marketplace.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the marketplace.
///
/// Business-rule rejections carry a stable wire code that clients match on;
/// the code-to-status mapping is part of the external contract.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// The acting user's identity does not resolve to a known user.
    #[error("User not found")]
    UserNotFound,

    /// A non-owner attempted to create a store.
    #[error("Only users with the owner role may create stores")]
    OwnerRoleRequired,

    /// The owner already has the maximum number of active stores.
    #[error("Owner already has the maximum number of active stores")]
    ActiveStoreLimit,

    /// Referenced store does not exist.
    #[error("Store not found")]
    StoreNotFound,

    /// The acting user is not the store's owner.
    #[error("Only the store's owner may close it")]
    NotStoreOwner,

    /// A search parameter could not be parsed.
    #[error("Invalid store status: {0}")]
    InvalidStatus(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable wire code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Database(_) | Self::Internal(_) => "INTERNAL_ERROR",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::OwnerRoleRequired => "STORE_FORBIDDEN",
            Self::ActiveStoreLimit | Self::InvalidStatus(_) => "STORE_BAD_REQUEST",
            Self::StoreNotFound => "STORE_NOT_FOUND",
            Self::NotStoreOwner => "STORE_DELETE_FORBIDDEN",
        }
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UserNotFound | Self::StoreNotFound => StatusCode::NOT_FOUND,
            Self::OwnerRoleRequired | Self::NotStoreOwner => StatusCode::FORBIDDEN,
            Self::ActiveStoreLimit | Self::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Marketplace request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        let body = Json(json!({
            "code": self.code(),
            "message": message,
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn business_errors_map_to_contract_statuses() {
        assert_eq!(get_status(AppError::UserNotFound), StatusCode::NOT_FOUND);
        assert_eq!(get_status(AppError::StoreNotFound), StatusCode::NOT_FOUND);
        assert_eq!(get_status(AppError::OwnerRoleRequired), StatusCode::FORBIDDEN);
        assert_eq!(get_status(AppError::NotStoreOwner), StatusCode::FORBIDDEN);
        assert_eq!(get_status(AppError::ActiveStoreLimit), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn wire_codes_are_stable() {
        assert_eq!(AppError::UserNotFound.code(), "USER_NOT_FOUND");
        assert_eq!(AppError::OwnerRoleRequired.code(), "STORE_FORBIDDEN");
        assert_eq!(AppError::ActiveStoreLimit.code(), "STORE_BAD_REQUEST");
        assert_eq!(
            AppError::InvalidStatus("OPEN".to_string()).code(),
            "STORE_BAD_REQUEST"
        );
        assert_eq!(AppError::StoreNotFound.code(), "STORE_NOT_FOUND");
        assert_eq!(AppError::NotStoreOwner.code(), "STORE_DELETE_FORBIDDEN");
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = AppError::Internal("connection string leaked".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
