//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tamarind_core::{UserId, UserRole};

/// A marketplace user (domain type).
///
/// Users are managed outside this service; the marketplace only reads them
/// for authorization checks.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Role used for authorization (owner vs customer).
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// The authenticated caller of the current request.
///
/// Produced per-request by the auth extractor from the session; not a
/// persisted entity. Carries only the identity - role lookups go through
/// the user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// ID of the authenticated user.
    pub id: UserId,
}
