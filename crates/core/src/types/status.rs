//! Business status and role enums.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a [`StoreStatus`] from its wire spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid store status: {0}")]
pub struct ParseStoreStatusError(String);

/// Error parsing a [`UserRole`] from its database spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user role: {0}")]
pub struct ParseUserRoleError(String);

/// Lifecycle status of a store.
///
/// Stores are never hard-deleted: closing a store transitions it to
/// `Closed` while the row (and its menus) stay queryable.
///
/// The wire representation is the upper-case enum name (`"ACTIVE"`,
/// `"CLOSED"`); the database representation is lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "store_status", rename_all = "lowercase")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreStatus {
    /// Open for business; counts toward the per-owner active cap.
    Active,
    /// Logically closed. One-way transition, no reopening operation.
    Closed,
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

impl std::str::FromStr for StoreStatus {
    type Err = ParseStoreStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(ParseStoreStatusError(s.to_owned())),
        }
    }
}

/// Role of a marketplace user.
///
/// Only users with the `Owner` role may create stores; the role is an
/// enumerated tag, not a class hierarchy - authorization is a guard on
/// the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "user_role", rename_all = "lowercase")
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// May create and close stores (at most 3 active at a time).
    Owner,
    /// May browse and order; cannot manage stores.
    Customer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owner => write!(f, "owner"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = ParseUserRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "customer" => Ok(Self::Customer),
            _ => Err(ParseUserRoleError(s.to_owned())),
        }
    }
}
