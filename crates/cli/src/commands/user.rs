//! Marketplace user management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a store owner
//! tm-cli user create -n "Jane Doe" -r owner
//!
//! # Create a customer
//! tm-cli user create -n "John Smith"
//! ```
//!
//! # Environment Variables
//!
//! - `MARKET_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use sqlx::PgPool;
use thiserror::Error;

use tamarind_core::UserRole;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: owner, customer")]
    InvalidRole(String),
}

/// Create a new marketplace user.
///
/// # Arguments
///
/// * `name` - User's display name
/// * `role` - User's role (`owner` or `customer`)
///
/// # Returns
///
/// The ID of the created user.
///
/// # Errors
///
/// Returns an error if the role is unknown, the database URL is missing,
/// or the insert fails.
pub async fn create_user(name: &str, role: &str) -> Result<i64, UserError> {
    dotenvy::dotenv().ok();

    let role: UserRole = role
        .parse()
        .map_err(|_| UserError::InvalidRole(role.to_owned()))?;

    let database_url = std::env::var("MARKET_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| UserError::MissingEnvVar("MARKET_DATABASE_URL"))?;

    tracing::info!("Connecting to market database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Creating user: {} ({})", name, role);

    let user_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, role) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(role)
    .fetch_one(&pool)
    .await?;

    tracing::info!("User created successfully! ID: {}, Role: {}", user_id, role);

    Ok(user_id)
}
