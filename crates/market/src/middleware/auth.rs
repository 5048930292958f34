//! Authentication extractor.
//!
//! Identity resolution (login, token exchange) happens outside this service;
//! the external auth flow stores the authenticated user in the session and
//! this extractor only reads it back.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use crate::models::AuthUser;

/// Session key under which the auth flow stores the current user.
pub const CURRENT_USER_KEY: &str = "current_user";

/// Extractor that requires an authenticated caller.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(auth_user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, user {}!", auth_user.id)
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

/// Rejection returned when the caller is not authenticated.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": "UNAUTHORIZED",
            "message": "Authentication required",
        }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Session is inserted into extensions by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection)?;

        let auth_user: AuthUser = session
            .get(CURRENT_USER_KEY)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection)?;

        Ok(Self(auth_user))
    }
}
