//! Session extractor
//!
//! Lets protected handlers take `employee: CurrentEmployee` as a parameter.
//! Normally the middleware already resolved the session and this just reads
//! the extension; the header fallback keeps handlers usable in tests that
//! bypass the middleware stack.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::AppError;
use crate::auth::CurrentEmployee;
use crate::core::ServerState;

impl FromRequestParts<ServerState> for CurrentEmployee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Already resolved by the middleware
        if let Some(employee) = parts.extensions.get::<CurrentEmployee>() {
            return Ok(employee.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or(AppError::Unauthorized)?;
        let token: Uuid = token.parse().map_err(|_| AppError::Unauthorized)?;

        let employee = state
            .sessions
            .resolve(token)
            .ok_or(AppError::SessionExpired)?;

        parts.extensions.insert(employee.clone());
        Ok(employee)
    }
}
