//! Authentication middleware
//!
//! Resolves `Authorization: Bearer <token>` against the session store and
//! injects [`CurrentEmployee`] into the request extensions
//! (`req.extensions_mut().insert(employee)`).
//!
//! # Paths that skip authentication
//!
//! - `OPTIONS *` (CORS preflight)
//! - anything outside `/api/` (health, 404s)
//! - `/api/auth/login`
//! - `/api/photos/*` (plate photos are served to display screens)
//!
//! # Errors
//!
//! | Failure | HTTP |
//! |---------|------|
//! | missing/malformed Authorization header | 401 Unauthorized |
//! | unknown or expired token | 401 SessionExpired |

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::AppError;
use crate::core::ServerState;

/// Pull the token out of a `Bearer <token>` header value
fn extract_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").map(str::trim)
}

/// Authentication middleware - requires a live session
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight OPTIONS requests through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes skip auth (they 404 normally)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // Public API routes skip auth
    let is_public_api_route = path == "/api/auth/login" || path.starts_with("/api/photos/");
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => extract_bearer(header).ok_or(AppError::Unauthorized)?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Missing authorization header");
            return Err(AppError::Unauthorized);
        }
    };

    let token: Uuid = token.parse().map_err(|_| AppError::Unauthorized)?;

    match state.sessions.resolve(token) {
        Some(employee) => {
            req.extensions_mut().insert(employee);
            Ok(next.run(req).await)
        }
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Unknown or expired session token");
            Err(AppError::SessionExpired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer("Bearer abc-123"), Some("abc-123"));
        assert_eq!(extract_bearer("Basic abc"), None);
        assert_eq!(extract_bearer(""), None);
    }
}
