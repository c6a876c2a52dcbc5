//! Car API module
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/cars | POST | register a car (multipart, washer only) |
//! | /api/cars | GET | list cars, optional ?status= filter |
//! | /api/cars/{id} | GET | single car |
//! | /api/cars/{id}/status | POST | role-gated status move |
//! | /api/cars/{id}/payment | POST | take payment (cashier only) |

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::core::ServerState;

/// Multipart size ceiling: a plate photo plus form fields (~16 MB)
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024 + 64 * 1024;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/cars", post(handler::create).get(handler::list))
        .route("/api/cars/{id}", get(handler::get_by_id))
        .route("/api/cars/{id}/status", post(handler::update_status))
        .route("/api/cars/{id}/payment", post(handler::pay))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
