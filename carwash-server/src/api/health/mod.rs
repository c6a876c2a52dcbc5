//! Health check route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "cars": { "washing": 2, "awaiting_payment": 1, "finished": 4, "total": 7 },
//!   "active_sessions": 3
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use shared::StatusCounts;

/// Health check router - public (no auth)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    cars: StatusCounts,
    active_sessions: usize,
    persistence_enabled: bool,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cars: state.registry.counts(),
        active_sessions: state.sessions.len(),
        persistence_enabled: state.config.persistence_enabled(),
    })
}
