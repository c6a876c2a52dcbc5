//! Summary route - counts per status for lightweight polling
//!
//! Dashboards refresh against this instead of pulling the full record set.

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::utils::{AppResponse, ok};
use shared::client::SummaryResponse;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/cars/summary", get(summary))
}

/// GET /api/cars/summary - per-status counts plus today's revenue
pub async fn summary(State(state): State<ServerState>) -> Json<AppResponse<SummaryResponse>> {
    ok(state.registry.summary(state.config.timezone))
}
