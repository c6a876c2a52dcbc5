//! Registry reset route
//!
//! Bulk clear of every car record. Confirmation is the client's job; the
//! response carries what was removed so it can be shown back to the
//! operator.

use axum::{Json, Router, extract::State, routing::post};

use crate::auth::CurrentEmployee;
use crate::core::ServerState;
use crate::utils::{AppResponse, ok_with_message};
use shared::ClearedStats;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/registry/reset", post(reset))
}

/// POST /api/registry/reset - clear the whole registry
pub async fn reset(
    State(state): State<ServerState>,
    employee: CurrentEmployee,
) -> Json<AppResponse<ClearedStats>> {
    let stats = state.registry.clear();

    tracing::info!(
        employee = %employee.name,
        cleared = stats.total,
        "Daily data reset requested"
    );

    // Persist the now-empty registry immediately; a failure here is logged
    // and left to the next interval tick
    if let Err(e) = state.flush_snapshot() {
        tracing::error!(error = %e, "Snapshot after reset failed");
    }

    ok_with_message(
        stats,
        format!("Daily data reset completed. Cleared {} cars.", stats.total),
    )
}
