//! Server implementation
//!
//! Router assembly, HTTP serving, background tasks, graceful shutdown.

use std::time::Duration;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::tasks::BackgroundTasks;
use crate::core::{Config, ServerState};

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        // Workflow APIs
        .merge(crate::api::cars::router())
        .merge(crate::api::summary::router())
        .merge(crate::api::reports::router())
        .merge(crate::api::registry::router())
        .merge(crate::api::photos::router())
}

/// Attach middleware and state to the app
///
/// `require_auth` is applied at router level; it skips the public routes
/// itself. Split out so tests can drive the full stack via `tower::Service`.
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Register background tasks: periodic snapshot and session sweeper
    fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();

        if self.state.config.persistence_enabled() {
            let state = self.state.clone();
            let token = tasks.shutdown_token();
            let period = Duration::from_secs(state.config.snapshot_interval_secs);
            tasks.spawn("registry_snapshot", async move {
                let mut interval = tokio::time::interval(period);
                interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            // A failed write is reported once and left to the
                            // next tick; in-memory state is unaffected
                            if let Err(e) = state.flush_snapshot() {
                                tracing::error!(error = %e, "Periodic snapshot failed");
                            }
                        }
                        _ = token.cancelled() => break,
                    }
                }
            });
        }

        {
            let state = self.state.clone();
            let token = tasks.shutdown_token();
            tasks.spawn("session_sweeper", async move {
                let mut interval = tokio::time::interval(Duration::from_secs(60));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            state.sessions.sweep_expired();
                        }
                        _ = token.cancelled() => break,
                    }
                }
            });
        }

        tasks
    }

    /// Serve until ctrl-c, then stop tasks and write a final snapshot
    pub async fn run(&self) -> anyhow::Result<()> {
        let tasks = self.start_background_tasks();

        let app = build_router(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Carwash server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        tasks.shutdown().await;

        // Final snapshot so a clean shutdown never loses mutations
        if let Err(e) = self.state.flush_snapshot() {
            tracing::error!(error = %e, "Final snapshot on shutdown failed");
        }

        Ok(())
    }
}
