//! Plate photo routes
//!
//! Serves stored plate photos back to dashboards. Public: the display
//! screen polls without a session.

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use http::header;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/photos/{filename}", get(serve_photo))
}

enum PhotoResponse {
    Ok(&'static str, Bytes),
    NotFound,
    BadRequest(&'static str),
}

impl IntoResponse for PhotoResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            PhotoResponse::Ok(content_type, content) => {
                (http::StatusCode::OK, [(header::CONTENT_TYPE, content_type)], content)
                    .into_response()
            }
            PhotoResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "Photo not found").into_response()
            }
            PhotoResponse::BadRequest(msg) => {
                (http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

/// GET /api/photos/{filename} - serve a stored plate photo
async fn serve_photo(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> PhotoResponse {
    // Security check: prevent path traversal
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return PhotoResponse::BadRequest("Invalid filename");
    }

    let file_path = state.config.uploads_dir().join(&filename);
    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let content_type = mime_guess::from_path(&filename)
                .first_raw()
                .unwrap_or("application/octet-stream");
            PhotoResponse::Ok(content_type, content.into())
        }
        Err(e) => {
            tracing::debug!(filename = %filename, error = %e, "Photo not found");
            PhotoResponse::NotFound
        }
    }
}
