use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::server::handlers;
use crate::server::state::AppState;

/// Maximum accepted upload size; Jest summaries for large repos run to tens
/// of megabytes once failure messages are included.
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/upload-test-summary", post(handlers::upload_file))
        .route("/upload-json-text", post(handlers::upload_json_text))
        .route("/summary", get(handlers::summary))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
