pub mod analyze;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let frontend = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(analyze::analyze_handler))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .fallback_service(frontend)
        .with_state(state)
}
